//! Native type descriptors and wrapper-shape classification.
//!
//! This module provides [`TypeDescriptor`], the value the host reflection
//! front-end hands to the resolution engine for every field type. A
//! descriptor carries a stable [`TypeKey`], a display name, and a kind: it
//! is either a leaf (a primitive or user-defined type) or one of three
//! compound wrapper shapes holding an inner descriptor.
//!
//! The engine never constructs descriptors on its own and only inspects them
//! through the queries here: [`TypeDescriptor::shape`] classifies the wrapper
//! shape as a closed tagged union, [`TypeDescriptor::is_capability`] and
//! [`TypeDescriptor::is_representable`] report the leaf's capabilities, and
//! [`TypeDescriptor::innermost`] walks to the leaf under any wrapper stack.
//!
//! # Examples
//!
//! ```
//! use reflectql::{TypeDescriptor, TypeShape, WrapperKind};
//!
//! struct Droid;
//!
//! let descriptor = TypeDescriptor::leaf::<Droid>("Droid").optional();
//! match descriptor.shape() {
//!     TypeShape::Wrapper { kind: WrapperKind::Optional, inner } => {
//!         assert_eq!(inner.name(), "Droid");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use std::fmt;

use crate::TypeKey;

/// The modifier a compound wrapper shape carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperKind {
    /// The value may be absent; unwraps to a nullable schema type.
    Optional,
    /// The value is a sequence; unwraps to a list schema type.
    List,
    /// A named forward reference to a type declared elsewhere.
    Reference,
}

/// What a leaf type can do, as reported by the reflection front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Convertible to the schema system's generic value representation.
    Value,
    /// An abstract capability contract (a trait-object type), usable as a
    /// schema interface.
    Capability,
    /// Neither convertible nor abstract; rejected in output positions.
    Opaque,
}

/// The shape of a descriptor: a leaf, or a wrapper around an inner type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape<'a> {
    /// A primitive or user-defined type with no modifier.
    Leaf,
    /// A compound wrapper carrying a modifier and an inner descriptor.
    Wrapper {
        /// The modifier this wrapper applies.
        kind: WrapperKind,
        /// The wrapped inner type.
        inner: &'a TypeDescriptor,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DescriptorKind {
    Leaf { representation: Representation },
    Wrapper { kind: WrapperKind, inner: Box<TypeDescriptor> },
}

/// A description of a native type, as supplied by the reflection front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    key: TypeKey,
    name: String,
    kind: DescriptorKind,
}

impl TypeDescriptor {
    /// Describe a concrete leaf type convertible to the generic value
    /// representation.
    pub fn leaf<T: 'static>(name: impl Into<String>) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            name: name.into(),
            kind: DescriptorKind::Leaf {
                representation: Representation::Value,
            },
        }
    }

    /// Describe an abstract capability contract (a trait-object type).
    ///
    /// Capability types resolve to schema interfaces and bypass the
    /// representability check in output positions.
    pub fn capability<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            name: name.into(),
            kind: DescriptorKind::Leaf {
                representation: Representation::Capability,
            },
        }
    }

    /// Describe a leaf type with no usable representation.
    pub fn opaque<T: 'static>(name: impl Into<String>) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            name: name.into(),
            kind: DescriptorKind::Leaf {
                representation: Representation::Opaque,
            },
        }
    }

    /// The "no type" placeholder, ignored by registry linking.
    pub fn unit() -> Self {
        Self::leaf::<()>("()")
    }

    /// Wrap this descriptor as optional.
    pub fn optional(self) -> Self {
        Self {
            key: TypeKey::optional_of(self.key),
            name: format!("Option<{}>", self.name),
            kind: DescriptorKind::Wrapper {
                kind: WrapperKind::Optional,
                inner: Box::new(self),
            },
        }
    }

    /// Wrap this descriptor as a list.
    pub fn list(self) -> Self {
        Self {
            key: TypeKey::list_of(self.key),
            name: format!("Vec<{}>", self.name),
            kind: DescriptorKind::Wrapper {
                kind: WrapperKind::List,
                inner: Box::new(self),
            },
        }
    }

    /// Wrap this descriptor as a named forward reference to its type.
    ///
    /// References defer resolution to schema-assembly time, which is what
    /// makes recursive and self-referential schemas possible.
    pub fn reference(self) -> Self {
        Self {
            key: TypeKey::reference_to(self.key),
            name: format!("Reference<{}>", self.name),
            kind: DescriptorKind::Wrapper {
                kind: WrapperKind::Reference,
                inner: Box::new(self),
            },
        }
    }

    /// The stable identity key of this descriptor.
    #[inline]
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// The display name, used in diagnostics.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classify this descriptor's shape.
    pub fn shape(&self) -> TypeShape<'_> {
        match &self.kind {
            DescriptorKind::Leaf { .. } => TypeShape::Leaf,
            DescriptorKind::Wrapper { kind, inner } => TypeShape::Wrapper {
                kind: *kind,
                inner,
            },
        }
    }

    /// Whether this descriptor is a compound wrapper.
    pub fn is_wrapper(&self) -> bool {
        matches!(self.kind, DescriptorKind::Wrapper { .. })
    }

    /// Whether this descriptor denotes an abstract capability contract.
    pub fn is_capability(&self) -> bool {
        matches!(
            self.kind,
            DescriptorKind::Leaf {
                representation: Representation::Capability,
            }
        )
    }

    /// Whether this leaf is convertible to the generic value representation.
    pub fn is_representable(&self) -> bool {
        matches!(
            self.kind,
            DescriptorKind::Leaf {
                representation: Representation::Value,
            }
        )
    }

    /// Whether this descriptor denotes the "no type" placeholder.
    pub fn is_unit(&self) -> bool {
        self.key == TypeKey::of::<()>()
    }

    /// Walk through wrapper layers to the innermost leaf descriptor.
    pub fn innermost(&self) -> &TypeDescriptor {
        match &self.kind {
            DescriptorKind::Leaf { .. } => self,
            DescriptorKind::Wrapper { inner, .. } => inner.innermost(),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
