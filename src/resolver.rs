//! Type resolution from native descriptors to schema types.
//!
//! This module provides [`TypeResolver`], which converts a [`TypeDescriptor`]
//! into the correctly nested schema type by unwrapping its wrapper shapes:
//!
//! - A bare leaf is implicitly required and resolves non-null.
//! - `optional` is the only way to obtain a nullable schema type; it strips
//!   the non-null wrapping the inner resolution would otherwise apply.
//! - `list` wraps its element non-null by default, so a plain `Vec<T>`
//!   becomes `[T!]` while `Vec<Option<T>>` becomes `[T]`.
//! - A forward reference resolves to a named deferred type, non-null unless
//!   an enclosing `optional` suppresses it.
//!
//! The narrowing accessors run the same resolution and then assert a
//! required schema-type category, turning a mismatch into a descriptive
//! [`ResolveError`].
//!
//! # Example
//!
//! ```
//! use reflectql::{ObjectType, SchemaType, TypeDescriptor, TypeRegistry, TypeResolver};
//!
//! struct Droid;
//!
//! let mut registry = TypeRegistry::with_primitives();
//! registry.link(
//!     &TypeDescriptor::leaf::<Droid>("Droid"),
//!     SchemaType::from(ObjectType::new("Droid")),
//! );
//!
//! let resolver = TypeResolver::new(&registry);
//! let hero = resolver
//!     .output_type(&TypeDescriptor::leaf::<Droid>("Droid"), "hero")
//!     .unwrap();
//! assert_eq!(hero.to_string(), "Droid!");
//! ```

use reflectql_schema::{InterfaceType, ObjectType, SchemaType};

use crate::{ResolveError, TypeDescriptor, TypeRegistry, TypeShape, WrapperKind};

/// Strip the synthetic prefix from a reference target's display name.
///
/// Reflection-derived names for function-like types come out in a
/// `(Args) -> Ret` shape; only the segment up to the first space survives,
/// after the leading parenthesis is dropped. Plain names pass through
/// verbatim.
fn normalize_reference_name(name: &str) -> &str {
    match name.strip_prefix('(') {
        Some(stripped) => stripped.split(' ').next().unwrap_or(stripped),
        None => name,
    }
}

/// Resolves native type descriptors to schema types.
///
/// Borrows the registry for the duration of resolution; construction is
/// free, so callers typically build one per schema-construction pass.
pub struct TypeResolver<'reg> {
    registry: &'reg TypeRegistry,
}

impl<'reg> TypeResolver<'reg> {
    /// Create a resolver over the given registry.
    pub fn new(registry: &'reg TypeRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a descriptor to a schema type.
    ///
    /// Returns `Ok(None)` when no mapping exists for the descriptor (directly
    /// or through its wrapper shapes), and an error only for the list-element
    /// misconfiguration described on [`ResolveError::NotNullableCapable`].
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> Result<Option<SchemaType>, ResolveError> {
        match descriptor.shape() {
            // A plain leaf type is implicitly required. A mapping that is
            // already non-null cannot take the wrapper and resolves to
            // nothing, the same as an unmapped type.
            TypeShape::Leaf => Ok(self
                .registry
                .lookup(descriptor)
                .cloned()
                .and_then(SchemaType::non_null)),

            TypeShape::Wrapper {
                kind: WrapperKind::Optional,
                inner,
            } => match inner.shape() {
                // An optional reference stays nullable: the optional
                // suppresses the non-null wrapping a bare reference gets.
                TypeShape::Wrapper {
                    kind: WrapperKind::Reference,
                    inner: target,
                } => Ok(Some(SchemaType::reference(normalize_reference_name(
                    target.name(),
                )))),

                TypeShape::Wrapper { .. } => self.resolve(inner),

                // Returning the registry entry unwrapped is what makes the
                // field nullable.
                TypeShape::Leaf => Ok(self.registry.lookup(inner).cloned()),
            },

            TypeShape::Wrapper {
                kind: WrapperKind::List,
                inner,
            } => match inner.shape() {
                TypeShape::Wrapper { .. } => Ok(self.resolve(inner)?.map(SchemaType::list)),

                // List elements are required by default. The element mapping
                // must accept the non-null wrapper; a mapping registered as
                // already non-null is a configuration error, reported as a
                // typed failure rather than a panic.
                TypeShape::Leaf => {
                    let Some(element) = self.registry.lookup(inner).cloned() else {
                        return Ok(None);
                    };
                    let element = element.non_null().ok_or_else(|| {
                        ResolveError::NotNullableCapable {
                            type_name: inner.name().to_string(),
                        }
                    })?;
                    Ok(Some(element.list()))
                }
            },

            TypeShape::Wrapper {
                kind: WrapperKind::Reference,
                inner,
            } => Ok(SchemaType::reference(normalize_reference_name(inner.name())).non_null()),
        }
    }

    /// Resolve a descriptor for use in a result (output) position.
    ///
    /// The innermost leaf must either be representable as a generic schema
    /// value or be a capability contract; the resolved type must belong to
    /// the output category.
    pub fn output_type(
        &self,
        descriptor: &TypeDescriptor,
        field_name: &str,
    ) -> Result<SchemaType, ResolveError> {
        let leaf = descriptor.innermost();
        if !leaf.is_representable() && !leaf.is_capability() {
            return Err(ResolveError::NotRepresentable {
                type_name: descriptor.name().to_string(),
                field_name: field_name.to_string(),
            });
        }

        let resolved = self.resolve(descriptor)?.ok_or_else(|| ResolveError::Unmapped {
            type_name: descriptor.name().to_string(),
            field_name: Some(field_name.to_string()),
        })?;

        if !resolved.is_output_type() {
            return Err(ResolveError::NotOutputType {
                type_name: descriptor.name().to_string(),
                field_name: field_name.to_string(),
            });
        }
        Ok(resolved)
    }

    /// Resolve a descriptor for use in an argument (input) position.
    pub fn input_type(
        &self,
        descriptor: &TypeDescriptor,
        field_name: &str,
    ) -> Result<SchemaType, ResolveError> {
        let resolved = self.resolve(descriptor)?.ok_or_else(|| ResolveError::Unmapped {
            type_name: descriptor.name().to_string(),
            field_name: Some(field_name.to_string()),
        })?;

        if !resolved.is_input_type() {
            return Err(ResolveError::NotInputType {
                type_name: descriptor.name().to_string(),
                field_name: field_name.to_string(),
            });
        }
        Ok(resolved)
    }

    /// Resolve a descriptor down to its underlying named schema type,
    /// unwrapping list and non-null layers.
    pub fn named_type(&self, descriptor: &TypeDescriptor) -> Result<SchemaType, ResolveError> {
        let resolved = self.resolve(descriptor)?.ok_or_else(|| ResolveError::Unmapped {
            type_name: descriptor.name().to_string(),
            field_name: None,
        })?;

        let named = resolved.named_type().ok_or_else(|| ResolveError::NotNamedType {
            type_name: descriptor.name().to_string(),
        })?;
        Ok(named.clone())
    }

    /// Resolve a capability contract to its interface type.
    ///
    /// The descriptor itself must denote a capability contract; the check
    /// runs before any resolution. The resolved type must be non-null and
    /// wrap an interface.
    pub fn interface_type(
        &self,
        descriptor: &TypeDescriptor,
    ) -> Result<InterfaceType, ResolveError> {
        if !descriptor.is_capability() {
            return Err(ResolveError::NotACapability {
                type_name: descriptor.name().to_string(),
            });
        }

        let resolved = self.resolve(descriptor)?.ok_or_else(|| ResolveError::Unmapped {
            type_name: descriptor.name().to_string(),
            field_name: None,
        })?;

        let inner = resolved.as_non_null().ok_or_else(|| ResolveError::Nullable {
            type_name: descriptor.name().to_string(),
        })?;
        let interface = inner.as_interface().ok_or_else(|| ResolveError::NotInterfaceType {
            type_name: descriptor.name().to_string(),
        })?;
        Ok(interface.clone())
    }

    /// Resolve a descriptor to its object type.
    ///
    /// The resolved type must be non-null and wrap an object.
    pub fn object_type(&self, descriptor: &TypeDescriptor) -> Result<ObjectType, ResolveError> {
        let resolved = self.resolve(descriptor)?.ok_or_else(|| ResolveError::Unmapped {
            type_name: descriptor.name().to_string(),
            field_name: None,
        })?;

        let inner = resolved.as_non_null().ok_or_else(|| ResolveError::Nullable {
            type_name: descriptor.name().to_string(),
        })?;
        let object = inner.as_object().ok_or_else(|| ResolveError::NotObjectType {
            type_name: descriptor.name().to_string(),
        })?;
        Ok(object.clone())
    }
}
