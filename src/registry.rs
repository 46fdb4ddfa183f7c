//! TypeRegistry - the mapping from native types to schema types.
//!
//! This module provides [`TypeRegistry`], the storage consulted by the
//! resolver whenever it reaches a leaf type. The registry is an owned value
//! constructed by the schema-building component, not process-global state;
//! each test or embedding builds its own.
//!
//! # Thread Safety
//!
//! `TypeRegistry` is **not thread-safe** by design. In the typical usage
//! pattern:
//!
//! - **Registration phase**: the registry is populated single-threaded during
//!   application setup, primitives first, then custom types via
//!   [`TypeRegistry::link`].
//!
//! - **Resolution phase**: after setup, the registry becomes effectively
//!   read-only. If concurrent registration is needed, the caller must wrap
//!   the registry in appropriate synchronization (e.g. `Arc<RwLock<_>>`).
//!
//! `link` takes `&mut self`, so the borrow checker enforces that
//! registration cannot overlap shared lookups.
//!
//! # Example
//!
//! ```
//! use reflectql::{ObjectType, SchemaType, TypeDescriptor, TypeRegistry};
//!
//! struct Droid;
//!
//! let mut registry = TypeRegistry::with_primitives();
//! registry.link(
//!     &TypeDescriptor::leaf::<Droid>("Droid"),
//!     SchemaType::from(ObjectType::new("Droid")),
//! );
//!
//! assert!(registry.lookup(&TypeDescriptor::leaf::<i32>("i32")).is_some());
//! assert!(registry.lookup(&TypeDescriptor::leaf::<Droid>("Droid")).is_some());
//! ```

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use reflectql_schema::{ScalarType, SchemaType};

use crate::{TypeDescriptor, TypeKey};

/// Mapping from native type identity to schema type.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: FxHashMap<TypeKey, SchemaType>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the primitive mappings pre-registered.
    ///
    /// Every integer width maps to the `Int` scalar, both float widths to
    /// `Float`, `bool` to `Boolean`, and `String`/`&str` to `String`.
    pub fn with_primitives() -> Self {
        let mut registry = Self::new();

        let int = SchemaType::from(ScalarType::new("Int"));
        registry.seed::<i8>(int.clone());
        registry.seed::<i16>(int.clone());
        registry.seed::<i32>(int.clone());
        registry.seed::<i64>(int.clone());
        registry.seed::<isize>(int.clone());
        registry.seed::<u8>(int.clone());
        registry.seed::<u16>(int.clone());
        registry.seed::<u32>(int.clone());
        registry.seed::<u64>(int.clone());
        registry.seed::<usize>(int);

        let float = SchemaType::from(ScalarType::new("Float"));
        registry.seed::<f32>(float.clone());
        registry.seed::<f64>(float);

        registry.seed::<bool>(SchemaType::from(ScalarType::new("Boolean")));

        let string = SchemaType::from(ScalarType::new("String"));
        registry.seed::<String>(string.clone());
        registry.seed::<&'static str>(string);

        registry
    }

    /// Register or overwrite the schema type for a native type.
    ///
    /// Linking the `()` placeholder is a no-op: it stands for "no type" and
    /// must never resolve. Re-linking a type replaces the previous mapping
    /// cleanly.
    pub fn link(&mut self, descriptor: &TypeDescriptor, schema_type: SchemaType) {
        if descriptor.is_unit() {
            trace!(type_name = descriptor.name(), "ignoring link for the unit placeholder");
            return;
        }

        if schema_type.is_non_null() {
            // Such a mapping cannot take the non-null wrapper again, so bare
            // leaves resolve to nothing and list elements fail with a typed
            // error. Flag it at the moment of registration.
            warn!(
                type_name = descriptor.name(),
                schema_type = %schema_type,
                "linking an already non-null schema type"
            );
        }

        if let Some(previous) = self.types.insert(descriptor.key(), schema_type) {
            debug!(
                type_name = descriptor.name(),
                previous = %previous,
                "overwrote schema type link"
            );
        } else {
            trace!(type_name = descriptor.name(), "linked schema type");
        }
    }

    /// Look up the registered schema type for a native type.
    pub fn lookup(&self, descriptor: &TypeDescriptor) -> Option<&SchemaType> {
        self.types.get(&descriptor.key())
    }

    /// Whether a mapping exists for the given native type.
    pub fn contains(&self, descriptor: &TypeDescriptor) -> bool {
        self.types.contains_key(&descriptor.key())
    }

    /// Number of registered mappings.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn seed<T: 'static>(&mut self, schema_type: SchemaType) {
        self.types.insert(TypeKey::of::<T>(), schema_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflectql_schema::ObjectType;

    struct Droid;
    struct Unregistered;

    fn droid() -> TypeDescriptor {
        TypeDescriptor::leaf::<Droid>("Droid")
    }

    #[test]
    fn empty_registry() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn primitives_are_seeded() {
        let registry = TypeRegistry::with_primitives();

        for (descriptor, expected) in [
            (TypeDescriptor::leaf::<i8>("i8"), "Int"),
            (TypeDescriptor::leaf::<i16>("i16"), "Int"),
            (TypeDescriptor::leaf::<i32>("i32"), "Int"),
            (TypeDescriptor::leaf::<i64>("i64"), "Int"),
            (TypeDescriptor::leaf::<isize>("isize"), "Int"),
            (TypeDescriptor::leaf::<u8>("u8"), "Int"),
            (TypeDescriptor::leaf::<u16>("u16"), "Int"),
            (TypeDescriptor::leaf::<u32>("u32"), "Int"),
            (TypeDescriptor::leaf::<u64>("u64"), "Int"),
            (TypeDescriptor::leaf::<usize>("usize"), "Int"),
            (TypeDescriptor::leaf::<f32>("f32"), "Float"),
            (TypeDescriptor::leaf::<f64>("f64"), "Float"),
            (TypeDescriptor::leaf::<bool>("bool"), "Boolean"),
            (TypeDescriptor::leaf::<String>("String"), "String"),
            (TypeDescriptor::leaf::<&'static str>("&str"), "String"),
        ] {
            let schema_type = registry
                .lookup(&descriptor)
                .unwrap_or_else(|| panic!("{} should be seeded", descriptor.name()));
            assert_eq!(
                schema_type.name(),
                Some(expected),
                "{} should map to {}",
                descriptor.name(),
                expected
            );
        }
    }

    #[test]
    fn link_and_lookup() {
        let mut registry = TypeRegistry::new();
        registry.link(&droid(), SchemaType::from(ObjectType::new("Droid")));

        assert!(registry.contains(&droid()));
        let found = registry.lookup(&droid()).unwrap();
        assert_eq!(found.name(), Some("Droid"));
    }

    #[test]
    fn lookup_unregistered_is_none() {
        let registry = TypeRegistry::with_primitives();
        let descriptor = TypeDescriptor::leaf::<Unregistered>("Unregistered");
        assert!(registry.lookup(&descriptor).is_none());
        assert!(!registry.contains(&descriptor));
    }

    #[test]
    fn relink_overwrites_cleanly() {
        let mut registry = TypeRegistry::new();
        registry.link(&droid(), SchemaType::from(ObjectType::new("Droid")));
        registry.link(&droid(), SchemaType::from(ObjectType::new("Robot")));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup(&droid()).unwrap().name(), Some("Robot"));
    }

    #[test]
    fn unit_placeholder_is_ignored() {
        let mut registry = TypeRegistry::new();
        registry.link(
            &TypeDescriptor::unit(),
            SchemaType::from(ObjectType::new("Nothing")),
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn lookup_is_keyed_by_identity_not_name() {
        let mut registry = TypeRegistry::new();
        registry.link(&droid(), SchemaType::from(ObjectType::new("Droid")));

        // A different native type with the same display name is still unmapped.
        let impostor = TypeDescriptor::leaf::<Unregistered>("Droid");
        assert!(registry.lookup(&impostor).is_none());

        // The same native type under a different display name still resolves.
        let renamed = TypeDescriptor::leaf::<Droid>("Automaton");
        assert!(registry.lookup(&renamed).is_some());
    }
}
