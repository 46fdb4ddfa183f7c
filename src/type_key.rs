//! Deterministic identity keys for native types.
//!
//! This module provides [`TypeKey`], a 64-bit key that uniquely identifies a
//! native type for registry storage. Leaf keys are derived from the
//! compiler's [`std::any::TypeId`], so identity follows the type itself
//! rather than any derived name string - two keys are equal exactly when
//! their types are the same, and renaming a type never changes its identity.
//!
//! Wrapper shapes (optional, list, reference) combine the inner type's key
//! with a per-modifier domain constant, so `Option<T>`, `Vec<T>`, and a
//! reference to `T` each get distinct, deterministic identities without the
//! wrapper generics being visible at the call site.
//!
//! # Examples
//!
//! ```
//! use reflectql::TypeKey;
//!
//! struct Droid;
//!
//! let key1 = TypeKey::of::<Droid>();
//! let key2 = TypeKey::of::<Droid>();
//! assert_eq!(key1, key2);
//!
//! assert_ne!(TypeKey::optional_of(key1), TypeKey::list_of(key1));
//! ```

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Domain constants mixed into wrapper keys.
///
/// Each wrapper modifier gets its own constant so the same inner type
/// produces distinct keys under different modifiers.
mod key_constants {
    /// Separator constant applied between composition steps.
    pub const SEP: u64 = 0x9e3779b97f4a7c15;

    /// Domain marker for optional wrappers.
    pub const OPTIONAL: u64 = 0x5c4d3e2f1a0b9687;

    /// Domain marker for list wrappers.
    pub const LIST: u64 = 0xa1b2c3d4e5f60718;

    /// Domain marker for forward-reference wrappers.
    pub const REFERENCE: u64 = 0x31f7c6b5a4d39282;
}

/// A deterministic 64-bit key identifying a native type.
///
/// Equality and hashing are based on the underlying type's identity; equal
/// keys always hash identically. Keys are `Copy` and created transiently at
/// each lookup or insert.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeKey(pub u64);

impl TypeKey {
    /// Create a key for a native type.
    ///
    /// `?Sized` is accepted so trait-object types (`dyn Contract`) can be
    /// keyed the same way as concrete types.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::of_type_id(TypeId::of::<T>())
    }

    /// Create a key from an existing [`TypeId`].
    #[inline]
    pub fn of_type_id(type_id: TypeId) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        type_id.hash(&mut hasher);
        TypeKey(hasher.finish())
    }

    /// The key of an optional wrapper around `inner`.
    #[inline]
    pub fn optional_of(inner: TypeKey) -> Self {
        Self::wrap(key_constants::OPTIONAL, inner)
    }

    /// The key of a list wrapper around `inner`.
    #[inline]
    pub fn list_of(inner: TypeKey) -> Self {
        Self::wrap(key_constants::LIST, inner)
    }

    /// The key of a forward reference to `inner`.
    #[inline]
    pub fn reference_to(inner: TypeKey) -> Self {
        Self::wrap(key_constants::REFERENCE, inner)
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    // wrapping_mul rather than XOR keeps composition non-commutative, so
    // nesting order matters (optional-of-list != list-of-optional).
    #[inline]
    fn wrap(domain: u64, inner: TypeKey) -> Self {
        TypeKey(domain.wrapping_mul(key_constants::SEP).wrapping_add(inner.0))
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({:#018x})", self.0)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Human;
    struct Droid;
    trait Character {}

    #[test]
    fn key_determinism() {
        assert_eq!(TypeKey::of::<Human>(), TypeKey::of::<Human>());
        assert_eq!(TypeKey::of::<i32>(), TypeKey::of::<i32>());
    }

    #[test]
    fn key_uniqueness() {
        assert_ne!(TypeKey::of::<Human>(), TypeKey::of::<Droid>());
        assert_ne!(TypeKey::of::<i32>(), TypeKey::of::<i64>());
        assert_ne!(TypeKey::of::<String>(), TypeKey::of::<&'static str>());
    }

    #[test]
    fn trait_object_keys() {
        let key1 = TypeKey::of::<dyn Character>();
        let key2 = TypeKey::of::<dyn Character>();
        assert_eq!(key1, key2);
        assert_ne!(key1, TypeKey::of::<Human>());
    }

    #[test]
    fn wrapper_keys_are_distinct_per_modifier() {
        let base = TypeKey::of::<Droid>();
        let optional = TypeKey::optional_of(base);
        let list = TypeKey::list_of(base);
        let reference = TypeKey::reference_to(base);

        assert_ne!(optional, base);
        assert_ne!(list, base);
        assert_ne!(reference, base);
        assert_ne!(optional, list);
        assert_ne!(optional, reference);
        assert_ne!(list, reference);
    }

    #[test]
    fn wrapper_keys_are_deterministic() {
        let base = TypeKey::of::<Droid>();
        assert_eq!(TypeKey::optional_of(base), TypeKey::optional_of(base));
        assert_eq!(TypeKey::list_of(base), TypeKey::list_of(base));
    }

    #[test]
    fn nesting_order_matters() {
        let base = TypeKey::of::<Droid>();
        let optional_of_list = TypeKey::optional_of(TypeKey::list_of(base));
        let list_of_optional = TypeKey::list_of(TypeKey::optional_of(base));
        assert_ne!(optional_of_list, list_of_optional);

        let nested = TypeKey::optional_of(TypeKey::optional_of(base));
        assert_ne!(nested, TypeKey::optional_of(base));
    }

    #[test]
    fn key_display() {
        let key = TypeKey::of::<Droid>();
        assert!(format!("{}", key).starts_with("0x"));
        assert!(format!("{:?}", key).starts_with("TypeKey(0x"));
    }

    #[test]
    fn key_as_u64() {
        let key = TypeKey(0x123456789abcdef0);
        assert_eq!(key.as_u64(), 0x123456789abcdef0);
    }
}
