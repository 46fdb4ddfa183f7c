//! Schema type values for the reflectql type-resolution engine.
//!
//! This crate holds the value side of the schema description system: the
//! [`SchemaType`] enum covering scalars, objects, interfaces, enums, input
//! objects, lists, non-null wrappers, and named forward references, plus the
//! category predicates and unwrapping helpers the resolution engine relies on.
//!
//! Schema types are plain values. They are produced by a registry or composed
//! with [`SchemaType::list`] / [`SchemaType::non_null`], inspected through the
//! predicate methods, and never mutated in place.

mod schema_type;

pub use schema_type::{
    EnumType, InputObjectType, InterfaceType, ObjectType, ScalarType, SchemaType,
};
