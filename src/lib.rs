//! reflectql - resolve native Rust type descriptors into schema types.
//!
//! Applications that expose their data structures through a GraphQL-style
//! schema need a bridge from native types to schema type objects. This crate
//! is that bridge: a [`TypeRegistry`] maps native type identities to schema
//! types (pre-seeded with the primitive scalars), and a [`TypeResolver`]
//! recursively unwraps compound wrapper shapes - optional, list, forward
//! reference - into the correctly nested schema type, inverting nullability
//! along the way (everything is required unless an `optional` says
//! otherwise).
//!
//! Narrowing accessors ([`TypeResolver::output_type`],
//! [`TypeResolver::input_type`], [`TypeResolver::named_type`],
//! [`TypeResolver::interface_type`], [`TypeResolver::object_type`]) run the
//! same resolution and then demand a schema-type category, failing with a
//! descriptive [`ResolveError`] when the resolved type does not fit.
//!
//! The schema type values themselves live in the [`schema`] crate and are
//! re-exported here.
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
//!
//! // A bare field type is implicitly required...
//! let hero = resolver
//!     .output_type(&TypeDescriptor::leaf::<Droid>("Droid"), "hero")
//!     .unwrap();
//! assert_eq!(hero.to_string(), "Droid!");
//!
//! // ...and optional is what makes it nullable.
//! let sidekick = resolver
//!     .output_type(&TypeDescriptor::leaf::<Droid>("Droid").optional(), "sidekick")
//!     .unwrap();
//! assert_eq!(sidekick.to_string(), "Droid");
//! ```

mod descriptor;
mod error;
mod registry;
mod resolver;
mod type_key;

pub use descriptor::{Representation, TypeDescriptor, TypeShape, WrapperKind};
pub use error::ResolveError;
pub use registry::TypeRegistry;
pub use resolver::TypeResolver;
pub use type_key::TypeKey;

pub use reflectql_schema as schema;
pub use reflectql_schema::{
    EnumType, InputObjectType, InterfaceType, ObjectType, ScalarType, SchemaType,
};
