//! Error types for type resolution.
//!
//! Every failure mode of the resolution engine is a variant of
//! [`ResolveError`]. Errors are terminal for the resolution attempt that
//! raised them: resolution is deterministic and pure, so retrying the same
//! input fails the same way. Each variant carries the offending type's
//! display name, and the field name where the caller supplied one, so the
//! message can be surfaced directly as a schema-construction diagnostic.

use thiserror::Error;

fn for_field(field_name: &Option<String>) -> String {
    match field_name {
        Some(name) => format!(" (field '{}')", name),
        None => String::new(),
    }
}

/// A failed attempt to resolve a native type to a schema type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The leaf type cannot be converted to the generic value representation
    /// and is not a capability contract.
    #[error("type '{type_name}' for field '{field_name}' cannot be represented as a schema value and is not a capability contract")]
    NotRepresentable {
        /// Display name of the offending type.
        type_name: String,
        /// The field being resolved.
        field_name: String,
    },

    /// No schema type is registered for the type, directly or through its
    /// wrapper shapes.
    #[error("no schema type registered for type '{type_name}'{}", for_field(.field_name))]
    Unmapped {
        /// Display name of the offending type.
        type_name: String,
        /// The field being resolved, when the caller supplied one.
        field_name: Option<String>,
    },

    /// The type resolved, but not to something usable in result positions.
    #[error("type '{type_name}' for field '{field_name}' does not resolve to an output type")]
    NotOutputType {
        /// Display name of the offending type.
        type_name: String,
        /// The field being resolved.
        field_name: String,
    },

    /// The type resolved, but not to something usable in argument positions.
    #[error("type '{type_name}' for field '{field_name}' does not resolve to an input type")]
    NotInputType {
        /// Display name of the offending type.
        type_name: String,
        /// The field being resolved.
        field_name: String,
    },

    /// The type resolved, but unwrapping did not reach a named type.
    #[error("type '{type_name}' does not resolve to a named type")]
    NotNamedType {
        /// Display name of the offending type.
        type_name: String,
    },

    /// Interface resolution was requested for a type that is not an abstract
    /// capability contract.
    #[error("type '{type_name}' is not a capability contract")]
    NotACapability {
        /// Display name of the offending type.
        type_name: String,
    },

    /// The type resolved, but its required inner type is not an interface.
    #[error("type '{type_name}' does not resolve to an interface type")]
    NotInterfaceType {
        /// Display name of the offending type.
        type_name: String,
    },

    /// The type resolved, but its required inner type is not an object.
    #[error("type '{type_name}' does not resolve to an object type")]
    NotObjectType {
        /// Display name of the offending type.
        type_name: String,
    },

    /// Interface or object resolution produced a nullable schema type;
    /// these categories must resolve non-null.
    #[error("type '{type_name}' resolves to a nullable schema type where a non-null one is required")]
    Nullable {
        /// Display name of the offending type.
        type_name: String,
    },

    /// A list element's registered schema type is already non-null and
    /// cannot take the element-level non-null wrapper.
    #[error("list element type '{type_name}' is registered as an already non-null schema type and cannot be wrapped again")]
    NotNullableCapable {
        /// Display name of the offending element type.
        type_name: String,
    },
}
