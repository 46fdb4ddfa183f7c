//! SchemaType - the value model of the schema description system.
//!
//! This module provides [`SchemaType`], an enum covering every kind of type a
//! schema can mention: the five named kinds (scalar, object, interface, enum,
//! input object), the two wrapper kinds (list, non-null), and named forward
//! references for recursive schemas.
//!
//! # Nullability
//!
//! Following GraphQL conventions, every type is nullable unless wrapped in
//! `NonNull`. A `NonNull` wrapper cannot be applied twice; [`SchemaType::non_null`]
//! returns `None` when the receiver is already non-null.
//!
//! # Example
//!
//! ```
//! use reflectql_schema::{ScalarType, SchemaType};
//!
//! let int = SchemaType::from(ScalarType::new("Int"));
//! let required = int.non_null().unwrap();
//! assert_eq!(required.to_string(), "Int!");
//!
//! let list = required.list();
//! assert_eq!(list.to_string(), "[Int!]");
//! ```

use std::fmt;

/// A scalar type, identified by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType {
    /// The type name as it appears in the schema.
    pub name: String,
    /// Optional human-readable description.
    pub description: Option<String>,
}

impl ScalarType {
    /// Create a scalar type with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An object type - a concrete named type usable in result positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    /// The type name as it appears in the schema.
    pub name: String,
    /// Optional human-readable description.
    pub description: Option<String>,
}

impl ObjectType {
    /// Create an object type with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An interface type - an abstract contract implemented by object types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    /// The type name as it appears in the schema.
    pub name: String,
    /// Optional human-readable description.
    pub description: Option<String>,
}

impl InterfaceType {
    /// Create an interface type with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An enum type with a fixed set of named values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    /// The type name as it appears in the schema.
    pub name: String,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// The enum's value names.
    pub values: Vec<String>,
}

impl EnumType {
    /// Create an enum type with the given name and values.
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An input object type - a named type usable only in argument positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectType {
    /// The type name as it appears in the schema.
    pub name: String,
    /// Optional human-readable description.
    pub description: Option<String>,
}

impl InputObjectType {
    /// Create an input object type with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A schema type value.
///
/// The five named kinds terminate a type; `List` and `NonNull` wrap another
/// type; `Ref` names a type declared elsewhere, resolved at schema-assembly
/// time so recursive and mutually-referential schemas can be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaType {
    /// A scalar leaf type.
    Scalar(ScalarType),
    /// A concrete object type.
    Object(ObjectType),
    /// An abstract interface type.
    Interface(InterfaceType),
    /// An enum type.
    Enum(EnumType),
    /// An input object type.
    InputObject(InputObjectType),
    /// A list of the inner type.
    List(Box<SchemaType>),
    /// A non-null wrapper around the inner type.
    NonNull(Box<SchemaType>),
    /// A named forward reference, deferred until schema assembly.
    Ref(String),
}

impl SchemaType {
    /// Create a named forward reference.
    pub fn reference(name: impl Into<String>) -> Self {
        SchemaType::Ref(name.into())
    }

    /// Wrap this type in a list.
    pub fn list(self) -> Self {
        SchemaType::List(Box::new(self))
    }

    /// Wrap this type in `NonNull`, or `None` if it is already non-null.
    ///
    /// Non-null wrappers do not nest; a type either admits the wrapper or is
    /// already required.
    pub fn non_null(self) -> Option<Self> {
        if self.is_non_null() {
            None
        } else {
            Some(SchemaType::NonNull(Box::new(self)))
        }
    }

    /// Whether this type is wrapped in `NonNull`.
    pub fn is_non_null(&self) -> bool {
        matches!(self, SchemaType::NonNull(_))
    }

    /// Whether this type is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, SchemaType::List(_))
    }

    /// Whether this type is a named forward reference.
    pub fn is_reference(&self) -> bool {
        matches!(self, SchemaType::Ref(_))
    }

    /// The inner type of a `NonNull` wrapper, if this is one.
    pub fn as_non_null(&self) -> Option<&SchemaType> {
        match self {
            SchemaType::NonNull(inner) => Some(inner),
            _ => None,
        }
    }

    /// The interface value, if this is an interface type.
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            SchemaType::Interface(interface) => Some(interface),
            _ => None,
        }
    }

    /// The object value, if this is an object type.
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            SchemaType::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The name of this type, if it is a named kind or a reference.
    ///
    /// Wrappers have no name of their own; use [`SchemaType::named_type`]
    /// first to reach the underlying named type.
    pub fn name(&self) -> Option<&str> {
        match self {
            SchemaType::Scalar(t) => Some(&t.name),
            SchemaType::Object(t) => Some(&t.name),
            SchemaType::Interface(t) => Some(&t.name),
            SchemaType::Enum(t) => Some(&t.name),
            SchemaType::InputObject(t) => Some(&t.name),
            SchemaType::Ref(name) => Some(name),
            SchemaType::List(_) | SchemaType::NonNull(_) => None,
        }
    }

    /// Unwrap `List` and `NonNull` layers down to the underlying named type.
    ///
    /// Returns `None` if the unwrapping does not terminate in a named type.
    pub fn named_type(&self) -> Option<&SchemaType> {
        match self {
            SchemaType::List(inner) | SchemaType::NonNull(inner) => inner.named_type(),
            SchemaType::Scalar(_)
            | SchemaType::Object(_)
            | SchemaType::Interface(_)
            | SchemaType::Enum(_)
            | SchemaType::InputObject(_)
            | SchemaType::Ref(_) => Some(self),
        }
    }

    /// Whether this type may appear in argument (input) positions.
    ///
    /// Scalars, enums, and input objects are input types; references defer
    /// the question to schema assembly and are accepted here. Wrappers take
    /// the category of their inner type.
    pub fn is_input_type(&self) -> bool {
        match self {
            SchemaType::Scalar(_) | SchemaType::Enum(_) | SchemaType::InputObject(_) => true,
            SchemaType::Ref(_) => true,
            SchemaType::List(inner) | SchemaType::NonNull(inner) => inner.is_input_type(),
            SchemaType::Object(_) | SchemaType::Interface(_) => false,
        }
    }

    /// Whether this type may appear in result (output) positions.
    ///
    /// Everything except input objects is an output type; wrappers take the
    /// category of their inner type.
    pub fn is_output_type(&self) -> bool {
        match self {
            SchemaType::Scalar(_)
            | SchemaType::Object(_)
            | SchemaType::Interface(_)
            | SchemaType::Enum(_)
            | SchemaType::Ref(_) => true,
            SchemaType::List(inner) | SchemaType::NonNull(inner) => inner.is_output_type(),
            SchemaType::InputObject(_) => false,
        }
    }
}

impl From<ScalarType> for SchemaType {
    fn from(value: ScalarType) -> Self {
        SchemaType::Scalar(value)
    }
}

impl From<ObjectType> for SchemaType {
    fn from(value: ObjectType) -> Self {
        SchemaType::Object(value)
    }
}

impl From<InterfaceType> for SchemaType {
    fn from(value: InterfaceType) -> Self {
        SchemaType::Interface(value)
    }
}

impl From<EnumType> for SchemaType {
    fn from(value: EnumType) -> Self {
        SchemaType::Enum(value)
    }
}

impl From<InputObjectType> for SchemaType {
    fn from(value: InputObjectType) -> Self {
        SchemaType::InputObject(value)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // GraphQL notation: "Int!", "[String!]"; forward references print
        // with a leading '&' to distinguish them from resolved named types.
        match self {
            SchemaType::List(inner) => write!(f, "[{}]", inner),
            SchemaType::NonNull(inner) => write!(f, "{}!", inner),
            SchemaType::Ref(name) => write!(f, "&{}", name),
            other => match other.name() {
                Some(name) => write!(f, "{}", name),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_null_wraps_named_types() {
        let int = SchemaType::from(ScalarType::new("Int"));
        let wrapped = int.non_null().unwrap();
        assert!(wrapped.is_non_null());
    }

    #[test]
    fn non_null_does_not_nest() {
        let int = SchemaType::from(ScalarType::new("Int"));
        let wrapped = int.non_null().unwrap();
        assert!(wrapped.non_null().is_none());
    }

    #[test]
    fn list_wraps_anything() {
        let int = SchemaType::from(ScalarType::new("Int"));
        let list = int.clone().list();
        assert!(list.is_list());

        let nested = int.list().list();
        assert!(nested.is_list());
    }

    #[test]
    fn as_non_null_returns_inner() {
        let object = SchemaType::from(ObjectType::new("Droid"));
        let wrapped = object.clone().non_null().unwrap();
        assert_eq!(wrapped.as_non_null(), Some(&object));
        assert_eq!(object.as_non_null(), None);
    }

    #[test]
    fn narrowing_accessors() {
        let interface = SchemaType::from(InterfaceType::new("Character"));
        assert!(interface.as_interface().is_some());
        assert!(interface.as_object().is_none());

        let object = SchemaType::from(ObjectType::new("Droid"));
        assert!(object.as_object().is_some());
        assert!(object.as_interface().is_none());
    }

    #[test]
    fn names() {
        assert_eq!(SchemaType::from(ScalarType::new("Int")).name(), Some("Int"));
        assert_eq!(SchemaType::reference("Episode").name(), Some("Episode"));
        assert_eq!(SchemaType::from(ScalarType::new("Int")).list().name(), None);
    }

    #[test]
    fn named_type_unwraps_wrappers() {
        let scalar = SchemaType::from(ScalarType::new("String"));
        let wrapped = scalar.clone().non_null().unwrap().list();

        let named = wrapped.named_type().unwrap();
        assert_eq!(named, &scalar);
    }

    #[test]
    fn named_type_on_named_is_identity() {
        let object = SchemaType::from(ObjectType::new("Droid"));
        assert_eq!(object.named_type(), Some(&object));
    }

    #[test]
    fn input_categories() {
        assert!(SchemaType::from(ScalarType::new("Int")).is_input_type());
        assert!(SchemaType::from(EnumType::new("Episode", ["NEWHOPE", "EMPIRE"])).is_input_type());
        assert!(SchemaType::from(InputObjectType::new("ReviewInput")).is_input_type());
        assert!(SchemaType::reference("ReviewInput").is_input_type());

        assert!(!SchemaType::from(ObjectType::new("Droid")).is_input_type());
        assert!(!SchemaType::from(InterfaceType::new("Character")).is_input_type());
    }

    #[test]
    fn output_categories() {
        assert!(SchemaType::from(ScalarType::new("Int")).is_output_type());
        assert!(SchemaType::from(ObjectType::new("Droid")).is_output_type());
        assert!(SchemaType::from(InterfaceType::new("Character")).is_output_type());
        assert!(SchemaType::from(EnumType::new("Episode", ["NEWHOPE"])).is_output_type());
        assert!(SchemaType::reference("Droid").is_output_type());

        assert!(!SchemaType::from(InputObjectType::new("ReviewInput")).is_output_type());
    }

    #[test]
    fn categories_recurse_through_wrappers() {
        let input_list = SchemaType::from(InputObjectType::new("ReviewInput"))
            .non_null()
            .unwrap()
            .list();
        assert!(input_list.is_input_type());
        assert!(!input_list.is_output_type());

        let output_list = SchemaType::from(ObjectType::new("Droid"))
            .non_null()
            .unwrap()
            .list();
        assert!(output_list.is_output_type());
        assert!(!output_list.is_input_type());
    }

    #[test]
    fn display_notation() {
        let int = SchemaType::from(ScalarType::new("Int"));
        assert_eq!(int.to_string(), "Int");
        assert_eq!(int.clone().non_null().unwrap().to_string(), "Int!");

        let string = SchemaType::from(ScalarType::new("String"));
        let list = string.non_null().unwrap().list();
        assert_eq!(list.to_string(), "[String!]");

        assert_eq!(SchemaType::reference("Episode").to_string(), "&Episode");
    }

    #[test]
    fn descriptions() {
        let scalar = ScalarType::new("DateTime").with_description("RFC 3339 timestamp");
        assert_eq!(scalar.description.as_deref(), Some("RFC 3339 timestamp"));

        let object = ObjectType::new("Droid").with_description("An autonomous mechanical being");
        assert_eq!(
            object.description.as_deref(),
            Some("An autonomous mechanical being")
        );
    }

    #[test]
    fn enum_values() {
        let episode = EnumType::new("Episode", ["NEWHOPE", "EMPIRE", "JEDI"]);
        assert_eq!(episode.values.len(), 3);
        assert_eq!(episode.values[0], "NEWHOPE");
    }
}
