//! Output model: the API description document and its descriptors.
//!
//! Serialization is hand-written because the wire format is JSON-LD:
//! keys carry `@` prefixes, every node declares a constant `@type`, and
//! absent expects/returns must appear as explicit `null`s.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::types::Verb;
use crate::vocab::VocabDefinition;

/// The `@context` every generated document points at.
pub const HYDRA_CONTEXT: &str = "http://www.w3.org/ns/hydra/context.jsonld";

/// A complete API description document.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDescription {
    /// Document id, `<server>/<api>/vocab`.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Entrypoint URL, `<server>/<api>`.
    pub entrypoint: String,
    /// Descriptors in vocabulary order.
    pub supported_class: Vec<ClassDescriptor>,
}

impl Serialize for ApiDescription {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("ApiDescription", 7)?;
        s.serialize_field("@context", HYDRA_CONTEXT)?;
        s.serialize_field("@id", &self.id)?;
        s.serialize_field("@type", "ApiDocumentation")?;
        s.serialize_field("title", &self.title)?;
        s.serialize_field("description", &self.description)?;
        s.serialize_field("entrypoint", &self.entrypoint)?;
        s.serialize_field("supportedClass", &self.supported_class)?;
        s.end()
    }
}

/// One API class: a vocabulary class plus its attached properties and
/// synthesized operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDescriptor {
    /// Identifier assigned at build time, `vocab:<title>`. Stable for the
    /// lifetime of the descriptor.
    pub id: String,
    /// The class label from the vocabulary.
    pub title: String,
    /// The class comment from the vocabulary.
    pub description: String,
    /// Whether a server should expose the class as an endpoint. Every
    /// built class is an endpoint; the flag is not serialized.
    pub endpoint: bool,
    pub properties: Vec<PropertyDescriptor>,
    pub operations: Vec<OperationDescriptor>,
}

impl ClassDescriptor {
    /// Build a bare descriptor for a class-tagged definition. Properties
    /// and operations are attached by the builder.
    pub fn from_definition(def: &VocabDefinition) -> Self {
        ClassDescriptor {
            id: format!("vocab:{}", def.label),
            title: def.label.clone(),
            description: def.comment.clone(),
            endpoint: true,
            properties: Vec::new(),
            operations: Vec::new(),
        }
    }
}

impl Serialize for ClassDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("ClassDescriptor", 6)?;
        s.serialize_field("@id", &self.id)?;
        s.serialize_field("@type", "hydra:Class")?;
        s.serialize_field("title", &self.title)?;
        s.serialize_field("description", &self.description)?;
        s.serialize_field("supportedProperty", &self.properties)?;
        s.serialize_field("supportedOperation", &self.operations)?;
        s.end()
    }
}

/// A property attached to a class.
///
/// Every attached property is marked required, readable, and writable;
/// the vocabulary carries no finer-grained access information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Resolved property id: a class descriptor id for class-valued
    /// properties, the definition's own `@id` otherwise.
    pub id: String,
    /// The property label from the vocabulary.
    pub label: String,
    pub required: bool,
    pub readable: bool,
    pub writable: bool,
}

impl PropertyDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        PropertyDescriptor {
            id: id.into(),
            label: label.into(),
            required: true,
            readable: true,
            writable: true,
        }
    }
}

impl Serialize for PropertyDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("PropertyDescriptor", 6)?;
        s.serialize_field("@type", "SupportedProperty")?;
        s.serialize_field("property", &self.id)?;
        s.serialize_field("title", &self.label)?;
        s.serialize_field("required", &self.required)?;
        s.serialize_field("readable", &self.readable)?;
        s.serialize_field("writable", &self.writable)?;
        s.end()
    }
}

/// One HTTP operation on a class.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDescriptor {
    /// Operation name, the class title with the verb appended.
    pub name: String,
    pub method: Verb,
    /// Class id of the expected payload, if any.
    pub expects: Option<String>,
    /// Class id of the returned payload, if any.
    pub returns: Option<String>,
    pub expects_header: Vec<String>,
    pub returns_header: Vec<String>,
    pub possible_status: Vec<Status>,
}

impl Serialize for OperationDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("OperationDescriptor", 8)?;
        s.serialize_field("@type", "hydra:Operation")?;
        s.serialize_field("title", &self.name)?;
        s.serialize_field("method", self.method.as_str())?;
        s.serialize_field("expects", &self.expects)?;
        s.serialize_field("returns", &self.returns)?;
        s.serialize_field("expectsHeader", &self.expects_header)?;
        s.serialize_field("returnsHeader", &self.returns_header)?;
        s.serialize_field("possibleStatus", &self.possible_status)?;
        s.end()
    }
}

/// A status an operation may answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub code: u16,
    pub description: String,
}

impl Status {
    /// A 200 status with the given description.
    pub fn ok(description: impl Into<String>) -> Self {
        Status {
            code: 200,
            description: description.into(),
        }
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Status", 3)?;
        s.serialize_field("@type", "Status")?;
        s.serialize_field("statusCode", &self.code)?;
        s.serialize_field("description", &self.description)?;
        s.end()
    }
}
