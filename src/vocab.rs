//! Typed model of a JSON-LD vocabulary document.
//!
//! A vocabulary is a flat `defines` list. Each entry carries an `@id` URI,
//! an `@type` tag, an `rdfs:label`, and optionally an `rdfs:comment` plus
//! the `propertyOf`/`propertyOn` links that tie properties to classes.
//! Keys outside this shape are ignored on decode.

use serde::Deserialize;
use serde_json::Value;

/// A parsed vocabulary document.
#[derive(Debug, Clone, Deserialize)]
pub struct Vocabulary {
    /// Definitions in document order.
    pub defines: Vec<VocabDefinition>,
}

impl Vocabulary {
    /// Iterate the class-tagged definitions, preserving document order.
    pub fn classes(&self) -> impl Iterator<Item = &VocabDefinition> {
        self.defines
            .iter()
            .filter(|def| def.kind == DefinitionKind::Class)
    }
}

/// One entry of a vocabulary's `defines` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VocabDefinition {
    /// Full URI of the definition, e.g. `https://example.org/npl#Loan`.
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@type")]
    pub kind: DefinitionKind,

    /// Human-readable name. Classes are keyed on this label throughout.
    #[serde(rename = "rdfs:label")]
    pub label: String,

    #[serde(rename = "rdfs:comment", default)]
    pub comment: String,

    /// Owning class of a property definition, as a node reference.
    #[serde(rename = "propertyOf", default)]
    pub property_of: Option<NodeRef>,

    /// Range of a property definition: a node reference or a bare literal.
    #[serde(rename = "propertyOn", default)]
    pub property_on: Option<PropertyTarget>,
}

/// The `@type` tag of a definition.
///
/// Unknown tags decode as [`DefinitionKind::Other`] so a vocabulary that
/// mixes in annotation terms still loads; such definitions are never
/// treated as classes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DefinitionKind {
    Class,
    DataProperty,
    ObjectProperty,
    Other(String),
}

impl DefinitionKind {
    pub fn as_str(&self) -> &str {
        match self {
            DefinitionKind::Class => "rdfs:Class",
            DefinitionKind::DataProperty => "owl:DataProperty",
            DefinitionKind::ObjectProperty => "owl:ObjectProperty",
            DefinitionKind::Other(tag) => tag,
        }
    }
}

impl From<String> for DefinitionKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "rdfs:Class" => DefinitionKind::Class,
            "owl:DataProperty" => DefinitionKind::DataProperty,
            "owl:ObjectProperty" => DefinitionKind::ObjectProperty,
            _ => DefinitionKind::Other(tag),
        }
    }
}

/// A `{"@id": <uri>}` reference to another vocabulary node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeRef {
    #[serde(rename = "@id")]
    pub id: String,
}

/// The value of `propertyOn`.
///
/// Object properties point at a class through a [`NodeRef`]; data
/// properties may carry any literal there (a type name, a sample value).
/// Only the node form participates in class resolution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertyTarget {
    Node(NodeRef),
    Literal(Value),
}

/// Fragment of a URI: the text between the first `#` and the next one,
/// or `None` when the URI has no fragment at all.
pub fn fragment(uri: &str) -> Option<&str> {
    let mut parts = uri.split('#');
    parts.next();
    parts.next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Vocabulary {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn definition_kind_from_tag() {
        assert_eq!(DefinitionKind::from("rdfs:Class".to_string()), DefinitionKind::Class);
        assert_eq!(
            DefinitionKind::from("owl:DataProperty".to_string()),
            DefinitionKind::DataProperty
        );
        assert_eq!(
            DefinitionKind::from("owl:ObjectProperty".to_string()),
            DefinitionKind::ObjectProperty
        );
        assert_eq!(
            DefinitionKind::from("owl:AnnotationProperty".to_string()),
            DefinitionKind::Other("owl:AnnotationProperty".to_string())
        );
    }

    #[test]
    fn definition_kind_as_str_round_trips() {
        assert_eq!(DefinitionKind::Class.as_str(), "rdfs:Class");
        assert_eq!(DefinitionKind::Other("x:Custom".to_string()).as_str(), "x:Custom");
    }

    #[test]
    fn decodes_minimal_class() {
        let vocab = decode(
            r#"{
                "defines": [
                    {
                        "@id": "https://example.org/npl#Loan",
                        "@type": "rdfs:Class",
                        "rdfs:label": "Loan",
                        "rdfs:comment": "A loan issued to a borrower."
                    }
                ]
            }"#,
        );
        assert_eq!(vocab.defines.len(), 1);
        let def = &vocab.defines[0];
        assert_eq!(def.kind, DefinitionKind::Class);
        assert_eq!(def.label, "Loan");
        assert!(def.property_of.is_none());
        assert!(def.property_on.is_none());
    }

    #[test]
    fn missing_comment_defaults_to_empty() {
        let vocab = decode(
            r#"{
                "defines": [
                    {
                        "@id": "https://example.org/npl#Loan",
                        "@type": "rdfs:Class",
                        "rdfs:label": "Loan"
                    }
                ]
            }"#,
        );
        assert_eq!(vocab.defines[0].comment, "");
    }

    #[test]
    fn missing_label_is_an_error() {
        let result = serde_json::from_str::<Vocabulary>(
            r#"{
                "defines": [
                    {"@id": "https://example.org/npl#Loan", "@type": "rdfs:Class"}
                ]
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn property_on_node_form() {
        let vocab = decode(
            r#"{
                "defines": [
                    {
                        "@id": "https://example.org/npl#hasBorrower",
                        "@type": "owl:ObjectProperty",
                        "rdfs:label": "hasBorrower",
                        "propertyOf": {"@id": "https://example.org/npl#Loan"},
                        "propertyOn": {"@id": "https://example.org/npl#Borrower"}
                    }
                ]
            }"#,
        );
        let def = &vocab.defines[0];
        assert_eq!(
            def.property_of,
            Some(NodeRef {
                id: "https://example.org/npl#Loan".to_string()
            })
        );
        match &def.property_on {
            Some(PropertyTarget::Node(node)) => {
                assert_eq!(node.id, "https://example.org/npl#Borrower");
            }
            other => panic!("expected node target, got {:?}", other),
        }
    }

    #[test]
    fn property_on_literal_form() {
        let vocab = decode(
            r#"{
                "defines": [
                    {
                        "@id": "https://example.org/npl#totalBalance",
                        "@type": "owl:DataProperty",
                        "rdfs:label": "totalBalance",
                        "propertyOf": {"@id": "https://example.org/npl#Loan"},
                        "propertyOn": "xsd:decimal"
                    }
                ]
            }"#,
        );
        match &vocab.defines[0].property_on {
            Some(PropertyTarget::Literal(value)) => {
                assert_eq!(value, &Value::String("xsd:decimal".to_string()));
            }
            other => panic!("expected literal target, got {:?}", other),
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let vocab = decode(
            r#"{
                "@context": {"rdfs": "http://www.w3.org/2000/01/rdf-schema#"},
                "defines": [
                    {
                        "@id": "https://example.org/npl#Loan",
                        "@type": "rdfs:Class",
                        "rdfs:label": "Loan",
                        "skos:note": "ignored"
                    }
                ]
            }"#,
        );
        assert_eq!(vocab.defines[0].label, "Loan");
    }

    #[test]
    fn classes_filters_and_preserves_order() {
        let vocab = decode(
            r#"{
                "defines": [
                    {"@id": "https://example.org/npl#Loan", "@type": "rdfs:Class", "rdfs:label": "Loan"},
                    {
                        "@id": "https://example.org/npl#totalBalance",
                        "@type": "owl:DataProperty",
                        "rdfs:label": "totalBalance",
                        "propertyOf": {"@id": "https://example.org/npl#Loan"}
                    },
                    {"@id": "https://example.org/npl#Borrower", "@type": "rdfs:Class", "rdfs:label": "Borrower"}
                ]
            }"#,
        );
        let labels: Vec<&str> = vocab.classes().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Loan", "Borrower"]);
    }

    // === Fragment Extraction ===

    #[test]
    fn fragment_of_uri() {
        assert_eq!(fragment("https://example.org/npl#Loan"), Some("Loan"));
    }

    #[test]
    fn fragment_missing() {
        assert_eq!(fragment("https://example.org/npl"), None);
    }

    #[test]
    fn fragment_empty() {
        assert_eq!(fragment("https://example.org/npl#"), Some(""));
    }

    #[test]
    fn fragment_stops_at_second_hash() {
        assert_eq!(fragment("https://example.org/a#b#c"), Some("b"));
    }
}
