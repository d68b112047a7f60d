//! Vocabulary API Documentation
//!
//! Derives hypermedia API description documents from JSON-LD domain
//! vocabularies.
//!
//! A vocabulary is a flat list of class and property definitions. Each
//! class becomes an API class with its owned properties attached and a
//! fixed table of HTTP operations synthesized. Unresolved property
//! references are dropped and reported, never fatal.
//!
//! # Example
//!
//! ```
//! use vocab_apidoc::{build_description, load_vocab_str, DocConfig};
//!
//! let vocab = load_vocab_str(r#"{
//!     "defines": [
//!         {
//!             "@id": "https://example.org/npl#Loan",
//!             "@type": "rdfs:Class",
//!             "rdfs:label": "Loan",
//!             "rdfs:comment": "A loan issued to a borrower."
//!         },
//!         {
//!             "@id": "https://example.org/npl#totalBalance",
//!             "@type": "owl:DataProperty",
//!             "rdfs:label": "totalBalance",
//!             "rdfs:comment": "Outstanding balance.",
//!             "propertyOf": { "@id": "https://example.org/npl#Loan" }
//!         }
//!     ]
//! }"#).unwrap();
//!
//! let outcome = build_description(&vocab, &DocConfig::default());
//! let loan = &outcome.description.supported_class[0];
//!
//! // One API class with its property and the four default operations
//! assert_eq!(loan.title, "Loan");
//! assert_eq!(loan.properties.len(), 1);
//! assert_eq!(loan.operations.len(), 4);
//! assert!(outcome.report.is_clean());
//! ```
//!
//! # Operation Table
//!
//! Every class gets one operation per configured verb:
//!
//! | Verb | Expects | Returns | Status |
//! |--------|-----------|-----------|-----------------------------|
//! | GET | - | the class | "`<Class>` class returned." |
//! | PUT | the class | - | "`<Class>` class Added." |
//! | POST | the class | - | "`<Class>` class updated." |
//! | DELETE | - | - | "`<Class>` class Deleted." |
//!
//! # Vocabulary Format
//!
//! Classes are tagged `rdfs:Class`; properties carry `propertyOf` (their
//! owning class) and optionally `propertyOn` (the class or literal they
//! point at):
//! ```json
//! {
//!     "@id": "https://example.org/npl#hasBorrower",
//!     "@type": "owl:ObjectProperty",
//!     "rdfs:label": "hasBorrower",
//!     "propertyOf": { "@id": "https://example.org/npl#Loan" },
//!     "propertyOn": { "@id": "https://example.org/npl#Borrower" }
//! }
//! ```

mod builder;
mod checker;
mod doc;
mod error;
mod loader;
mod operations;
mod resolver;
mod types;
mod vocab;

pub use builder::{build_description, BuildOutcome, BuildReport, SkippedProperty};
pub use checker::{check, check_file, CheckResult, Diagnostic, FileResult, FileStatus, Severity};
pub use doc::{
    ApiDescription, ClassDescriptor, OperationDescriptor, PropertyDescriptor, Status,
    HYDRA_CONTEXT,
};
pub use error::{LoadError, UnresolvedReference};
pub use loader::{is_url, load_vocab, load_vocab_auto, load_vocab_str};
pub use operations::{class_id, synthesize_operations};
pub use resolver::{class_index, class_properties, property_descriptor, resolve_property_id};
pub use types::{DocConfig, Verb};
pub use vocab::{fragment, DefinitionKind, NodeRef, PropertyTarget, VocabDefinition, Vocabulary};

#[cfg(feature = "remote")]
pub use loader::load_vocab_url;
