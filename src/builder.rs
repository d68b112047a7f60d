//! Assembly of the full API description from a vocabulary.

use std::fmt;

use crate::doc::{ApiDescription, ClassDescriptor};
use crate::operations::synthesize_operations;
use crate::resolver::{class_index, class_properties, property_descriptor};
use crate::types::DocConfig;
use crate::vocab::Vocabulary;

/// Result of a build: the document plus a report of what was skipped.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub description: ApiDescription,
    pub report: BuildReport,
}

/// Counters and skips accumulated while building.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub classes_built: usize,
    pub properties_attached: usize,
    pub operations_attached: usize,
    /// Properties dropped because a reference failed to resolve.
    pub skipped: Vec<SkippedProperty>,
}

impl BuildReport {
    /// True when no property was dropped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// A property dropped from a class during the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedProperty {
    /// Title of the class the property belonged to.
    pub class: String,
    /// Label of the dropped property definition.
    pub property: String,
    /// The reference that failed to resolve.
    pub reference: String,
}

impl fmt::Display for SkippedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "property \"{}\" on class \"{}\" references unknown class \"{}\"",
            self.property, self.class, self.reference
        )
    }
}

/// Build an API description from a vocabulary.
///
/// Classes are built first so properties and operations resolve against
/// the complete set, regardless of definition order. Properties whose
/// references fail to resolve are dropped and recorded in the report;
/// the build itself never fails.
pub fn build_description(vocab: &Vocabulary, config: &DocConfig) -> BuildOutcome {
    let mut descriptors: Vec<ClassDescriptor> = vocab
        .classes()
        .map(ClassDescriptor::from_definition)
        .collect();

    let mut report = BuildReport {
        classes_built: descriptors.len(),
        ..BuildReport::default()
    };

    let index = class_index(&descriptors);
    let mut attached_properties = Vec::with_capacity(descriptors.len());
    for class in &descriptors {
        let mut props = Vec::new();
        for def in class_properties(vocab, &class.title) {
            match property_descriptor(def, &index) {
                Ok(prop) => props.push(prop),
                Err(err) => report.skipped.push(SkippedProperty {
                    class: class.title.clone(),
                    property: err.property,
                    reference: err.reference,
                }),
            }
        }
        attached_properties.push(props);
    }

    let attached_operations: Vec<_> = descriptors
        .iter()
        .map(|class| synthesize_operations(&descriptors, &class.title, &config.verbs))
        .collect();

    for ((class, props), ops) in descriptors
        .iter_mut()
        .zip(attached_properties)
        .zip(attached_operations)
    {
        report.properties_attached += props.len();
        report.operations_attached += ops.len();
        class.properties = props;
        class.operations = ops;
    }

    let entrypoint = api_base(config);
    BuildOutcome {
        description: ApiDescription {
            id: format!("{}/vocab", entrypoint),
            title: config.title.clone(),
            description: config.description.clone(),
            entrypoint,
            supported_class: descriptors,
        },
        report,
    }
}

/// `<server>/<api>` with exactly one slash between the parts.
fn api_base(config: &DocConfig) -> String {
    format!(
        "{}/{}",
        config.server_url.trim_end_matches('/'),
        config.api_name
    )
}
