//! Property resolution - matches property definitions to their owning
//! classes and resolves the identifiers they point at.

use std::collections::HashMap;

use crate::doc::{ClassDescriptor, PropertyDescriptor};
use crate::error::UnresolvedReference;
use crate::vocab::{fragment, DefinitionKind, PropertyTarget, VocabDefinition, Vocabulary};

/// Collect the property definitions owned by a class, in vocabulary order.
///
/// A definition is owned when the fragment of its `propertyOf` URI equals
/// the class label. Definitions without `propertyOf` are never properties.
/// A definition tagged as both a data property and an object property is
/// accepted regardless of owner; a single `@type` tag never satisfies
/// that, so the clause admits nothing on its own.
pub fn class_properties<'a>(vocab: &'a Vocabulary, class_label: &str) -> Vec<&'a VocabDefinition> {
    vocab
        .defines
        .iter()
        .filter(|def| {
            let Some(owner) = &def.property_of else {
                return false;
            };
            let owned = fragment(&owner.id) == Some(class_label);
            let dual_tagged = def.kind == DefinitionKind::DataProperty
                && def.kind == DefinitionKind::ObjectProperty;
            owned || dual_tagged
        })
        .collect()
}

/// Build a lookup from class title to descriptor.
///
/// With duplicate titles the last descriptor wins.
pub fn class_index<'a>(classes: &'a [ClassDescriptor]) -> HashMap<&'a str, &'a ClassDescriptor> {
    classes
        .iter()
        .map(|class| (class.title.as_str(), class))
        .collect()
}

/// Resolve the identifier a property definition points at.
///
/// A `propertyOn` node whose fragment names a built class resolves to that
/// class's descriptor id; a literal `propertyOn`, or none at all, resolves
/// to the definition's own `@id`.
///
/// # Errors
///
/// Returns `UnresolvedReference` when a `propertyOn` node names no built
/// class. The caller drops the property and records the skip.
pub fn resolve_property_id<'a>(
    def: &'a VocabDefinition,
    index: &HashMap<&str, &'a ClassDescriptor>,
) -> Result<&'a str, UnresolvedReference> {
    match &def.property_on {
        Some(PropertyTarget::Node(node)) => {
            let class = fragment(&node.id)
                .and_then(|label| index.get(label).copied())
                .ok_or_else(|| UnresolvedReference {
                    property: def.label.clone(),
                    reference: node.id.clone(),
                })?;
            Ok(class.id.as_str())
        }
        _ => Ok(def.id.as_str()),
    }
}

/// Resolve a definition into a property descriptor.
///
/// # Errors
///
/// Propagates `UnresolvedReference` from [`resolve_property_id`].
pub fn property_descriptor(
    def: &VocabDefinition,
    index: &HashMap<&str, &ClassDescriptor>,
) -> Result<PropertyDescriptor, UnresolvedReference> {
    let id = resolve_property_id(def, index)?;
    Ok(PropertyDescriptor::new(id, def.label.clone()))
}
