//! Synthesis of the per-verb operation table for API classes.

use crate::doc::{ClassDescriptor, OperationDescriptor, Status};
use crate::types::Verb;

/// Look up the id of a built class by title.
pub fn class_id<'a>(classes: &'a [ClassDescriptor], title: &str) -> Option<&'a str> {
    classes
        .iter()
        .find(|class| class.title == title)
        .map(|class| class.id.as_str())
}

/// Synthesize the operations for the class named `title`, one per verb in
/// the given order.
///
/// Each operation is named by appending the verb to the title (`LoanGET`),
/// answers a single 200 status, and exchanges the class itself: GET returns
/// it, PUT and POST expect it, DELETE exchanges nothing. POST additionally
/// declares `Content-Type` and `Content-Length` response headers. An
/// unknown title yields no operations.
pub fn synthesize_operations(
    classes: &[ClassDescriptor],
    title: &str,
    verbs: &[Verb],
) -> Vec<OperationDescriptor> {
    let Some(id) = class_id(classes, title) else {
        return Vec::new();
    };

    verbs
        .iter()
        .map(|&verb| {
            let name = format!("{}{}", title, verb.as_str());
            match verb {
                Verb::Get => OperationDescriptor {
                    name,
                    method: verb,
                    expects: None,
                    returns: Some(id.to_string()),
                    expects_header: Vec::new(),
                    returns_header: Vec::new(),
                    possible_status: vec![Status::ok(format!("{} class returned.", title))],
                },
                Verb::Put => OperationDescriptor {
                    name,
                    method: verb,
                    expects: Some(id.to_string()),
                    returns: None,
                    expects_header: Vec::new(),
                    returns_header: Vec::new(),
                    possible_status: vec![Status::ok(format!("{} class Added.", title))],
                },
                Verb::Post => OperationDescriptor {
                    name,
                    method: verb,
                    expects: Some(id.to_string()),
                    returns: None,
                    expects_header: Vec::new(),
                    returns_header: vec![
                        "Content-Type".to_string(),
                        "Content-Length".to_string(),
                    ],
                    possible_status: vec![Status::ok(format!("{} class updated.", title))],
                },
                Verb::Delete => OperationDescriptor {
                    name,
                    method: verb,
                    expects: None,
                    returns: None,
                    expects_header: Vec::new(),
                    returns_header: Vec::new(),
                    possible_status: vec![Status::ok(format!("{} class Deleted.", title))],
                },
            }
        })
        .collect()
}
