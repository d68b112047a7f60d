//! Vocabulary checking - static analysis of vocabulary files.
//!
//! Reports the problems a build would otherwise hide:
//! - JSON syntax errors and unreadable files
//! - documents that are not vocabularies
//! - properties owned by, or pointing at, classes that don't exist
//! - suspicious definitions (unknown type tags, duplicate class labels)

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::vocab::{fragment, DefinitionKind, PropertyTarget, Vocabulary};

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic message from checking.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub file: PathBuf,
    /// JSON path to the issue (e.g., "/defines/3/propertyOf")
    pub path: String,
    pub message: String,
}

/// Result of checking a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Status of a checked file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Error,
    Warning,
}

/// Result of checking a directory or set of files.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub path: PathBuf,
    pub files_checked: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub warnings: usize,
    pub results: Vec<FileResult>,
}

impl CheckResult {
    /// Returns true if all files passed (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors == 0
    }
}

/// Check a file or directory.
///
/// If path is a directory, recursively finds all .json and .jsonld files.
/// If `strict` is true, warnings are treated as errors.
/// Returns aggregated results for all files.
pub fn check(path: &Path, strict: bool) -> CheckResult {
    let files = collect_vocab_files(path);
    let mut results = Vec::new();
    let mut total_errors = 0;
    let mut total_warnings = 0;

    for file in &files {
        let file_result = check_file(file, path);
        let file_errors = file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let file_warnings = file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();

        total_errors += file_errors;
        total_warnings += file_warnings;
        results.push(file_result);
    }

    let failed = results
        .iter()
        .filter(|r| {
            if strict {
                r.status != FileStatus::Ok
            } else {
                r.status == FileStatus::Error
            }
        })
        .count();

    CheckResult {
        path: path.to_path_buf(),
        files_checked: files.len(),
        passed: files.len() - failed,
        failed,
        errors: total_errors,
        warnings: total_warnings,
        results,
    }
}

/// Check a single vocabulary file.
pub fn check_file(file: &Path, base_path: &Path) -> FileResult {
    let mut diagnostics = Vec::new();
    check_file_inner(file, &mut diagnostics);

    let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
    let has_warnings = diagnostics.iter().any(|d| d.severity == Severity::Warning);

    let status = if has_errors {
        FileStatus::Error
    } else if has_warnings {
        FileStatus::Warning
    } else {
        FileStatus::Ok
    };

    FileResult {
        file: file.strip_prefix(base_path).unwrap_or(file).to_path_buf(),
        status,
        diagnostics,
    }
}

fn check_file_inner(file: &Path, diagnostics: &mut Vec<Diagnostic>) {
    let content = match std::fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                code: "E001".to_string(),
                file: file.to_path_buf(),
                path: "/".to_string(),
                message: format!("cannot read file: {}", e),
            });
            return;
        }
    };

    // Syntax first, vocabulary shape second
    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                code: "E001".to_string(),
                file: file.to_path_buf(),
                path: "/".to_string(),
                message: format!("syntax error: {}", e),
            });
            return;
        }
    };

    match serde_json::from_value::<Vocabulary>(value) {
        Ok(vocab) => check_vocab(&vocab, file, diagnostics),
        Err(e) => {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                code: "E002".to_string(),
                file: file.to_path_buf(),
                path: "/".to_string(),
                message: format!("not a vocabulary document: {}", e),
            });
        }
    }
}

/// Run the definition-level checks on a decoded vocabulary.
fn check_vocab(vocab: &Vocabulary, file: &Path, diagnostics: &mut Vec<Diagnostic>) {
    let class_labels: HashSet<&str> = vocab.classes().map(|def| def.label.as_str()).collect();

    if class_labels.is_empty() {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            code: "W003".to_string(),
            file: file.to_path_buf(),
            path: "/defines".to_string(),
            message: "vocabulary defines no classes".to_string(),
        });
    }

    let mut seen_labels: HashSet<&str> = HashSet::new();
    for (i, def) in vocab.defines.iter().enumerate() {
        let def_path = format!("/defines/{}", i);

        if let DefinitionKind::Other(tag) = &def.kind {
            diagnostics.push(Diagnostic {
                severity: Severity::Warning,
                code: "W001".to_string(),
                file: file.to_path_buf(),
                path: format!("{}/@type", def_path),
                message: format!(
                    "unknown type tag \"{}\": expected rdfs:Class, owl:DataProperty, or owl:ObjectProperty",
                    tag
                ),
            });
        }

        if def.kind == DefinitionKind::Class && !seen_labels.insert(def.label.as_str()) {
            diagnostics.push(Diagnostic {
                severity: Severity::Warning,
                code: "W002".to_string(),
                file: file.to_path_buf(),
                path: format!("{}/rdfs:label", def_path),
                message: format!(
                    "duplicate class label \"{}\": the last definition wins",
                    def.label
                ),
            });
        }

        // Reference checks only apply to property definitions
        let Some(owner) = &def.property_of else {
            continue;
        };

        let owner_known = fragment(&owner.id)
            .map(|label| class_labels.contains(label))
            .unwrap_or(false);
        if !owner_known {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                code: "E003".to_string(),
                file: file.to_path_buf(),
                path: format!("{}/propertyOf", def_path),
                message: format!(
                    "property \"{}\" belongs to no defined class: {}",
                    def.label, owner.id
                ),
            });
        }

        if let Some(PropertyTarget::Node(node)) = &def.property_on {
            let target_known = fragment(&node.id)
                .map(|label| class_labels.contains(label))
                .unwrap_or(false);
            if !target_known {
                diagnostics.push(Diagnostic {
                    severity: Severity::Error,
                    code: "E004".to_string(),
                    file: file.to_path_buf(),
                    path: format!("{}/propertyOn", def_path),
                    message: format!(
                        "property \"{}\" references an unknown class: {}",
                        def.label, node.id
                    ),
                });
            }
        }
    }
}

/// Collect all .json and .jsonld files in a path (file or directory).
fn collect_vocab_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        if has_vocab_extension(path) {
            return vec![path.to_path_buf()];
        }
        return vec![];
    }

    let mut files = Vec::new();
    collect_files_recursive(path, &mut files);
    files.sort();
    files
}

fn has_vocab_extension(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "json" || e == "jsonld")
        .unwrap_or(false)
}

fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files_recursive(&path, files);
        } else if has_vocab_extension(&path) {
            files.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn check_valid_vocabulary() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
            "defines": [
                {{"@id": "https://example.org/npl#Loan", "@type": "rdfs:Class", "rdfs:label": "Loan"}},
                {{
                    "@id": "https://example.org/npl#totalBalance",
                    "@type": "owl:DataProperty",
                    "rdfs:label": "totalBalance",
                    "propertyOf": {{"@id": "https://example.org/npl#Loan"}}
                }}
            ]
        }}"#
        )
        .unwrap();

        let result = check_file(file.path(), file.path().parent().unwrap());
        assert_eq!(result.status, FileStatus::Ok);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn check_invalid_json_syntax() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{ not valid json }}").unwrap();

        let result = check_file(file.path(), file.path().parent().unwrap());
        assert_eq!(result.status, FileStatus::Error);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].code, "E001");
    }

    #[test]
    fn check_not_a_vocabulary() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"defines": 42}}"#).unwrap();

        let result = check_file(file.path(), file.path().parent().unwrap());
        assert_eq!(result.status, FileStatus::Error);
        assert!(result.diagnostics.iter().any(|d| d.code == "E002"));
    }

    #[test]
    fn check_dangling_property_of() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
            "defines": [
                {{"@id": "https://example.org/npl#Loan", "@type": "rdfs:Class", "rdfs:label": "Loan"}},
                {{
                    "@id": "https://example.org/npl#guaranteeShare",
                    "@type": "owl:DataProperty",
                    "rdfs:label": "guaranteeShare",
                    "propertyOf": {{"@id": "https://example.org/npl#Guarantor"}}
                }}
            ]
        }}"#
        )
        .unwrap();

        let result = check_file(file.path(), file.path().parent().unwrap());
        assert_eq!(result.status, FileStatus::Error);
        let e003 = result.diagnostics.iter().find(|d| d.code == "E003").unwrap();
        assert_eq!(e003.path, "/defines/1/propertyOf");
        assert!(e003.message.contains("guaranteeShare"));
    }

    #[test]
    fn check_dangling_property_on() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
            "defines": [
                {{"@id": "https://example.org/npl#Loan", "@type": "rdfs:Class", "rdfs:label": "Loan"}},
                {{
                    "@id": "https://example.org/npl#securedBy",
                    "@type": "owl:ObjectProperty",
                    "rdfs:label": "securedBy",
                    "propertyOf": {{"@id": "https://example.org/npl#Loan"}},
                    "propertyOn": {{"@id": "https://example.org/npl#Collateral"}}
                }}
            ]
        }}"#
        )
        .unwrap();

        let result = check_file(file.path(), file.path().parent().unwrap());
        assert_eq!(result.status, FileStatus::Error);
        let e004 = result.diagnostics.iter().find(|d| d.code == "E004").unwrap();
        assert_eq!(e004.path, "/defines/1/propertyOn");
        assert!(e004.message.contains("#Collateral"));
    }

    #[test]
    fn check_literal_property_on_is_fine() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
            "defines": [
                {{"@id": "https://example.org/npl#Loan", "@type": "rdfs:Class", "rdfs:label": "Loan"}},
                {{
                    "@id": "https://example.org/npl#totalBalance",
                    "@type": "owl:DataProperty",
                    "rdfs:label": "totalBalance",
                    "propertyOf": {{"@id": "https://example.org/npl#Loan"}},
                    "propertyOn": "xsd:decimal"
                }}
            ]
        }}"#
        )
        .unwrap();

        let result = check_file(file.path(), file.path().parent().unwrap());
        assert_eq!(result.status, FileStatus::Ok);
    }

    #[test]
    fn check_property_on_without_owner_is_inert() {
        // No propertyOf means the definition never reaches resolution
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
            "defines": [
                {{"@id": "https://example.org/npl#Loan", "@type": "rdfs:Class", "rdfs:label": "Loan"}},
                {{
                    "@id": "https://example.org/npl#stray",
                    "@type": "owl:ObjectProperty",
                    "rdfs:label": "stray",
                    "propertyOn": {{"@id": "https://example.org/npl#Nowhere"}}
                }}
            ]
        }}"#
        )
        .unwrap();

        let result = check_file(file.path(), file.path().parent().unwrap());
        assert_eq!(result.status, FileStatus::Ok);
    }

    #[test]
    fn check_unknown_type_tag_warns() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
            "defines": [
                {{"@id": "https://example.org/npl#Loan", "@type": "rdfs:Class", "rdfs:label": "Loan"}},
                {{"@id": "https://example.org/npl#note", "@type": "owl:AnnotationProperty", "rdfs:label": "note"}}
            ]
        }}"#
        )
        .unwrap();

        let result = check_file(file.path(), file.path().parent().unwrap());
        assert_eq!(result.status, FileStatus::Warning);
        let w001 = result.diagnostics.iter().find(|d| d.code == "W001").unwrap();
        assert!(w001.message.contains("owl:AnnotationProperty"));
    }

    #[test]
    fn check_duplicate_class_label_warns() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
            "defines": [
                {{"@id": "https://example.org/npl#Loan", "@type": "rdfs:Class", "rdfs:label": "Loan"}},
                {{"@id": "https://example.org/other#Loan", "@type": "rdfs:Class", "rdfs:label": "Loan"}}
            ]
        }}"#
        )
        .unwrap();

        let result = check_file(file.path(), file.path().parent().unwrap());
        assert_eq!(result.status, FileStatus::Warning);
        let w002 = result.diagnostics.iter().find(|d| d.code == "W002").unwrap();
        assert_eq!(w002.path, "/defines/1/rdfs:label");
    }

    #[test]
    fn check_no_classes_warns() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"defines": []}}"#).unwrap();

        let result = check_file(file.path(), file.path().parent().unwrap());
        assert_eq!(result.status, FileStatus::Warning);
        assert!(result.diagnostics.iter().any(|d| d.code == "W003"));
    }

    #[test]
    fn check_directory() {
        let dir = tempdir().unwrap();

        let valid_path = dir.path().join("valid.jsonld");
        std::fs::write(
            &valid_path,
            r#"{"defines": [{"@id": "https://example.org/npl#Loan", "@type": "rdfs:Class", "rdfs:label": "Loan"}]}"#,
        )
        .unwrap();

        let invalid_path = dir.path().join("invalid.json");
        std::fs::write(&invalid_path, "{ not json }").unwrap();

        let result = check(dir.path(), false);
        assert_eq!(result.files_checked, 2);
        assert_eq!(result.passed, 1);
        assert_eq!(result.failed, 1);
        assert!(!result.is_ok());
    }

    #[test]
    fn check_strict_mode() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.json");
        // Vocabulary with warning only (no classes)
        std::fs::write(&file_path, r#"{"defines": []}"#).unwrap();

        // Non-strict: warnings don't cause failure
        let result = check(&file_path, false);
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.passed, 1);
        assert_eq!(result.failed, 0);

        // Strict: warnings cause failure
        let result = check(&file_path, true);
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.passed, 0);
        assert_eq!(result.failed, 1);
    }

    #[test]
    fn collect_picks_up_both_extensions() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.jsonld"), r#"{"defines": []}"#).unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{"defines": []}"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "skip me").unwrap();

        let result = check(dir.path(), false);
        assert_eq!(result.files_checked, 2);
    }

    #[test]
    fn file_paths_are_relative_to_base() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("vocab");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("npl.jsonld"), r#"{"defines": []}"#).unwrap();

        let result = check(dir.path(), false);
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].file, Path::new("vocab/npl.jsonld"));
    }
}
