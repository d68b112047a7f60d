//! Error types for vocabulary loading and property resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a vocabulary document.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("vocabulary file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read vocabulary file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch vocabulary from {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Exit code for CLI error reporting.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            #[cfg(feature = "remote")]
            LoadError::NetworkError { .. } => 3,
            LoadError::InvalidJson { .. } => 2,
        }
    }
}

/// A property reference that matches no built class.
///
/// Recorded in the build report rather than failing the build: the property
/// is dropped and the descriptor for its class is still produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("property \"{property}\" references unknown class \"{reference}\"")]
pub struct UnresolvedReference {
    /// Label of the property definition that failed to resolve.
    pub property: String,
    /// The `@id` the reference pointed at.
    pub reference: String,
}
