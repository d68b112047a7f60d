//! Vocabulary loading from various sources.
//!
//! Handles loading vocabularies from files, strings, and HTTP URLs.

use std::path::Path;

use crate::error::LoadError;
use crate::vocab::Vocabulary;

#[cfg(feature = "remote")]
use std::time::Duration;

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Load a vocabulary from a file path.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// or `LoadError::InvalidJson` if the file isn't a valid vocabulary.
pub fn load_vocab(path: &Path) -> Result<Vocabulary, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_vocab_str(&content)
}

/// Load a vocabulary from a JSON string.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` if the string isn't valid JSON or
/// doesn't decode as a vocabulary document.
pub fn load_vocab_str(content: &str) -> Result<Vocabulary, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })
}

/// Load a vocabulary from an HTTP/HTTPS URL.
///
/// Requires the `remote` feature (enabled by default).
///
/// # Errors
///
/// Returns `LoadError::NetworkError` if the request fails or the server
/// answers with an error status, or `LoadError::InvalidJson` if the body
/// doesn't decode as a vocabulary.
#[cfg(feature = "remote")]
pub fn load_vocab_url(url: &str) -> Result<Vocabulary, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|source| LoadError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .map_err(|source| LoadError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    // Check for HTTP errors before parsing
    let response = response
        .error_for_status()
        .map_err(|source| LoadError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    let body = response.text().map_err(|source| LoadError::NetworkError {
        url: url.to_string(),
        source,
    })?;

    load_vocab_str(&body)
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load a vocabulary from a file path or URL.
///
/// Automatically detects whether the source is a URL or file path.
/// URL loading requires the `remote` feature.
///
/// # Errors
///
/// Returns appropriate errors based on the source type.
pub fn load_vocab_auto(source: &str) -> Result<Vocabulary, LoadError> {
    if is_url(source) {
        #[cfg(feature = "remote")]
        {
            load_vocab_url(source)
        }
        #[cfg(not(feature = "remote"))]
        {
            Err(LoadError::FileNotFound {
                path: std::path::PathBuf::from(source),
            })
        }
    } else {
        load_vocab(Path::new(source))
    }
}
