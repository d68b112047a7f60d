//! Core types for API description generation.

use std::fmt;

/// HTTP verbs an API class can support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Put,
    Post,
    Delete,
}

impl Verb {
    /// All verbs, in the order operations are synthesized.
    pub const ALL: [Verb; 4] = [Verb::Get, Verb::Put, Verb::Post, Verb::Delete];

    /// The verb as it appears in operation methods and titles.
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Put => "PUT",
            Verb::Post => "POST",
            Verb::Delete => "DELETE",
        }
    }

    /// Parse a verb from a string, case-insensitively.
    ///
    /// Returns `None` for unknown values (caller should error).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Verb::Get),
            "PUT" => Some(Verb::Put),
            "POST" => Some(Verb::Post),
            "DELETE" => Some(Verb::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for API description generation.
#[derive(Debug, Clone)]
pub struct DocConfig {
    /// Name the API is mounted under, e.g. "api" or "creditrisk_api".
    pub api_name: String,
    /// Server URL the entrypoint hangs off. A missing trailing slash is tolerated.
    pub server_url: String,
    /// Title of the generated document.
    pub title: String,
    /// Description of the generated document.
    pub description: String,
    /// Verbs to synthesize per class, in output order.
    pub verbs: Vec<Verb>,
}

impl DocConfig {
    /// Create a config with the given API name and server URL.
    ///
    /// Title, description, and verbs start at their defaults.
    pub fn new(api_name: impl Into<String>, server_url: impl Into<String>) -> Self {
        Self {
            api_name: api_name.into(),
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    /// Set the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the document description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the verbs to synthesize per class.
    pub fn verbs(mut self, verbs: Vec<Verb>) -> Self {
        self.verbs = verbs;
        self
    }
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            api_name: "api".to_string(),
            server_url: "http://localhost:8080/".to_string(),
            title: "API Documentation".to_string(),
            description: "Generated API Documentation".to_string(),
            verbs: Verb::ALL.to_vec(),
        }
    }
}
