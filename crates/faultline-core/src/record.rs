//! Validation error records

use serde::{Deserialize, Serialize};

/// A single validation error reported against a field path.
///
/// This is also the wire shape of one element of a backend error
/// response's `errors` array: `{"message": "...", "path": "user.name"}`,
/// with `path` omitted for errors not tied to a specific field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Human-readable error message
    pub message: String,

    /// Dotted field path the error is attached to (e.g. `user.roles.1`)
    ///
    /// Only consulted when the record is routed into a collection; a
    /// record without a path lands under the empty-string key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorRecord {
    /// Create a record that is not tied to a specific field
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    /// Attach the field path the record belongs to
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
