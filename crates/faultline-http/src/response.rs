//! The structured error envelope returned by the backend
//!
//! Every structured error body shares one shape: a `success` flag (always
//! false on errors), a machine-readable `code` and a list of error
//! records. The constants below are the codes this crate reacts to.

use faultline_core::ErrorRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Code reported for request validation failures.
pub const ERROR_VALIDATION: &str = "ERROR_VALIDATION";

/// Code reported for persistence-level validation failures. Classified
/// exactly like [`ERROR_VALIDATION`].
pub const ERROR_DATA_VALIDATION: &str = "ERROR_DATA_VALIDATION";

/// Code reported for rejected or expired credentials.
pub const ERROR_UNAUTHORIZED: &str = "ERROR_UNAUTHORIZED";

/// A parsed error envelope.
///
/// All three fields must be present for a payload to parse; unknown
/// extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub errors: Vec<ErrorRecord>,
}

impl ErrorResponse {
    /// Parse an envelope from a raw JSON body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Parse an envelope from an already-decoded JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// Whether this envelope reports a validation failure, under either
    /// of the two codes the backend uses for those.
    pub fn is_validation(&self) -> bool {
        self.code == ERROR_VALIDATION || self.code == ERROR_DATA_VALIDATION
    }

    /// Whether this envelope reports rejected credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.code == ERROR_UNAUTHORIZED
    }
}
