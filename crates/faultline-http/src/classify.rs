//! Deciding what kind of failure an API payload describes
//!
//! Backends answer failed requests with the envelope from
//! [`crate::response`], but a payload reaching this code may be anything:
//! a proxy error page, a truncated body, a plain string. Every function
//! here therefore fails closed: a payload that does not match exactly
//! classifies as "not ours" and collects nothing, it never errors.

use faultline_core::ErrorCollection;
use serde_json::Value;

use crate::response::{
    ERROR_DATA_VALIDATION, ERROR_UNAUTHORIZED, ERROR_VALIDATION, ErrorResponse,
};

/// Whether `payload` has the structured error envelope shape.
///
/// The check is structural only: a JSON object carrying `success`,
/// `code` and `errors` keys. Field values of the wrong type are caught
/// later by the full parse.
pub fn is_error_envelope(payload: &Value) -> bool {
    payload.as_object().is_some_and(|map| {
        map.contains_key("success") && map.contains_key("code") && map.contains_key("errors")
    })
}

/// Whether `payload` is an envelope reporting a validation failure.
pub fn is_validation_error(payload: &Value) -> bool {
    is_error_envelope(payload)
        && payload
            .get("code")
            .and_then(Value::as_str)
            .is_some_and(|code| code == ERROR_VALIDATION || code == ERROR_DATA_VALIDATION)
}

/// Whether `payload` is an envelope reporting rejected credentials.
pub fn is_unauthorized(payload: &Value) -> bool {
    is_error_envelope(payload)
        && payload
            .get("code")
            .and_then(Value::as_str)
            .is_some_and(|code| code == ERROR_UNAUTHORIZED)
}

/// Extract the validation errors carried by `payload` into a collection.
///
/// Anything other than a well-formed validation envelope yields a fresh
/// empty collection. The caller owns the result either way and may keep
/// adding records to it.
pub fn collect_validation_errors(payload: &Value) -> ErrorCollection {
    if !is_validation_error(payload) {
        tracing::debug!("Payload is not a validation error envelope, collecting nothing");
        return ErrorCollection::new();
    }
    match ErrorResponse::from_value(payload) {
        Ok(response) => ErrorCollection::from_records(response.errors),
        Err(e) => {
            tracing::debug!("Malformed validation envelope, collecting nothing: {}", e);
            ErrorCollection::new()
        }
    }
}

/// [`collect_validation_errors`] for a body that has not been decoded
/// yet. A body that is not valid JSON collects nothing.
pub fn collect_validation_errors_json(body: &str) -> ErrorCollection {
    match serde_json::from_str::<Value>(body) {
        Ok(payload) => collect_validation_errors(&payload),
        Err(e) => {
            tracing::debug!("Error body is not valid JSON, collecting nothing: {}", e);
            ErrorCollection::new()
        }
    }
}
