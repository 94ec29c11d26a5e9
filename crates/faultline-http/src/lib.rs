//! Faultline HTTP - Classification of API error payloads
//!
//! Backends report failures as a structured JSON envelope. This crate
//! recognizes that envelope in an arbitrary payload, decides what kind of
//! failure it describes and, for validation failures, extracts the field
//! errors into a [`faultline_core::ErrorCollection`]. Classification
//! fails closed: payloads that do not match collect nothing.
//!
//! Transport is out of scope; callers hand in a decoded
//! `serde_json::Value` or the raw body text.

pub mod classify;
pub mod error;
pub mod response;

pub use classify::{
    collect_validation_errors, collect_validation_errors_json, is_error_envelope, is_unauthorized,
    is_validation_error,
};
pub use error::ResponseError;
pub use response::{ERROR_DATA_VALIDATION, ERROR_UNAUTHORIZED, ERROR_VALIDATION, ErrorResponse};
