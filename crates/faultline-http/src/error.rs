//! Classifier error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("Failed to parse error response: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResponseError>;
