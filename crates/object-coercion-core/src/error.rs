//! Error types for object coercion.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable error codes for bridge consumers.
///
/// Variant names and their serialized `snake_case` strings are part of the
/// public contract and must not change across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// The operation name is not a coercion request, or the arity is wrong.
    UnsupportedOperation,
    /// JSON (de)serialization error in the string bridge.
    JsonParseError,
    /// Coercer options were rejected.
    InvalidOptions,
}

#[derive(Debug, Error)]
pub enum CoercionError {
    #[error("Unsupported operation {operation} with {arg_count} argument(s)")]
    UnsupportedOperation { operation: String, arg_count: usize },

    #[error("JSON (de)serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid coercion options: {message}")]
    InvalidOptions { message: String },
}

impl CoercionError {
    pub(crate) fn unsupported(operation: &str, arg_count: usize) -> Self {
        CoercionError::UnsupportedOperation {
            operation: operation.to_string(),
            arg_count,
        }
    }

    /// Returns the stable error code for this error variant.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            CoercionError::UnsupportedOperation { .. } => ErrorCode::UnsupportedOperation,
            CoercionError::JsonError(_) => ErrorCode::JsonParseError,
            CoercionError::InvalidOptions { .. } => ErrorCode::InvalidOptions,
        }
    }

    /// Returns the requested operation name, if the error carries one.
    pub fn operation(&self) -> Option<&str> {
        match self {
            CoercionError::UnsupportedOperation { operation, .. } => Some(operation),
            CoercionError::JsonError(_) => None,
            CoercionError::InvalidOptions { .. } => None,
        }
    }

    /// Produces a structured JSON error for bridge consumers.
    ///
    /// Format: `{"code": "...", "message": "...", "operation": "..." | null}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
            "operation": self.operation(),
        })
    }
}
