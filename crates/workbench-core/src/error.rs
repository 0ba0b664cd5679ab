//! Request-level errors produced while decoding or running a workload.
//!
//! Uses `thiserror` for matchable variants. Every variant is a client error;
//! the transport maps them all to the same 400 response.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkloadError {
    /// The body is not JSON, or not the expected shape.
    #[error("Invalid JSON: {0}")]
    MalformedBody(String),

    /// The body is JSON but does not decode into the request record
    /// (not an object, or a field of the wrong type).
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// A required field is absent.
    #[error("Missing {0} field")]
    MissingField(&'static str),

    /// A field is present but unusable (wrong type, bad year, out of range).
    #[error("{reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The strings workload does not know this operation.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl WorkloadError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        WorkloadError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
