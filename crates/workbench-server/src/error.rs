//! API error type with HTTP status mapping.
//!
//! [`ApiError`] is returned by every workload handler. It implements
//! `axum::response::IntoResponse`; all variants become `400 Bad Request`
//! with a JSON body carrying a human-readable message. There is no 5xx path.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use workbench_core::WorkloadError;

/// Body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Decoding or validation of the request failed.
    #[error(transparent)]
    Workload(#[from] WorkloadError),

    /// The blocking task running a computation did not complete.
    #[error("worker failed: {0}")]
    Worker(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "request rejected");

        let body = ApiErrorBody {
            error: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Worker(err.to_string())
    }
}
