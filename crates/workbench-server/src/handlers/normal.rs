//! Structured-extraction handler.

use axum::body::Bytes;
use axum::Json;
use tracing::debug;
use workbench_core::clock;
use workbench_core::workload::{NormalRequest, NormalResponse};

use crate::error::ApiError;

/// Derives age, name parts and username from a person record.
///
/// `POST /process/normal`
pub async fn process_normal(body: Bytes) -> Result<Json<NormalResponse>, ApiError> {
    let req = NormalRequest::decode(&body)?;
    let response = req.run(clock::current_year());
    debug!(age = response.age, extra_keys = ?response.extra_data_keys, "normal workload done");
    Ok(Json(response))
}
