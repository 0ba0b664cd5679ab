//! Text-analysis handler.

use axum::body::Bytes;
use axum::Json;
use tracing::debug;
use workbench_core::workload::{StringsRequest, StringsResponse};

use crate::error::ApiError;

/// Runs one text operation (`reverse` by default) over `text`.
///
/// `POST /process/strings`
///
/// Unknown operations are rejected during decoding, before any work starts.
pub async fn process_strings(body: Bytes) -> Result<Json<StringsResponse>, ApiError> {
    let req = StringsRequest::decode(&body)?;
    let response = req.run();
    debug!(
        operation = response.operation,
        length = response.original_length,
        elapsed = response.execution_time_seconds,
        "strings workload done"
    );
    Ok(Json(response))
}
