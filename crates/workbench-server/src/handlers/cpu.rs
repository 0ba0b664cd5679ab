//! CPU-bound handler.

use axum::body::Bytes;
use axum::Json;
use tracing::debug;
use workbench_core::workload::{CpuRequest, CpuResponse};

use crate::error::ApiError;

/// Recursive Fibonacci plus prime enumeration.
///
/// `POST /process/cpu-intensive`
///
/// The body is optional. The computation runs on tokio's blocking pool so a
/// large `n` occupies a blocking thread instead of an async worker; once
/// started it runs to completion.
pub async fn process_cpu_intensive(body: Bytes) -> Result<Json<CpuResponse>, ApiError> {
    let req = CpuRequest::decode(&body)?;
    let response = tokio::task::spawn_blocking(move || req.run()).await?;
    debug!(
        n = response.fibonacci_n,
        elapsed = response.execution_time_seconds,
        "cpu workload done"
    );
    Ok(Json(response))
}
