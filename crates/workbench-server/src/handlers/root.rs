//! Greeting and health-check handlers.

use axum::Json;
use workbench_core::{clock, GREETING, SERVICE_NAME};

use crate::schema::{GreetingResponse, HealthResponse};

/// `GET /`
pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: GREETING,
        service: SERVICE_NAME,
    })
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: clock::utc_timestamp(),
    })
}
