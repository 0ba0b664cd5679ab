//! Response types for the non-workload endpoints.
//!
//! Workload request/response records live in `workbench_core::workload`
//! so the CLI can share them.

use serde::Serialize;

/// `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub service: &'static str,
}

/// `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// UTC, `YYYY-MM-DDTHH:MM:SSZ`.
    pub timestamp: String,
}
