//! Workload core for the HTTP runtime benchmark.
//!
//! Pure algorithms, field extraction and the decode/compute/encode pipelines
//! behind `/process/normal`, `/process/cpu-intensive` and `/process/strings`.
//! No I/O and no shared state: every value lives for one request.

pub mod algorithms;
pub mod clock;
pub mod error;
pub mod extract;
pub mod workload;

pub use error::WorkloadError;
pub use workload::{Workload, WorkloadResponse};

/// Identifies this implementation in every workload response.
pub const SERVICE_NAME: &str = "Rust Axum";

/// Greeting returned by `GET /`.
pub const GREETING: &str = "Hello, World!";
