//! Router assembly for the benchmark HTTP API.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Builds the router with every benchmark route.
///
/// Method mismatches are answered by axum (405); the workload handlers
/// themselves only ever fail with 400. Bodies are not size-capped: large
/// texts are the point of the strings workload.
pub fn build_router() -> Router {
    Router::new()
        // Level 1: greeting and health
        .route("/", get(handlers::root::greeting))
        .route("/health", get(handlers::root::health))
        // Level 2: structured extraction
        .route("/process/normal", post(handlers::normal::process_normal))
        // Level 3: CPU-bound
        .route(
            "/process/cpu-intensive",
            post(handlers::cpu::process_cpu_intensive),
        )
        // Level 4: text analysis
        .route("/process/strings", post(handlers::strings::process_strings))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}
