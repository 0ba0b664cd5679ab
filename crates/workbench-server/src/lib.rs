//! JSON-over-HTTP benchmark service.
//!
//! Exposes a greeting, a health check and three workload endpoints whose
//! outputs are reproducible across implementations. This crate holds the
//! HTTP layer only: configuration, error mapping, handlers and routes.
//! The workloads themselves live in `workbench-core`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
