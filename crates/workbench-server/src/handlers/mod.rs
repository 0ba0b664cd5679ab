//! HTTP handlers for the benchmark endpoints.
//!
//! Handlers are thin: take the raw body, decode it through
//! `workbench_core::workload`, run the computation and return JSON. No
//! workload logic lives here.

pub mod cpu;
pub mod normal;
pub mod root;
pub mod strings;
