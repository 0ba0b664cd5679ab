//! CPU-bound workload (`POST /process/cpu-intensive`): recursive Fibonacci
//! followed by prime enumeration up to a fixed bound.

use serde::{Deserialize, Serialize};

use super::body::{from_object, is_blank};
use crate::algorithms::{fibonacci, find_primes};
use crate::clock::Stopwatch;
use crate::error::WorkloadError;
use crate::SERVICE_NAME;

pub const DEFAULT_N: u32 = 35;

/// Largest `n` whose Fibonacci number fits in an `i64`.
pub const MAX_FIBONACCI_N: u32 = 92;

/// Upper bound for prime enumeration. Not user-configurable.
pub const PRIME_LIMIT: u32 = 10_000;

#[derive(Deserialize)]
struct CpuBody {
    #[serde(default)]
    n: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuRequest {
    pub n: u32,
}

impl Default for CpuRequest {
    fn default() -> Self {
        CpuRequest { n: DEFAULT_N }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuResponse {
    /// The `n` that was computed.
    pub fibonacci_n: u32,
    /// `F(n)` with `F(0) = 0`, `F(1) = 1`.
    pub fibonacci_result: i64,
    /// Number of primes below [`PRIME_LIMIT`].
    pub primes_count: usize,
    /// Largest prime below [`PRIME_LIMIT`].
    pub largest_prime: u32,
    /// Wall time of both computations.
    pub execution_time_seconds: f64,
    pub service: &'static str,
}

impl CpuRequest {
    /// A blank, unparseable or `null` body means "use the defaults". Any
    /// other JSON must be an object whose `n`, if present, is an in-range
    /// integer.
    pub fn decode(body: &[u8]) -> Result<Self, WorkloadError> {
        if is_blank(body) {
            return Ok(CpuRequest::default());
        }
        let value: serde_json::Value = match serde_json::from_slice(body) {
            Ok(serde_json::Value::Null) | Err(_) => return Ok(CpuRequest::default()),
            Ok(value) => value,
        };

        let body: CpuBody = from_object(value)?;
        match body.n {
            None => Ok(CpuRequest::default()),
            Some(n) => u32::try_from(n)
                .ok()
                .filter(|&n| n <= MAX_FIBONACCI_N)
                .map(|n| CpuRequest { n })
                .ok_or_else(|| {
                    WorkloadError::invalid(
                        "n",
                        format!("n must be between 0 and {MAX_FIBONACCI_N}, got {n}"),
                    )
                }),
        }
    }

    pub fn run(&self) -> CpuResponse {
        let watch = Stopwatch::start();
        let fibonacci_result = fibonacci(self.n);
        let primes = find_primes(PRIME_LIMIT);
        let execution_time_seconds = watch.elapsed_secs();

        CpuResponse {
            fibonacci_n: self.n,
            fibonacci_result,
            primes_count: primes.len(),
            largest_prime: primes.last().copied().unwrap_or(0),
            execution_time_seconds,
            service: SERVICE_NAME,
        }
    }
}
