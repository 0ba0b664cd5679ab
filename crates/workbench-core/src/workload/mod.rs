//! The three substantive workloads: decode a raw body into a typed request,
//! run the computation under a stopwatch, produce a serializable response.
//!
//! The HTTP server and the `workbench exec` command both go through these
//! types, so their outputs are identical for the same body.

mod body;
pub mod cpu;
pub mod normal;
pub mod strings;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::clock;
use crate::error::WorkloadError;

pub use cpu::{CpuRequest, CpuResponse};
pub use normal::{NormalRequest, NormalResponse};
pub use strings::{Operation, StringsOutcome, StringsRequest, StringsResponse};

/// Names the workload family, as it appears in the `/process/{name}` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    Normal,
    CpuIntensive,
    Strings,
}

impl Workload {
    pub fn as_str(self) -> &'static str {
        match self {
            Workload::Normal => "normal",
            Workload::CpuIntensive => "cpu-intensive",
            Workload::Strings => "strings",
        }
    }

    /// Decodes `body` and runs the workload.
    pub fn execute(self, body: &[u8]) -> Result<WorkloadResponse, WorkloadError> {
        Ok(match self {
            Workload::Normal => WorkloadResponse::Normal(
                NormalRequest::decode(body)?.run(clock::current_year()),
            ),
            Workload::CpuIntensive => WorkloadResponse::Cpu(CpuRequest::decode(body)?.run()),
            Workload::Strings => WorkloadResponse::Strings(StringsRequest::decode(body)?.run()),
        })
    }
}

/// Response of whichever workload ran. Serializes as the inner response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WorkloadResponse {
    Normal(NormalResponse),
    Cpu(CpuResponse),
    Strings(StringsResponse),
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Workload {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Workload::Normal),
            "cpu-intensive" | "cpu" => Ok(Workload::CpuIntensive),
            "strings" => Ok(Workload::Strings),
            other => Err(format!(
                "unknown workload '{other}': expected normal, cpu-intensive or strings"
            )),
        }
    }
}
