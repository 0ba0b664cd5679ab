//! Wall-clock helpers: response timestamps, the current year for age
//! derivation, and a stopwatch for the computation phase.

use std::time::Instant;

use chrono::{DateTime, Datelike, Local, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn utc_timestamp() -> String {
    format_timestamp(Utc::now())
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Calendar year in the host's local time zone.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Measures one computation phase. Started after decoding, read once at the end.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch {
            started: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}
