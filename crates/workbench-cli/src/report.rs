//! Benchmark result analysis.
//!
//! Reads k6 NDJSON output files from `<dir>/raw/*.json`, reduces the
//! `http_req_duration` samples of each run to summary statistics, and writes
//! `summary.md` and `summary.csv` next to the `raw` directory.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Level identifiers in report order, with their headings.
pub const LEVELS: [(&str, &str); 4] = [
    ("level1_hello", "Level 1: Hello World"),
    ("level2_normal", "Level 2: Normal Work"),
    ("level3_cpu", "Level 3: CPU-Intensive"),
    ("level4_strings", "Level 4: String Processing"),
];

pub const CSV_HEADER: &str = "Service,Level,Total_Requests,Mean_ms,Median_ms,P95_ms,P99_ms,Max_ms";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("results directory not found: {}", .0.display())]
    MissingRawDir(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl ReportError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> ReportError + '_ {
        move |source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Raw samples from one k6 output file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunMetrics {
    /// `http_req_duration` values in milliseconds.
    pub durations: Vec<f64>,
    pub iterations: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_requests: usize,
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p90_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub iterations: f64,
}

/// One analysed result file.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub service: String,
    pub level: String,
    pub summary: Summary,
}

/// Results keyed by `service_level`.
pub type Results = BTreeMap<String, RunResult>;

#[derive(Deserialize)]
struct K6Line {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    metric: Option<String>,
    #[serde(default)]
    data: Option<K6Data>,
}

#[derive(Deserialize)]
struct K6Data {
    #[serde(default)]
    value: Option<f64>,
}

/// Collects `Point` samples. Lines that are not valid JSON are skipped;
/// zero values are ignored.
pub fn parse_k6(reader: impl BufRead) -> io::Result<RunMetrics> {
    let mut metrics = RunMetrics::default();
    for line in reader.lines() {
        let line = line?;
        let Ok(point) = serde_json::from_str::<K6Line>(line.trim()) else {
            continue;
        };
        if point.kind != "Point" {
            continue;
        }
        let value = match point.data.and_then(|d| d.value) {
            Some(v) if v != 0.0 => v,
            _ => continue,
        };
        match point.metric.as_deref() {
            Some("http_req_duration") => metrics.durations.push(value),
            Some("iterations") => metrics.iterations += value,
            _ => {}
        }
    }
    Ok(metrics)
}

/// `sorted[min(floor(len * p / 100), len - 1)]`, or 0 for no samples.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let index = (sorted.len() as f64 * p / 100.0) as usize;
    sorted[index.min(sorted.len() - 1)]
}

fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// `None` when the run recorded no request durations.
pub fn summarize(metrics: &RunMetrics) -> Option<Summary> {
    if metrics.durations.is_empty() {
        return None;
    }
    let mut sorted = metrics.durations.clone();
    sorted.sort_by(f64::total_cmp);
    let total = sorted.len();

    Some(Summary {
        total_requests: total,
        mean_ms: sorted.iter().sum::<f64>() / total as f64,
        median_ms: median(&sorted),
        p90_ms: percentile(&sorted, 90.0),
        p95_ms: percentile(&sorted, 95.0),
        p99_ms: percentile(&sorted, 99.0),
        min_ms: sorted[0],
        max_ms: sorted[total - 1],
        iterations: metrics.iterations,
    })
}

/// Splits `service_k6_RUNID` or `service_levelN_name_RUNID` into
/// `(service, level)`. Names with fewer than three parts are not results.
pub fn classify(file_stem: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = file_stem.split('_').collect();
    if parts.len() < 3 {
        return None;
    }
    let level = if parts[1] == "k6" {
        "quick".to_owned()
    } else {
        parts[1..parts.len() - 1].join("_")
    };
    Some((parts[0].to_owned(), level))
}

/// Analyses every result file under `<results_dir>/raw`.
pub fn collect(results_dir: &Path) -> Result<Results, ReportError> {
    let raw_dir = results_dir.join("raw");
    if !raw_dir.is_dir() {
        return Err(ReportError::MissingRawDir(raw_dir));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(&raw_dir)
        .map_err(ReportError::io(&raw_dir))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut results = Results::new();
    for path in paths {
        let Some((service, level)) = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(classify)
        else {
            continue;
        };
        let file = File::open(&path).map_err(ReportError::io(&path))?;
        let metrics = parse_k6(BufReader::new(file)).map_err(ReportError::io(&path))?;
        if let Some(summary) = summarize(&metrics) {
            results.insert(
                format!("{service}_{level}"),
                RunResult {
                    service,
                    level,
                    summary,
                },
            );
        }
    }
    Ok(results)
}

pub fn render_markdown(results: &Results, generated_at: &str) -> String {
    let mut out = String::new();
    out.push_str("# Benchmark Results Report\n");
    let _ = writeln!(out, "Generated: {generated_at}");
    out.push_str("\n---\n\n");

    for (level, heading) in LEVELS {
        let _ = writeln!(out, "## {heading}\n");
        out.push_str("| Service | Requests | Mean (ms) | Median (ms) | P95 (ms) | P99 (ms) | Max (ms) |\n");
        out.push_str("|---------|----------|-----------|-------------|----------|----------|----------|\n");
        for run in results.values().filter(|r| r.level == level) {
            let s = &run.summary;
            let _ = writeln!(
                out,
                "| {:<7} | {:>8} | {:>9.2} | {:>11.2} | {:>8.2} | {:>8.2} | {:>8.2} |",
                run.service.to_uppercase(),
                s.total_requests,
                s.mean_ms,
                s.median_ms,
                s.p95_ms,
                s.p99_ms,
                s.max_ms,
            );
        }
        out.push('\n');
    }

    out.push_str("\n## Performance Summary\n\n");
    out.push_str("### Requests Per Second (Approximate)\n\n");
    out.push_str("| Service | Level 1 | Level 2 | Level 3 | Level 4 |\n");
    out.push_str("|---------|---------|---------|---------|----------|\n");

    let services: BTreeSet<&str> = results.values().map(|r| r.service.as_str()).collect();
    for service in services {
        let mut row = vec![service.to_uppercase()];
        for (level, _) in LEVELS {
            let cell = results
                .get(&format!("{service}_{level}"))
                .filter(|r| r.summary.mean_ms > 0.0)
                .map(|r| format!("{:.0}", 1000.0 / r.summary.mean_ms))
                .unwrap_or_else(|| "N/A".to_owned());
            row.push(cell);
        }
        let _ = writeln!(out, "| {} |", row.join(" | "));
    }
    out.push('\n');
    out
}

pub fn render_csv(results: &Results) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');
    for run in results.values() {
        let s = &run.summary;
        let _ = writeln!(
            out,
            "{},{},{},{:.2},{:.2},{:.2},{:.2},{:.2}",
            run.service, run.level, s.total_requests, s.mean_ms, s.median_ms, s.p95_ms, s.p99_ms, s.max_ms,
        );
    }
    out
}

/// What a report run produced.
#[derive(Debug, PartialEq)]
pub enum ReportOutcome {
    Written {
        results: Results,
        markdown: PathBuf,
        csv: PathBuf,
    },
    NoResults,
}

/// Analyses `results_dir` and writes both summaries into it.
pub fn write_report(results_dir: &Path, generated_at: &str) -> Result<ReportOutcome, ReportError> {
    let results = collect(results_dir)?;
    if results.is_empty() {
        return Ok(ReportOutcome::NoResults);
    }

    let markdown = results_dir.join("summary.md");
    fs::write(&markdown, render_markdown(&results, generated_at))
        .map_err(ReportError::io(&markdown))?;

    let csv = results_dir.join("summary.csv");
    fs::write(&csv, render_csv(&results)).map_err(ReportError::io(&csv))?;

    Ok(ReportOutcome::Written {
        results,
        markdown,
        csv,
    })
}
