//! Benchmark workbench CLI.
//!
//! Provides the `workbench` binary with two subcommands:
//! - `exec` runs one workload offline through the same decode/compute
//!   pipeline the HTTP server uses and prints the JSON response.
//! - `report` summarises k6 result files into `summary.md` / `summary.csv`.

mod report;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use workbench_core::Workload;

use crate::report::ReportOutcome;

/// Runtime benchmark workloads and result analysis.
#[derive(Parser)]
#[command(name = "workbench", about = "Runtime benchmark workloads and result analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run one workload locally and print its JSON response.
    Exec {
        /// Workload: normal, cpu-intensive or strings.
        workload: Workload,

        /// Request body as inline JSON.
        #[arg(short, long, conflicts_with = "body_file")]
        body: Option<String>,

        /// Read the request body from a file.
        #[arg(short = 'f', long)]
        body_file: Option<PathBuf>,
    },

    /// Summarise k6 results found in `<DIR>/raw/*.json`.
    Report {
        /// Results directory.
        #[arg(default_value = "./results")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Exec {
            workload,
            body,
            body_file,
        } => run_exec(workload, body, body_file),
        Commands::Report { dir } => run_report(dir),
    };
    process::exit(exit_code);
}

/// Execute the exec subcommand.
///
/// Returns exit code: 0 = success, 1 = request error, 3 = I/O error.
fn run_exec(workload: Workload, body: Option<String>, body_file: Option<PathBuf>) -> i32 {
    let body = match (body, body_file) {
        (Some(inline), _) => inline.into_bytes(),
        (None, Some(path)) => match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error: failed to read '{}': {}", path.display(), e);
                return 3;
            }
        },
        (None, None) => Vec::new(),
    };

    match workload.execute(&body) {
        Ok(response) => {
            let json = serde_json::to_string_pretty(&response).unwrap_or_else(|e| {
                format!("{{\"error\": \"failed to serialize result: {}\"}}", e)
            });
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Execute the report subcommand.
///
/// Returns exit code: 0 = success (including "nothing to report"), 3 = I/O error.
fn run_report(dir: PathBuf) -> i32 {
    println!("Analyzing results in {}...", dir.display());
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    match report::write_report(&dir, &generated_at) {
        Ok(ReportOutcome::Written {
            results,
            markdown,
            csv,
        }) => {
            for (key, run) in &results {
                let s = &run.summary;
                println!(
                    "{}: {} requests, mean {:.2} ms, p90 {:.2} ms, min {:.2} ms, {} iterations",
                    key, s.total_requests, s.mean_ms, s.p90_ms, s.min_ms, s.iterations
                );
            }
            println!("Report generated: {}", markdown.display());
            println!("CSV summary generated: {}", csv.display());
            0
        }
        Ok(ReportOutcome::NoResults) => {
            println!("No results found to analyze");
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            3
        }
    }
}
