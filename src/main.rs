use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sparsemat::{Operation, RunConfig, DEFAULT_RESULTS_DIR};

/// Add, subtract or multiply two sparse matrix files.
#[derive(Parser, Debug)]
#[command(name = "sparsemat", version)]
struct Cli {
    /// add, subtract or multiply (or 1, 2, 3)
    operation: Operation,

    /// First matrix file
    lhs: PathBuf,

    /// Second matrix file
    rhs: PathBuf,

    /// Output file [default: <results-dir>/<operation>_result.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for results when --output is not given
    #[arg(long, default_value = DEFAULT_RESULTS_DIR)]
    results_dir: PathBuf,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> Result<PathBuf> {
    let config = RunConfig {
        operation: cli.operation,
        lhs: cli.lhs,
        rhs: cli.rhs,
        output: cli.output,
        results_dir: cli.results_dir,
    };

    let output = config
        .execute()
        .with_context(|| format!("{} failed", config.operation))?;
    Ok(std::fs::canonicalize(&output).unwrap_or(output))
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(output) => println!("Operation completed. Results saved to: {}", output.display()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
