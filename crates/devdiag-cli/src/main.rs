use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use devdiag_core::DeviceSnapshot;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::report::OutputFormat;

mod batch;
mod input;
mod report;
#[cfg(test)]
mod report_tests;

#[derive(Debug, Parser)]
#[command(name = "devdiag")]
#[command(about = "Mobile device health diagnostics from a self-reported snapshot")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file overriding rule cut-offs; unset fields keep their defaults.
    #[arg(long, global = true)]
    thresholds: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Diagnose a single JSON snapshot.
    Check {
        #[arg(long, default_value = "-")]
        input: String,
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
    /// Diagnose NDJSON snapshots, one result line per input line.
    Batch {
        #[arg(long, default_value = "-")]
        input: String,
    },
    /// Print the rule catalogue.
    Rules,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let engine = input::load_engine(cli.thresholds.as_deref())?;

    match cli.command {
        Command::Check { input, format } => {
            let raw = input::read_all(&input)?;
            let snapshot = DeviceSnapshot::from_json(&raw)
                .with_context(|| format!("invalid snapshot from {input}"))?;
            let result = engine.evaluate(&snapshot);
            info!(status = %result.status, brand = %snapshot.brand, model = %snapshot.model, "diagnosed");
            report::write_report(io::stdout().lock(), &engine, &snapshot, &result, format, Utc::now())?;
        }
        Command::Batch { input } => {
            let reader = input::open_lines(&input)?;
            let stdout = io::stdout();
            let summary = batch::run_batch(&engine, reader, stdout.lock())?;
            info!(
                evaluated = summary.evaluated(),
                good = summary.good,
                needs_attention = summary.needs_attention,
                critical = summary.critical,
                rejected = summary.rejected,
                "batch complete"
            );
        }
        Command::Rules => {
            println!("{}", serde_json::to_string_pretty(&devdiag_core::catalogue())?);
        }
    }

    Ok(())
}
