use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use flowcast_core::prelude::*;

/// Route speed and congestion prediction for the traffic controller.
///
/// Without a subcommand, reads one JSON request from stdin and writes
/// the prediction response to stdout.
#[derive(Parser)]
#[command(name = "flowcast", version, about)]
struct Cli {
    /// Path to the regression artifact.
    #[arg(long, global = true, default_value = "model.json")]
    model: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fit the regression artifact from a CSV dataset with columns
    /// path_length, hour, is_peak, is_weekend, target_speed.
    Train {
        /// Tabular training data.
        data: PathBuf,
    },
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the payload.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Train { data }) => run_training(&data, &cli.model),
        None => run_prediction(&cli.model),
    }
}

fn run_prediction(model_path: &Path) -> ExitCode {
    let mut raw = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut raw) {
        warn!("failed to read request payload: {err}");
        raw.clear();
    }

    // A malformed payload degrades to the empty request.
    let request: PredictionRequest = serde_json::from_str(&raw).unwrap_or_default();
    debug!(slot = ?request.slot, "running prediction");

    let orchestrator = PredictionOrchestrator::new(ModelPredictor::new(model_path));
    let result = orchestrator.predict(&request);
    match serde_json::to_string(&result) {
        Ok(body) => {
            println!("{body}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!("failed to serialize response: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_training(data_path: &Path, model_path: &Path) -> ExitCode {
    match train_model(data_path, model_path) {
        Ok(report) => {
            debug!(rows = report.rows, "training complete");
            println!(
                "{}",
                json!({
                    "ok": true,
                    "saved_model": report.saved_model.display().to_string(),
                })
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", json!({ "ok": false, "error": err.to_string() }));
            ExitCode::FAILURE
        }
    }
}
