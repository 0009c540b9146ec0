// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `train` — fits the model and writes the artifact
//   2. `score` — loads the artifact once and scores requests
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ScoreArgs, TrainArgs};
use std::io::{self, BufRead, Write};

use crate::application::score_use_case::ScoreUseCase;

#[derive(Parser, Debug)]
#[command(
    name = "nyc-taxi-duration",
    version,
    about = "Train a linear NYC taxi trip-duration model, then score JSON requests."
)]
pub struct Cli {
    /// The subcommand to run (train or score)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => run_train(args),
            Commands::Score(args) => run_score(args),
        }
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;

    tracing::info!("Starting training on data in: {}", args.data_folder);

    let report = TrainUseCase::new(args.into()).execute()?;

    println!(
        "Training complete. MSE={:.6} ({} train / {} validation rows). Model saved to {}",
        report.mse,
        report.n_train,
        report.n_val,
        report.artifact_path.display()
    );
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<()> {
    use crate::infra::registry::LocalModelRegistry;

    let registry = LocalModelRegistry::new(&args.registry_dir);
    let service  = ScoreUseCase::init(&registry, &args.model_name)?;
    tracing::info!(
        "Serving '{}'; rows must hold {} scaled features in order {:?}",
        service.model_name(),
        service.preprocessing().feature_names.len(),
        service.preprocessing().feature_names
    );

    if let Some(request) = args.request {
        let response = service.run(&request)?;
        println!("{response}");
        return Ok(());
    }

    serve_lines(&service, io::stdin().lock(), io::stdout().lock())
}

/// Score one request per non-empty input line. A failed request
/// (including one that is not UTF-8) is logged and skipped; only
/// an I/O error on the stream ends the loop.
fn serve_lines(service: &ScoreUseCase, input: impl BufRead, mut output: impl Write) -> Result<()> {
    for (n, bytes) in input.split(b'\n').enumerate() {
        let line = match String::from_utf8(bytes?) {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Request {} is not valid UTF-8: {e}", n + 1);
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match service.run(line.trim_end_matches('\r')) {
            Ok(response) => writeln!(output, "{response}")?,
            Err(e) => tracing::error!("Request {} failed: {e}", n + 1),
        }
    }
    output.flush()?;
    Ok(())
}
