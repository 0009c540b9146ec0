// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `score`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::train_use_case::{TrainConfig, DEFAULT_MODEL_NAME, DEFAULT_OUTPUT_DIR};
use crate::data::splitter::{DEFAULT_SEED, DEFAULT_TEST_SIZE};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fit the trip-duration model on data_after_prep.csv
    Train(TrainArgs),

    /// Load a trained model and score JSON requests
    Score(ScoreArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Data folder mounting point; must contain data_after_prep.csv
    #[arg(long)]
    pub data_folder: String,

    /// Directory the model artifact and run log are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Fraction of rows held out for validation
    #[arg(long, default_value_t = DEFAULT_TEST_SIZE)]
    pub test_size: f64,

    /// Seed for the train/validation shuffle
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Name the artifact is saved under
    #[arg(long, default_value = DEFAULT_MODEL_NAME)]
    pub model_name: String,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_folder: a.data_folder,
            output_dir:  a.output_dir,
            test_size:   a.test_size,
            seed:        a.seed,
            model_name:  a.model_name,
        }
    }
}

/// All arguments for the `score` command
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Name of the model to resolve in the registry
    #[arg(long, default_value = DEFAULT_MODEL_NAME)]
    pub model_name: String,

    /// Directory holding <model-name>.json artifacts
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub registry_dir: String,

    /// A single request body, e.g. '{"data": [[0.1, -1.2, ...]]}'.
    /// Without it, every non-empty stdin line is scored as one request.
    #[arg(long)]
    pub request: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_train_defaults() {
        let cli = Cli::try_parse_from(["nyc-taxi-duration", "train", "--data-folder", "mnt/data"]).unwrap();
        let Commands::Train(args) = cli.command else { panic!("expected train") };
        let cfg = TrainConfig::from(args);
        assert_eq!(cfg.data_folder, "mnt/data");
        assert_eq!(cfg.output_dir, "outputs");
        assert_eq!(cfg.test_size, 0.25);
        assert_eq!(cfg.seed, 20);
        assert_eq!(cfg.model_name, "nyc_taxi_model");
    }

    #[test]
    fn test_train_requires_data_folder() {
        assert!(Cli::try_parse_from(["nyc-taxi-duration", "train"]).is_err());
    }

    #[test]
    fn test_score_defaults() {
        let cli = Cli::try_parse_from(["nyc-taxi-duration", "score"]).unwrap();
        let Commands::Score(args) = cli.command else { panic!("expected score") };
        assert_eq!(args.model_name, "nyc_taxi_model");
        assert_eq!(args.registry_dir, "outputs");
        assert!(args.request.is_none());
    }
}
