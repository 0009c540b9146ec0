// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline. The ORDER matters:
//
//   Step 1: Load data_after_prep.csv      (Layer 4 - data)
//   Step 2: Encode store_and_fwd_flag     (Layer 4 - data)
//   Step 3: Encode both weekday columns   (Layer 4 - data)
//           with ONE shared encoder
//   Step 4: ln(trip_duration) as target   (Layer 4 - data)
//   Step 5: Remaining columns → matrix    (Layer 3 - domain)
//   Step 6: Fit scaler on ALL rows, then  (Layer 4 - data)
//           transform (before the split)
//   Step 7: Seeded 75/25 split            (Layer 4 - data)
//   Step 8: Fit OLS on the train rows     (Layer 5 - ml)
//   Step 9: Predict validation, MSE       (Layer 5 - ml)
//   Step 10: Save the artifact            (Layer 6 - infra)
//
// Each stage reports to the RunTracker as it finishes.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    dataset::TripDataset,
    loader::CsvTableLoader,
    preprocessor::{split_log_target, Preprocessor, TARGET_COLUMN},
    scaler::StandardScaler,
    splitter::{split_train_val, DEFAULT_SEED, DEFAULT_TEST_SIZE},
};
use crate::domain::traits::{RunTracker, RunValue, TableSource};
use crate::infra::{
    checkpoint::{ArtifactStore, Evaluation, ModelArtifact},
    metrics::RunLog,
};
use crate::ml::{evaluator::mean_squared_error, trainer::fit_ols};

pub const DEFAULT_MODEL_NAME: &str = "nyc_taxi_model";
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

const FINISHED: &str = "finished";

// ─── Training Configuration ──────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub data_folder: String,
    pub output_dir:  String,
    pub test_size:   f64,
    pub seed:        u64,
    pub model_name:  String,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_folder: "data".to_string(),
            output_dir:  DEFAULT_OUTPUT_DIR.to_string(),
            test_size:   DEFAULT_TEST_SIZE,
            seed:        DEFAULT_SEED,
            model_name:  DEFAULT_MODEL_NAME.to_string(),
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub artifact_path: PathBuf,
    pub mse:           f64,
    pub n_train:       usize,
    pub n_val:         usize,
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline against `<data_folder>/data_after_prep.csv`,
    /// logging to `<output_dir>/run_log.csv`.
    pub fn execute(&self) -> Result<TrainReport> {
        let source  = CsvTableLoader::in_folder(&self.config.data_folder);
        let mut log = RunLog::new(&self.config.output_dir)?;
        self.execute_with(&source, &mut log)
    }

    /// Run the pipeline with an explicit table source and run tracker.
    pub fn execute_with(
        &self,
        source:  &dyn TableSource,
        tracker: &mut dyn RunTracker,
    ) -> Result<TrainReport> {
        let cfg = &self.config;
        ensure!(
            cfg.test_size > 0.0 && cfg.test_size < 1.0,
            "test_size must be between 0 and 1, got {}",
            cfg.test_size
        );

        // ── Step 1: Load the table ────────────────────────────────────────────
        tracker.log("Data path", RunValue::from(source.location()));
        let mut table = source.load()?;
        tracing::info!("Loaded {} rows x {} columns", table.n_rows(), table.n_columns());
        tracker.log("Data loading", FINISHED.into());

        // ── Steps 2-3: Label-encode categorical columns ───────────────────────
        let preprocessor = Preprocessor::new();
        preprocessor.encode(&mut table)?;
        tracker.log("Data processing", FINISHED.into());

        // ── Step 4: Target = ln(trip_duration) ────────────────────────────────
        let y = split_log_target(&mut table, TARGET_COLUMN)?;

        // ── Step 5: Remaining columns form the raw feature matrix ─────────────
        let feature_names: Vec<String> =
            table.column_names().iter().map(|s| s.to_string()).collect();
        let x_raw = table.to_matrix()?;

        // ── Step 6: Standardize using statistics over ALL rows ────────────────
        let (scaler, x) = StandardScaler::fit_transform(x_raw.view())?;
        tracker.log("Normalization", FINISHED.into());

        // ── Step 7: Seeded train/validation split ─────────────────────────────
        let data = TripDataset::new(x, y)?;
        let (train, val) = split_train_val(&data, cfg.test_size, cfg.seed)?;
        tracing::info!("Split: {} train, {} validation", train.n_rows(), val.n_rows());

        // ── Step 8: Fit OLS ───────────────────────────────────────────────────
        let model = fit_ols(&train)?;
        tracker.log("Model training", FINISHED.into());

        // ── Step 9: Evaluate on the validation rows ───────────────────────────
        let y_pred = model.predict(val.features().view())?;
        tracker.log("Prediction", FINISHED.into());

        let mse = mean_squared_error(val.targets().view(), y_pred.view())?;
        tracker.log("Evaluation", FINISHED.into());
        tracker.log("Mean Squared Error", mse.into());

        // ── Step 10: Persist the artifact ─────────────────────────────────────
        let artifact = ModelArtifact {
            name:          cfg.model_name.clone(),
            model,
            preprocessing: preprocessor.into_preprocessing(scaler, feature_names),
            evaluation:    Evaluation {
                mse:     mse.is_finite().then_some(mse),
                n_train: train.n_rows(),
                n_val:   val.n_rows(),
            },
        };
        let artifact_path = ArtifactStore::new(&cfg.output_dir).save(&artifact)?;
        tracing::info!("Model artifact written to '{}'", artifact_path.display());

        Ok(TrainReport {
            artifact_path,
            mse,
            n_train: train.n_rows(),
            n_val:   val.n_rows(),
        })
    }
}
