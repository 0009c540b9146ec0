// ============================================================
// Layer 2 — Score Use Case
// ============================================================
// Two phases:
//
//   init(registry, name)  — once per process. Resolve the model
//                           name to an artifact path, load it,
//                           keep it in memory. Failure here
//                           means the service cannot serve.
//
//   run(raw_request)      — once per request. Decode
//                           {"data": [[...], ...]}, predict,
//                           return a JSON array of numbers.
//                           A bad request fails only itself.
//
// Requests carry rows that are ALREADY encoded and scaled;
// run() does not apply the bundled preprocessing. Responses
// are on the log-duration scale.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::preprocessor::Preprocessing;
use crate::domain::error::ScoreError;
use crate::domain::traits::{ModelRegistry, Persistable};
use crate::infra::checkpoint::ModelArtifact;
use crate::ml::inferencer::Inferencer;

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    data: Vec<Vec<f64>>,
}

/// A loaded model, ready to answer requests.
///
/// Holds only immutable state, so one instance can be shared
/// by reference across threads.
pub struct ScoreUseCase {
    model_name:    String,
    inferencer:    Inferencer,
    preprocessing: Preprocessing,
}

impl ScoreUseCase {
    pub fn init(registry: &dyn ModelRegistry, model_name: &str) -> Result<Self> {
        let path = registry
            .resolve(model_name)
            .with_context(|| format!("Cannot resolve model '{model_name}'"))?;
        let artifact = ModelArtifact::load(&path)?;

        tracing::info!(
            "Model '{}' loaded from '{}' ({} features)",
            model_name,
            path.display(),
            artifact.model.n_features()
        );

        Ok(Self {
            model_name:    model_name.to_string(),
            inferencer:    Inferencer::new(artifact.model),
            preprocessing: artifact.preprocessing,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Encoders, scaler and feature order the model was trained with.
    pub fn preprocessing(&self) -> &Preprocessing {
        &self.preprocessing
    }

    pub fn run(&self, raw_request: &str) -> Result<String, ScoreError> {
        let request: ScoreRequest = serde_json::from_str(raw_request)?;
        let predictions = self.inferencer.predict_rows(&request.data)?;
        Ok(serde_json::to_string(&predictions)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures::{log_duration, trip_csv, write_trip_csv};
    use crate::application::train_use_case::{TrainConfig, TrainUseCase, DEFAULT_MODEL_NAME};
    use crate::data::loader::{CsvTableLoader, DATA_FILE_NAME};
    use crate::data::splitter::split_indices;
    use crate::domain::traits::TableSource;
    use crate::infra::checkpoint::{tests::sample_artifact, ArtifactStore};
    use crate::infra::registry::LocalModelRegistry;
    use approx::assert_abs_diff_eq;

    /// Service over a hand-built two-feature model: 6.2 + 0.5a - 0.25b
    fn small_service(dir: &std::path::Path) -> ScoreUseCase {
        ArtifactStore::new(dir).save(&sample_artifact("nyc_taxi_model")).unwrap();
        ScoreUseCase::init(&LocalModelRegistry::new(dir), "nyc_taxi_model").unwrap()
    }

    #[test]
    fn test_run_returns_one_prediction_per_row() {
        let dir = tempfile::tempdir().unwrap();
        let service = small_service(dir.path());

        let out = service.run(r#"{"data": [[2.0, 4.0], [0, 0]]}"#).unwrap();
        let values: Vec<f64> = serde_json::from_str(&out).unwrap();
        assert_eq!(values.len(), 2);
        assert_abs_diff_eq!(values[0], 6.2, epsilon = 1e-12);
        assert_abs_diff_eq!(values[1], 6.2, epsilon = 1e-12);
    }

    #[test]
    fn test_run_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let service = small_service(dir.path());
        let req = r#"{"data": [[1.5, -3.0], [0.1, 0.2], [7, 8]]}"#;
        let first = service.run(req).unwrap();
        for _ in 0..5 {
            assert_eq!(service.run(req).unwrap(), first);
        }
    }

    #[test]
    fn test_missing_data_key_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = small_service(dir.path());
        let err = service.run(r#"{"not_data": []}"#).unwrap_err();
        assert!(matches!(err, ScoreError::Decode(_)));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = small_service(dir.path());
        assert!(matches!(service.run("data=[[1,2]]").unwrap_err(), ScoreError::Decode(_)));
        assert!(matches!(
            service.run(r#"{"data": [["a", 2]]}"#).unwrap_err(),
            ScoreError::Decode(_)
        ));
    }

    #[test]
    fn test_wrong_feature_count_is_shape_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = small_service(dir.path());
        let err = service.run(r#"{"data": [[1, 2, 3]]}"#).unwrap_err();
        assert!(matches!(err, ScoreError::Shape(_)));
    }

    #[test]
    fn test_empty_data_is_shape_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = small_service(dir.path());
        assert!(matches!(service.run(r#"{"data": []}"#).unwrap_err(), ScoreError::Shape(_)));
    }

    #[test]
    fn test_bad_request_does_not_poison_service() {
        let dir = tempfile::tempdir().unwrap();
        let service = small_service(dir.path());
        assert!(service.run("{").is_err());
        assert!(service.run(r#"{"data": [[1.0, 1.0]]}"#).is_ok());
    }

    #[test]
    fn test_init_fails_for_unknown_model() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LocalModelRegistry::new(dir.path());
        assert!(ScoreUseCase::init(&registry, "nyc_taxi_model").is_err());
    }

    #[test]
    fn test_init_fails_for_corrupt_artifact() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("nyc_taxi_model.json"), "not json").unwrap();
        let registry = LocalModelRegistry::new(dir.path());
        assert!(ScoreUseCase::init(&registry, "nyc_taxi_model").is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let dir = tempfile::tempdir().unwrap();
        let service = small_service(dir.path());
        let req = r#"{"data": [[3.0, 1.0]]}"#;
        let expected = service.run(req).unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| service.run(req).unwrap())).collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    // ── End to end: train on synthetic trips, then score a held-out row ───────
    #[test]
    fn test_train_then_score_held_out_row() {
        let dir = tempfile::tempdir().unwrap();
        let n = 100;
        write_trip_csv(dir.path(), n);
        let out = dir.path().join("outputs");

        let cfg = TrainConfig {
            data_folder: dir.path().display().to_string(),
            output_dir:  out.display().to_string(),
            ..TrainConfig::default()
        };
        let (test_size, seed) = (cfg.test_size, cfg.seed);
        let report = TrainUseCase::new(cfg).execute().unwrap();
        assert!(report.mse < 0.1, "validation MSE too high: {}", report.mse);

        let service = ScoreUseCase::init(&LocalModelRegistry::new(&out), DEFAULT_MODEL_NAME).unwrap();
        assert_eq!(service.model_name(), DEFAULT_MODEL_NAME);

        // Rebuild the encoded + scaled row with the state bundled in the artifact
        let table = CsvTableLoader::in_folder(dir.path()).load().unwrap();
        let x = service.preprocessing().transform(&table).unwrap();
        let (_, val_rows) = split_indices(n, test_size, seed).unwrap();
        let held_out = val_rows[0];

        let row: Vec<f64> = x.row(held_out).to_vec();
        let request = serde_json::json!({ "data": [row] }).to_string();
        let predictions: Vec<f64> = serde_json::from_str(&service.run(&request).unwrap()).unwrap();

        assert_eq!(predictions.len(), 1);
        assert_abs_diff_eq!(predictions[0], log_duration(held_out), epsilon = 1e-6);
    }

    #[test]
    fn test_zero_durations_still_give_a_loadable_model() {
        let dir = tempfile::tempdir().unwrap();
        let mut csv = trip_csv(100);
        for _ in 0..20 {
            csv.push_str("N,Monday,Monday,1,1.0,0\n");
        }
        std::fs::write(dir.path().join(DATA_FILE_NAME), csv).unwrap();
        let out = dir.path().join("outputs");

        let cfg = TrainConfig {
            data_folder: dir.path().display().to_string(),
            output_dir:  out.display().to_string(),
            ..TrainConfig::default()
        };
        let report = TrainUseCase::new(cfg).execute().unwrap();
        assert!(!report.mse.is_finite());

        let service = ScoreUseCase::init(&LocalModelRegistry::new(&out), DEFAULT_MODEL_NAME).unwrap();
        let width = service.preprocessing().feature_names.len();
        let request = serde_json::json!({ "data": [vec![0.0; width]] }).to_string();

        // non-finite predictions serialize as null
        let predictions: Vec<Option<f64>> =
            serde_json::from_str(&service.run(&request).unwrap()).unwrap();
        assert_eq!(predictions.len(), 1);
        assert!(predictions[0].map_or(true, |p| !p.is_finite()));
    }
}
