// ============================================================
// Layer 6 — Model Artifact Store
// ============================================================
// Saves and restores the trained model bundle as JSON.
//
// What gets saved (one file per model name):
//   outputs/
//     nyc_taxi_model.json
//       ├── name            "nyc_taxi_model"
//       ├── model           coefficients + intercept
//       ├── preprocessing   encoders, scaler, feature order
//       └── evaluation      validation MSE, row counts
//
// The output directory is created on save; an existing
// directory is fine.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::preprocessor::Preprocessing;
use crate::domain::traits::Persistable;
use crate::ml::model::LinearModel;

pub const ARTIFACT_EXTENSION: &str = "json";

/// File name an artifact called `name` is stored under.
pub fn artifact_file_name(name: &str) -> String {
    format!("{name}.{ARTIFACT_EXTENSION}")
}

/// Validation results recorded alongside the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// `None` when the metric was not finite (e.g. a non-positive
    /// duration turned a target into NaN); JSON has no NaN.
    pub mse:     Option<f64>,
    pub n_train: usize,
    pub n_val:   usize,
}

/// Everything training hands over to scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name:          String,
    pub model:         LinearModel,
    pub preprocessing: Preprocessing,
    pub evaluation:    Evaluation,
}

impl Persistable for ModelArtifact {
    fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write model artifact to '{}'", path.display()))?;
        tracing::debug!("Saved model artifact to '{}'", path.display());
        Ok(())
    }

    fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).with_context(|| {
            format!(
                "Cannot read model artifact '{}'. Have you run 'train' first?",
                path.display()
            )
        })?;
        serde_json::from_str(&json)
            .with_context(|| format!("Model artifact '{}' is not valid", path.display()))
    }
}

/// Writes model artifacts into one output directory.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.dir.join(artifact_file_name(name))
    }

    /// Save `artifact` as `<dir>/<artifact.name>.json` and return the path.
    pub fn save(&self, artifact: &ModelArtifact) -> Result<PathBuf> {
        // create_dir_all is a no-op when the directory exists
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create output directory '{}'", self.dir.display()))?;

        let path = self.artifact_path(&artifact.name);
        artifact.save(&path)?;
        Ok(path)
    }
}
