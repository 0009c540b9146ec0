// ============================================================
// Layer 6 — Local Model Registry
// ============================================================
// Resolves a model name to the artifact file the training job
// wrote: `<dir>/<name>.json`. The scoring service only ever
// asks the registry for a path; it never builds one itself.

use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::domain::traits::ModelRegistry;
use crate::infra::checkpoint::artifact_file_name;

pub struct LocalModelRegistry {
    dir: PathBuf,
}

impl LocalModelRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ModelRegistry for LocalModelRegistry {
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) {
            bail!("Invalid model name '{name}'");
        }

        let path = self.dir.join(artifact_file_name(name));
        if !path.is_file() {
            bail!(
                "Model '{}' not found in registry '{}'",
                name,
                self.dir.display()
            );
        }

        tracing::debug!("Resolved model '{}' to '{}'", name, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolves_existing_model() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("nyc_taxi_model.json"), "{}").unwrap();

        let registry = LocalModelRegistry::new(dir.path());
        assert_eq!(
            registry.resolve("nyc_taxi_model").unwrap(),
            dir.path().join("nyc_taxi_model.json")
        );
    }

    #[test]
    fn test_unknown_model_fails() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LocalModelRegistry::new(dir.path());
        assert!(registry.resolve("nyc_taxi_model").is_err());
    }

    #[test]
    fn test_rejects_path_like_names() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LocalModelRegistry::new(dir.path());
        assert!(registry.resolve("../nyc_taxi_model").is_err());
        assert!(registry.resolve("").is_err());
    }
}
