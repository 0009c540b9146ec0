// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline talks to three outside collaborators: where the
// table comes from, where run metrics go, and where a named
// model lives. Each one is a trait so the application layer
// never sees polars, CSV files or directory layouts.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::table::FeatureTable;

// ─── TableSource ──────────────────────────────────────────────────────────────
/// Any component that can load the training table.
///
/// Implementations:
///   - CsvTableLoader → reads a CSV file with a header row
pub trait TableSource {
    /// Human-readable location, reported as the run's data path.
    fn location(&self) -> String;

    /// Load the whole table into memory.
    fn load(&self) -> Result<FeatureTable>;
}

// ─── RunTracker ───────────────────────────────────────────────────────────────
/// A value attached to a run-log key.
#[derive(Debug, Clone, PartialEq)]
pub enum RunValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for RunValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunValue::Text(s)   => write!(f, "{s}"),
            RunValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for RunValue {
    fn from(s: &str) -> Self {
        RunValue::Text(s.to_string())
    }
}

impl From<String> for RunValue {
    fn from(s: String) -> Self {
        RunValue::Text(s)
    }
}

impl From<f64> for RunValue {
    fn from(n: f64) -> Self {
        RunValue::Number(n)
    }
}

/// Receives key/value entries describing a training run.
///
/// Logging is fire-and-forget: implementations swallow their
/// own failures so a broken tracker never aborts training.
///
/// Implementations:
///   - RunLog → tracing + CSV file in the output directory
pub trait RunTracker {
    fn log(&mut self, key: &str, value: RunValue);
}

// ─── ModelRegistry ────────────────────────────────────────────────────────────
/// Resolves a model name to a local file holding its artifact.
///
/// Implementations:
///   - LocalModelRegistry → `<dir>/<name>.json`
pub trait ModelRegistry {
    fn resolve(&self, name: &str) -> Result<PathBuf>;
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
///
/// Implementations:
///   - ModelArtifact → model, preprocessing state and evaluation as JSON
pub trait Persistable: Sized {
    /// Save this component's state to the given path
    fn save(&self, path: &Path) -> Result<()>;

    /// Load a component's state from the given path.
    fn load(path: &Path) -> Result<Self>;
}
