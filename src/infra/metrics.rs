// ============================================================
// Layer 6 — Run Log
// ============================================================
// Records the key/value entries of a training run.
//
// Every entry is:
//   - emitted through tracing (target "run"), and
//   - appended as one row to <output-dir>/run_log.csv
//
// Example CSV output:
//   key,value
//   Data path,data/data_after_prep.csv
//   Data loading,finished
//   ...
//   Mean Squared Error,0.412339
//
// The header is written only when the file is new, so several
// runs append to the same log. A failed write is reported as a
// warning and never interrupts training.

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::traits::{RunTracker, RunValue};

pub const RUN_LOG_FILE_NAME: &str = "run_log.csv";

/// Logs run entries to tracing and to a CSV file.
pub struct RunLog {
    csv_path: PathBuf,
}

impl RunLog {
    /// Create a new RunLog in `dir`.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let csv_path = dir.join(RUN_LOG_FILE_NAME);
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "key,value")?;
            tracing::debug!("Created run log: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    fn append(&self, key: &str, value: &RunValue) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;
        writeln!(f, "{},{}", csv_field(key), csv_field(&value.to_string()))?;
        Ok(())
    }
}

impl RunTracker for RunLog {
    fn log(&mut self, key: &str, value: RunValue) {
        tracing::info!(target: "run", "{}: {}", key, value);

        if let Err(e) = self.append(key, &value) {
            tracing::warn!("Cannot append to '{}': {e}", self.csv_path.display());
        }
    }
}

/// Quote a CSV field when it contains a delimiter, quote or newline.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
