// ============================================================
// Layer 3 — Scoring Errors
// ============================================================
// A malformed request must fail that request only, and the
// caller needs to know whether the body could not be decoded
// or decoded into the wrong shape. Everything else in the
// crate uses anyhow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    /// Not JSON, no `data` key, or values that are not numbers
    #[error("cannot decode request: {0}")]
    Decode(String),

    /// Ragged rows, empty input, or a row width the model was not trained on
    #[error("invalid request shape: {0}")]
    Shape(String),
}

impl From<serde_json::Error> for ScoreError {
    fn from(e: serde_json::Error) -> Self {
        ScoreError::Decode(e.to_string())
    }
}
