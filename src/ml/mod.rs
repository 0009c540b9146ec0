// ============================================================
// Layer 5 — ML / Model Layer (linfa)
// ============================================================
// The only layer that touches linfa. Everything above it sees
// a plain `LinearModel` with a weight vector and an intercept.
//
//   model.rs      — the fitted linear model and its predict()
//   trainer.rs    — ordinary least squares via linfa-linear
//   evaluator.rs  — validation metrics (mean squared error)
//   inferencer.rs — turns decoded request rows into predictions
//
// Reference: linfa / linfa-linear crate documentation

/// Fitted linear model (weights + intercept)
pub mod model;

/// OLS fitting on the training partition
pub mod trainer;

/// Regression metrics
pub mod evaluator;

/// Prediction over request rows with shape checks
pub mod inferencer;
