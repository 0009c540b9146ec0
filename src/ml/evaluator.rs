//! Regression metrics for the validation partition.

use anyhow::{ensure, Result};
use ndarray::ArrayView1;

/// Mean squared error: mean((y_true - y_pred)²)
///
/// Lower is better. NaN inputs (from non-positive durations)
/// propagate into the result.
pub fn mean_squared_error(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
    ensure!(
        y_true.len() == y_pred.len(),
        "{} targets but {} predictions",
        y_true.len(),
        y_pred.len()
    );
    ensure!(!y_true.is_empty(), "Cannot evaluate on zero rows");

    let sum_sq: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p) * (t - p))
        .sum();

    Ok(sum_sq / y_true.len() as f64)
}
