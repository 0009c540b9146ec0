// ============================================================
// Layer 5 — OLS Trainer
// ============================================================
// Ordinary least squares with an intercept, delegated to
// linfa-linear. The fitted linfa model is flattened into our
// own LinearModel so the artifact format does not depend on
// linfa's internal types.

use anyhow::{anyhow, ensure, Result};
use linfa::prelude::*;
use linfa_linear::LinearRegression;

use crate::data::dataset::TripDataset;
use crate::ml::model::LinearModel;

pub fn fit_ols(train: &TripDataset) -> Result<LinearModel> {
    ensure!(train.n_rows() > 0, "Cannot fit a model on zero training rows");

    tracing::debug!(
        "Fitting OLS on {} rows x {} features",
        train.n_rows(),
        train.n_features()
    );

    let dataset = Dataset::new(train.features().clone(), train.targets().clone());
    let fitted = LinearRegression::new()
        .fit(&dataset)
        .map_err(|e| anyhow!("Linear regression fit failed: {e}"))?;

    Ok(LinearModel::new(fitted.params().to_vec(), fitted.intercept()))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array1, Array2};

    #[test]
    fn test_recovers_known_coefficients() {
        let n = 30;
        let x = Array2::from_shape_fn((n, 2), |(i, j)| {
            if j == 0 { i as f64 } else { ((i * 7) % 11) as f64 }
        });
        let y = Array1::from_shape_fn(n, |i| 1.5 + 2.0 * x[(i, 0)] - 0.5 * x[(i, 1)]);
        let data = TripDataset::new(x, y).unwrap();

        let model = fit_ols(&data).unwrap();
        assert_eq!(model.n_features(), 2);

        // Probe the fitted plane at points that isolate each parameter
        let probe = ndarray::array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let y_hat = model.predict(probe.view()).unwrap();
        assert_abs_diff_eq!(y_hat[0], 1.5, epsilon = 1e-8);
        assert_abs_diff_eq!(y_hat[1] - y_hat[0], 2.0, epsilon = 1e-8);
        assert_abs_diff_eq!(y_hat[2] - y_hat[0], -0.5, epsilon = 1e-8);
    }

    #[test]
    fn test_empty_training_set_fails() {
        let data = TripDataset::new(Array2::zeros((0, 2)), Array1::zeros(0)).unwrap();
        assert!(fit_ols(&data).is_err());
    }
}
