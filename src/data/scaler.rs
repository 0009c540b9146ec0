// ============================================================
// Layer 4 — Standard Scaler
// ============================================================
// Per-column standardization: x' = (x - mean) / scale
//
//   mean  = column mean over the fitted rows
//   scale = population standard deviation (ddof = 0),
//           or 1.0 for a constant column so it maps to zeros
//           instead of NaN
//
// The fitted state is serialised into the model artifact; any
// row that should be scored must go through THIS state, never
// a freshly fitted one.

use anyhow::{bail, Result};
use ndarray::{Array1, Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean:  Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Fit column statistics over every row of `x`.
    pub fn fit(x: ArrayView2<f64>) -> Result<Self> {
        if x.nrows() == 0 {
            bail!("Cannot fit a scaler on an empty matrix");
        }

        let mean: Array1<f64> = x
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(x.ncols()));
        let std: Array1<f64> = x.std_axis(Axis(0), 0.0);

        let scale = std
            .iter()
            .map(|&s| if s == 0.0 || !s.is_finite() { 1.0 } else { s })
            .collect();

        Ok(Self { mean: mean.to_vec(), scale })
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardize `x` with the fitted statistics.
    pub fn transform(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.n_features() {
            bail!(
                "Scaler was fit on {} columns, got {}",
                self.n_features(),
                x.ncols()
            );
        }

        let mean  = Array1::from(self.mean.clone());
        let scale = Array1::from(self.scale.clone());
        Ok((&x - &mean) / &scale)
    }

    pub fn fit_transform(x: ArrayView2<f64>) -> Result<(Self, Array2<f64>)> {
        let scaler = Self::fit(x)?;
        let scaled = scaler.transform(x)?;
        Ok((scaler, scaled))
    }
}
