use anyhow::{bail, Result};
use ndarray::{Array1, Array2, Axis};

/// Feature rows and their targets, kept row-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDataset {
    features: Array2<f64>,
    targets:  Array1<f64>,
}

impl TripDataset {
    pub fn new(features: Array2<f64>, targets: Array1<f64>) -> Result<Self> {
        if features.nrows() != targets.len() {
            bail!(
                "{} feature rows but {} targets",
                features.nrows(),
                targets.len()
            );
        }
        Ok(Self { features, targets })
    }

    pub fn features(&self) -> &Array2<f64> { &self.features }

    pub fn targets(&self) -> &Array1<f64> { &self.targets }

    pub fn n_rows(&self) -> usize { self.targets.len() }

    pub fn n_features(&self) -> usize { self.features.ncols() }

    /// New dataset holding the given rows, in the given order.
    pub fn select(&self, rows: &[usize]) -> Self {
        Self {
            features: self.features.select(Axis(0), rows),
            targets:  self.targets.select(Axis(0), rows),
        }
    }
}
