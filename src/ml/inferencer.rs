// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Holds the model loaded at service start and turns decoded
// request rows into predictions. Rows arrive already encoded
// and scaled; the inferencer only checks that they form a
// rectangular matrix of the width the model was trained on.

use ndarray::Array2;

use crate::domain::error::ScoreError;
use crate::ml::model::LinearModel;

#[derive(Debug, Clone)]
pub struct Inferencer {
    model: LinearModel,
}

impl Inferencer {
    pub fn new(model: LinearModel) -> Self {
        Self { model }
    }

    pub fn n_features(&self) -> usize {
        self.model.n_features()
    }

    /// Predict one log-duration per row, in row order.
    pub fn predict_rows(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, ScoreError> {
        let width = self.n_features();

        if rows.is_empty() {
            return Err(ScoreError::Shape("`data` holds no rows".to_string()));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ScoreError::Shape(format!(
                "row {} has {} values, model expects {}",
                i,
                row.len(),
                width
            )));
        }

        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let x = Array2::from_shape_vec((rows.len(), width), flat)
            .map_err(|e| ScoreError::Shape(e.to_string()))?;

        let y = self
            .model
            .predict(x.view())
            .map_err(|e| ScoreError::Shape(e.to_string()))?;

        tracing::debug!("Scored {} rows", y.len());
        Ok(y.to_vec())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn inferencer() -> Inferencer {
        Inferencer::new(LinearModel::new(vec![1.0, 2.0, 3.0], 0.5))
    }

    #[test]
    fn test_predicts_in_row_order() {
        let y = inferencer()
            .predict_rows(&[vec![1.0, 0.0, 0.0], vec![0.0, 0.0, 1.0]])
            .unwrap();
        assert_eq!(y, vec![1.5, 3.5]);
    }

    #[test]
    fn test_wrong_width_is_shape_error() {
        let err = inferencer().predict_rows(&[vec![1.0, 2.0]]).unwrap_err();
        assert!(matches!(err, ScoreError::Shape(_)));
    }

    #[test]
    fn test_ragged_rows_are_shape_error() {
        let err = inferencer()
            .predict_rows(&[vec![1.0, 2.0, 3.0], vec![1.0]])
            .unwrap_err();
        assert!(matches!(err, ScoreError::Shape(_)));
    }

    #[test]
    fn test_no_rows_is_shape_error() {
        let err = inferencer().predict_rows(&[]).unwrap_err();
        assert!(matches!(err, ScoreError::Shape(_)));
    }
}
