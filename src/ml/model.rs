// ============================================================
// Layer 5 — Linear Model
// ============================================================
// y_hat = X · w + b
//
// Fitted on standardized features against ln(trip_duration),
// so predictions are on the log-duration scale. Immutable once
// fit: predict() only reads the parameters, which makes one
// shared instance safe to use from many threads.
//
// A non-positive trip_duration turns into a -inf target and
// the fitted parameters into NaN/inf. JSON has no literal for
// those, so non-finite parameters are written as strings
// ("NaN", "inf", "-inf") and predictions stay NaN after a
// reload.

use anyhow::{ensure, Result};
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(with = "param_repr::seq")]
    coefficients: Vec<f64>,
    #[serde(with = "param_repr")]
    intercept:    f64,
}

impl LinearModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self { coefficients, intercept }
    }

    /// Number of feature columns the weights refer to
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predict one value per row of `x`.
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        ensure!(
            x.ncols() == self.n_features(),
            "Model expects {} features per row, got {}",
            self.n_features(),
            x.ncols()
        );
        let w = ArrayView1::from(self.coefficients.as_slice());
        Ok(x.dot(&w) + self.intercept)
    }
}

// ─── Parameter Encoding ───────────────────────────────────────────────────────
mod param_repr {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    impl From<f64> for Repr {
        fn from(v: f64) -> Self {
            if v.is_finite() { Repr::Number(v) } else { Repr::Text(v.to_string()) }
        }
    }

    fn parse<E: de::Error>(repr: Repr) -> Result<f64, E> {
        match repr {
            Repr::Number(v) => Ok(v),
            Repr::Text(t) => t
                .parse()
                .map_err(|_| E::custom(format!("invalid model parameter '{t}'"))),
        }
    }

    pub fn serialize<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        Repr::from(*v).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        parse(Repr::deserialize(d)?)
    }

    pub mod seq {
        use super::{parse, Repr};
        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        pub fn serialize<S: Serializer>(v: &[f64], s: S) -> Result<S::Ok, S::Error> {
            let reprs: Vec<Repr> = v.iter().map(|&x| Repr::from(x)).collect();
            reprs.serialize(s)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<f64>, D::Error> {
            Vec::<Repr>::deserialize(d)?.into_iter().map(parse).collect()
        }
    }
}
