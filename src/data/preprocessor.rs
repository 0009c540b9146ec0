// ============================================================
// Layer 4 — Trip Preprocessor
// ============================================================
// Turns a loaded FeatureTable into model inputs.
//
// Steps (applied in order by the training use case):
//   1. Encode `store_and_fwd_flag` with the N/Y encoder
//   2. Encode `pickup_weekday` AND `dropoff_weekday` with ONE
//      weekday encoder, so "Monday" gets the same code in both
//   3. Split off `trip_duration` and take its natural log
//   4. Stack the remaining columns into the feature matrix
//
// The fitted encoders, the scaler and the feature column order
// are bundled into `Preprocessing`, which travels inside the
// model artifact and can replay the whole transform on a raw
// table later.

use anyhow::{bail, Context, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::data::encoder::{LabelEncoder, FLAG_DOMAIN, WEEKDAY_DOMAIN};
use crate::data::scaler::StandardScaler;
use crate::domain::table::{ColumnValues, FeatureTable};

pub const FLAG_COLUMN:            &str = "store_and_fwd_flag";
pub const PICKUP_WEEKDAY_COLUMN:  &str = "pickup_weekday";
pub const DROPOFF_WEEKDAY_COLUMN: &str = "dropoff_weekday";
pub const TARGET_COLUMN:          &str = "trip_duration";

/// Holds the two fitted label encoders.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    flag_encoder:    LabelEncoder,
    weekday_encoder: LabelEncoder,
}

impl Preprocessor {
    /// Fit both encoders on their fixed domains.
    pub fn new() -> Self {
        Self {
            flag_encoder:    LabelEncoder::fit(&FLAG_DOMAIN),
            weekday_encoder: LabelEncoder::fit(&WEEKDAY_DOMAIN),
        }
    }

    /// Replace the three categorical columns with their integer codes.
    pub fn encode(&self, table: &mut FeatureTable) -> Result<()> {
        encode_column(table, FLAG_COLUMN, &self.flag_encoder)?;
        encode_column(table, PICKUP_WEEKDAY_COLUMN, &self.weekday_encoder)?;
        encode_column(table, DROPOFF_WEEKDAY_COLUMN, &self.weekday_encoder)?;
        Ok(())
    }

    /// Bundle the encoders with a fitted scaler for the artifact.
    pub fn into_preprocessing(
        self,
        scaler:        StandardScaler,
        feature_names: Vec<String>,
    ) -> Preprocessing {
        Preprocessing {
            flag_encoder:    self.flag_encoder,
            weekday_encoder: self.weekday_encoder,
            scaler,
            feature_names,
            target: TARGET_COLUMN.to_string(),
        }
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove the target column and return `ln(target)`.
///
/// Non-positive durations are not checked: they come out as NaN
/// or -inf and surface later in the evaluation metric.
pub fn split_log_target(table: &mut FeatureTable, target: &str) -> Result<Array1<f64>> {
    let y = table
        .take_numeric(target)
        .with_context(|| format!("Target column '{target}' is required"))?;
    Ok(y.mapv(f64::ln))
}

fn encode_column(table: &mut FeatureTable, name: &str, encoder: &LabelEncoder) -> Result<()> {
    let column = table
        .column(name)
        .with_context(|| format!("Categorical column '{name}' is missing"))?;

    let codes = match &column.values {
        ColumnValues::Categorical(labels) => encoder
            .transform(labels)
            .with_context(|| format!("Cannot encode column '{name}'"))?,
        ColumnValues::Numeric(_) => bail!("Column '{name}' should hold labels, found numbers"),
    };

    table.replace(name, ColumnValues::Numeric(codes))
}

// ─── Preprocessing ────────────────────────────────────────────────────────────
/// Everything fitted before the model: encoders, scaler and the
/// order of the feature columns the model's weights refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preprocessing {
    pub flag_encoder:    LabelEncoder,
    pub weekday_encoder: LabelEncoder,
    pub scaler:          StandardScaler,
    pub feature_names:   Vec<String>,
    pub target:          String,
}

impl Preprocessing {
    /// Replay the training transform on a raw table.
    ///
    /// The target column is dropped if present. The remaining
    /// columns must match the training columns, in order.
    pub fn transform(&self, table: &FeatureTable) -> Result<Array2<f64>> {
        let mut table = table.clone();

        let preprocessor = Preprocessor {
            flag_encoder:    self.flag_encoder.clone(),
            weekday_encoder: self.weekday_encoder.clone(),
        };
        preprocessor.encode(&mut table)?;

        if table.column(&self.target).is_some() {
            table.take_numeric(&self.target)?;
        }

        let names = table.column_names();
        if names != self.feature_names {
            bail!(
                "Feature columns {:?} do not match the trained columns {:?}",
                names,
                self.feature_names
            );
        }

        let raw = table.to_matrix()?;
        self.scaler.transform(raw.view())
    }
}
