// ============================================================
// Layer 3 — FeatureTable Domain Type
// ============================================================
// An in-memory table of trips, loaded once per training run.
// Columns keep their file order; each one is either numeric
// or categorical (string labels not yet encoded).
//
// Example:
//   store_and_fwd_flag | pickup_weekday | distance | trip_duration
//   "N"                | "Monday"       | 2.31     | 455.0
//
// Reference: Rust Book §6 (Enums), §8 (Collections)

use anyhow::{bail, Context, Result};
use ndarray::{Array1, Array2};

/// The values held by one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Numeric(v)     => v.len(),
            ColumnValues::Categorical(v) => v.len(),
        }
    }
}

/// One named column of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name:   String,
    pub values: ColumnValues,
}

impl Column {
    pub fn numeric(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values: ColumnValues::Numeric(values) }
    }

    pub fn categorical(name: impl Into<String>, values: Vec<String>) -> Self {
        Self { name: name.into(), values: ColumnValues::Categorical(values) }
    }
}

/// A rectangular table of trips.
///
/// Every column has the same number of rows; `new` refuses
/// anything else so the rest of the pipeline can index freely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureTable {
    columns: Vec<Column>,
}

impl FeatureTable {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let rows = first.values.len();
            for col in &columns[1..] {
                if col.values.len() != rows {
                    bail!(
                        "Column '{}' has {} rows, expected {}",
                        col.name,
                        col.values.len(),
                        rows
                    );
                }
            }
        }
        Ok(Self { columns })
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Replace a column's values in place, keeping its position.
    pub fn replace(&mut self, name: &str, values: ColumnValues) -> Result<()> {
        let rows = self.n_rows();
        if values.len() != rows {
            bail!("Replacement for '{}' has {} rows, expected {}", name, values.len(), rows);
        }
        let col = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .with_context(|| format!("Column '{name}' not found"))?;
        col.values = values;
        Ok(())
    }

    /// Remove a numeric column and return its values as a vector.
    pub fn take_numeric(&mut self, name: &str) -> Result<Array1<f64>> {
        let idx = self
            .columns
            .iter()
            .position(|c| c.name == name)
            .with_context(|| format!("Column '{name}' not found"))?;

        let column = self.columns.remove(idx);
        match column.values {
            ColumnValues::Numeric(v) => Ok(Array1::from(v)),
            values @ ColumnValues::Categorical(_) => {
                // put it back untouched
                self.columns.insert(idx, Column { name: column.name, values });
                bail!("Column '{name}' is not numeric")
            }
        }
    }

    /// Stack all columns into a row-major `[rows, columns]` matrix.
    /// Fails if any column is still categorical.
    pub fn to_matrix(&self) -> Result<Array2<f64>> {
        let rows = self.n_rows();
        let cols = self.columns.len();
        let mut matrix = Array2::<f64>::zeros((rows, cols));

        for (j, col) in self.columns.iter().enumerate() {
            let values = match &col.values {
                ColumnValues::Numeric(v) => v,
                ColumnValues::Categorical(_) => {
                    bail!("Column '{}' is not numeric; encode it first", col.name)
                }
            };
            for (i, v) in values.iter().enumerate() {
                matrix[(i, j)] = *v;
            }
        }

        Ok(matrix)
    }
}
