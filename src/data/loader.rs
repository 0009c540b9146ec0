// ============================================================
// Layer 4 — Table Loader
// ============================================================
// Loads the preprocessed trip table from a CSV file with polars.
//
// polars infers a dtype per column. We collapse those dtypes
// into the two kinds the domain knows about:
//   String columns            → ColumnValues::Categorical
//   everything else (ints,
//   floats, booleans)         → cast to f64, ColumnValues::Numeric
//
// Nulls are rejected here; the rest of the pipeline assumes a
// dense table.
//
// Reference: polars crate documentation (CsvReadOptions)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::path::{Path, PathBuf};

use crate::domain::table::{Column, FeatureTable};
use crate::domain::traits::TableSource;

/// File name the training job expects inside `--data-folder`.
pub const DATA_FILE_NAME: &str = "data_after_prep.csv";

/// Loads a FeatureTable from a CSV file with a header row.
/// Implements the TableSource trait from Layer 3.
pub struct CsvTableLoader {
    path: PathBuf,
}

impl CsvTableLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loader for `<folder>/data_after_prep.csv`
    pub fn in_folder(folder: impl AsRef<Path>) -> Self {
        Self::new(folder.as_ref().join(DATA_FILE_NAME))
    }
}

impl TableSource for CsvTableLoader {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<FeatureTable> {
        if !self.path.is_file() {
            bail!("Data file '{}' does not exist", self.path.display());
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(self.path.clone()))
            .with_context(|| format!("Cannot open '{}'", self.path.display()))?
            .finish()
            .with_context(|| format!("Cannot parse CSV '{}'", self.path.display()))?;

        tracing::debug!("Read {} rows x {} columns", df.height(), df.width());

        let columns = df
            .get_columns()
            .iter()
            .map(series_to_column)
            .collect::<Result<Vec<_>>>()?;

        FeatureTable::new(columns)
    }
}

/// Convert one polars Series into a domain Column.
fn series_to_column(series: &Series) -> Result<Column> {
    let name = series.name().to_string();

    if series.dtype() == &DataType::String {
        let values = series
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                v.map(str::to_string)
                    .with_context(|| format!("Null value in column '{name}' at row {row}"))
            })
            .collect::<Result<Vec<_>>>()?;
        return Ok(Column::categorical(name, values));
    }

    let floats = series
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{name}' cannot be read as a number"))?;
    let values = floats
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.with_context(|| format!("Null value in column '{name}' at row {row}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Column::numeric(name, values))
}
