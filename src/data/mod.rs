// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the CSV file on disk and the standardized
// feature matrix the linear model is fit on.
//
//   data_after_prep.csv
//       │
//       ▼
//   CsvTableLoader    → reads the file into a FeatureTable
//       │
//       ▼
//   Preprocessor      → label-encodes the categorical columns,
//       │               splits off ln(trip_duration)
//       ▼
//   StandardScaler    → zero mean / unit variance per column
//       │
//       ▼
//   split_train_val   → seeded 75/25 row split
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads the training table from CSV using polars
pub mod loader;

/// Label encoder over a fixed set of classes
pub mod encoder;

/// Per-column standardization
pub mod scaler;

/// Categorical encoding, target extraction and replayable transforms
pub mod preprocessor;

/// Row-aligned feature/target container
pub mod dataset;

/// Seeded train/validation split
pub mod splitter;
