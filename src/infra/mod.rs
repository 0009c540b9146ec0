// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Local stand-ins for the collaborators around the pipeline:
//
//   checkpoint.rs — the model artifact (model + preprocessing
//                   state + evaluation) and the store that
//                   writes it into the output directory
//
//   registry.rs   — resolves a model name to an artifact path
//                   for the scoring service
//
//   metrics.rs    — the run log: every run entry goes through
//                   tracing and into run_log.csv
//
// Reference: Rust Book §7 (Modules)

/// Model artifact saving and loading
pub mod checkpoint;

/// Name → artifact path lookup
pub mod registry;

/// Run tracking (tracing + CSV)
pub mod metrics;
