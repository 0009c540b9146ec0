// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits that describe the pipeline:
// what a table of trips IS, how a run is tracked, where a
// model comes from. No polars, no linfa, no file I/O here.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A loaded table of trips with named, typed columns
pub mod table;

// Typed errors for the per-request scoring path
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
