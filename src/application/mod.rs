// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers. No numeric code and no
// printing here; only the order in which things happen.
//
//   train_use_case — data → encoders → scaler → split → OLS
//                    → evaluation → artifact
//   score_use_case — resolve + load the artifact once, then
//                    answer JSON requests
//
// Reference: Rust Book §7 (Module System)

// The training workflow
pub mod train_use_case;

// The scoring workflow
pub mod score_use_case;

#[cfg(test)]
pub(crate) mod fixtures;
