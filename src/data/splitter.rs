// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Shuffles row indices with a SEEDED generator and splits them
// into a training and a validation partition:
//
//   n_val   = ceil(test_size * n)
//   n_train = n - n_val
//   val     = first n_val shuffled indices
//   train   = the rest
//
// Same rows + same seed + same test_size → same partition,
// every run. Features and targets are split with the same
// indices so rows stay aligned.
//
// Reference: rand crate documentation (SeedableRng, SliceRandom)

use anyhow::{ensure, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::data::dataset::TripDataset;

pub const DEFAULT_TEST_SIZE: f64 = 0.25;
pub const DEFAULT_SEED: u64 = 20;

/// Shuffle `0..n` with `seed` and split into (train, validation) indices.
pub fn split_indices(n: usize, test_size: f64, seed: u64) -> Result<(Vec<usize>, Vec<usize>)> {
    ensure!(
        test_size > 0.0 && test_size < 1.0,
        "test_size must be between 0 and 1, got {test_size}"
    );

    let n_val = ((n as f64) * test_size).ceil() as usize;
    ensure!(
        n_val < n,
        "Cannot split {n} rows with test_size {test_size}: no training rows left"
    );

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    // split_off(k) leaves [0..k] in `indices` and returns [k..]
    let train = indices.split_off(n_val);
    let val   = indices;

    tracing::debug!("Dataset split: {} training, {} validation", train.len(), val.len());

    Ok((train, val))
}

/// Split a dataset into (train, validation) partitions.
pub fn split_train_val(
    data:      &TripDataset,
    test_size: f64,
    seed:      u64,
) -> Result<(TripDataset, TripDataset)> {
    let (train_idx, val_idx) = split_indices(data.n_rows(), test_size, seed)?;
    Ok((data.select(&train_idx), data.select(&val_idx)))
}
