// ============================================================
// Layer 4 — Data
// ============================================================
// The training data is six hard-coded points on y = 3x + 1.
// `RegressionDataset` holds them, implements burn's Dataset
// trait, and stacks them into `[n, 1]` tensors for a
// full-batch forward pass.

/// Sample storage, the built-in dataset and tensor conversion
pub mod dataset;
