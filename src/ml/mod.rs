// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All tensor code lives here.
//
//   model.rs      — LinearRegression: one dense 1 → 1 unit,
//                   plus its MSE loss
//   trainer.rs    — full-batch SGD loop returning the trained
//                   model and its loss history
//   inferencer.rs — wraps a loaded model and answers
//                   predictions on the CPU backend

/// One-unit linear model and its config
pub mod model;

/// Full-batch SGD training loop
pub mod trainer;

/// Prediction on a loaded model
pub mod inferencer;
