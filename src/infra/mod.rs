// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
//   checkpoint.rs — writes/reads the model record and its JSON
//                   manifest with burn's NamedMpkFileRecorder
//   metrics.rs    — per-epoch loss CSV

/// Model record + manifest persistence
pub mod checkpoint;

/// Training metrics CSV logger
pub mod metrics;
