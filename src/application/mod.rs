// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: no tensor math, no printing.

// Build data, fit, save
pub mod train_use_case;

// Load, predict
pub mod predict_use_case;
