// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits: no burn tensors, no file I/O.

// One (x, y) observation
pub mod sample;

// Core abstractions that the ml layer implements
pub mod traits;
