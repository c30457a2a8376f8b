// ============================================================
// Layer 3 — Core Traits
// ============================================================

use anyhow::Result;

// ─── Predictor ────────────────────────────────────────────────────────────────
/// Anything that maps scalar inputs to scalar outputs.
///
/// Implementations:
///   - Inferencer → runs the loaded burn model
pub trait Predictor {
    /// One output per input, in the same order.
    /// An empty input slice is an error.
    fn predict(&self, inputs: &[f32]) -> Result<Vec<f32>>;

    /// Convenience for the single-value case.
    fn predict_one(&self, x: f32) -> Result<f32> {
        let out = self.predict(&[x])?;
        out.first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Model returned no output for input {x}"))
    }
}
