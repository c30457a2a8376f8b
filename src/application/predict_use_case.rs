// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// Loads the saved model once, then maps each configured input
// through it.

use anyhow::Result;
use std::path::PathBuf;

use crate::domain::traits::Predictor;
use crate::infra::checkpoint::ModelStore;
use crate::ml::inferencer::Inferencer;

#[derive(Debug, Clone)]
pub struct PredictConfig {
    pub model_dir:  String,
    pub model_name: String,
    pub inputs:     Vec<f32>,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            model_dir:  "model".to_string(),
            model_name: "my_best_model".to_string(),
            inputs:     vec![10.0],
        }
    }
}

impl PredictConfig {
    pub fn model_path(&self) -> PathBuf {
        PathBuf::from(&self.model_dir).join(&self.model_name)
    }
}

pub struct PredictUseCase {
    inputs:     Vec<f32>,
    inferencer: Inferencer,
}

impl PredictUseCase {
    pub fn new(config: PredictConfig) -> Result<Self> {
        let store = ModelStore::new(config.model_path());
        let (inferencer, manifest) = Inferencer::from_store(&store)?;
        tracing::info!(
            "Model trained for {} epochs at lr={} (final loss {:?})",
            manifest.epochs, manifest.train.learning_rate, manifest.final_loss,
        );
        Ok(Self { inputs: config.inputs, inferencer })
    }

    /// (input, prediction) pairs in input order.
    pub fn execute(&self) -> Result<Vec<(f32, f32)>> {
        self.inputs
            .iter()
            .map(|&x| {
                let y = self.inferencer.predict_one(x)?;
                tracing::info!("Prediction: f({}) = {:.4}", x, y);
                Ok((x, y))
            })
            .collect()
    }
}
