// ============================================================
// Layer 5 — Inferencer
// ============================================================
use anyhow::{ensure, Result};
use burn::prelude::*;

use crate::data::dataset::column_tensor;
use crate::domain::traits::Predictor;
use crate::infra::checkpoint::{ModelManifest, ModelStore};
use crate::ml::model::LinearRegression;

pub type InferBackend = burn::backend::NdArray;

pub struct Inferencer<B: Backend = InferBackend> {
    model:  LinearRegression<B>,
    device: B::Device,
}

impl Inferencer<InferBackend> {
    /// Load the saved model onto the CPU backend.
    pub fn from_store(store: &ModelStore) -> Result<(Self, ModelManifest)> {
        let device = Default::default();
        let (model, manifest) = store.load::<InferBackend>(&device)?;
        Ok((Self::from_model(model, device), manifest))
    }
}

impl<B: Backend> Inferencer<B> {
    pub fn from_model(model: LinearRegression<B>, device: B::Device) -> Self {
        Self { model, device }
    }
}

impl<B: Backend> Predictor for Inferencer<B> {
    fn predict(&self, inputs: &[f32]) -> Result<Vec<f32>> {
        ensure!(!inputs.is_empty(), "Nothing to predict: no input values given");

        let xs  = column_tensor::<B>(inputs.to_vec(), &self.device);
        let out = self.model.forward(xs);

        let values = out
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("Cannot read model output: {e:?}"))?;

        tracing::debug!("Predicted {} value(s)", values.len());
        Ok(values)
    }
}
