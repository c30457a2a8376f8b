// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Full-batch gradient descent with burn's SGD optimiser:
// every epoch runs one forward pass over all samples, takes
// the MSE, back-propagates and applies a single SGD step.
// No shuffling, no mini-batches, no early stopping.

use anyhow::{ensure, Result};
use burn::{
    data::dataset::Dataset,
    optim::{GradientsParams, Optimizer, SgdConfig},
    prelude::*,
    tensor::backend::AutodiffBackend,
};

use crate::application::train_use_case::TrainConfig;
use crate::data::dataset::RegressionDataset;
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::model::LinearRegression;

/// Loss of every epoch, in order.
#[derive(Debug, Clone, Default)]
pub struct TrainingHistory {
    pub losses: Vec<f64>,
}

impl TrainingHistory {
    pub fn epochs(&self) -> usize {
        self.losses.len()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

pub fn fit<B: AutodiffBackend>(
    mut model: LinearRegression<B>,
    dataset:   &RegressionDataset,
    cfg:       &TrainConfig,
    metrics:   Option<&MetricsLogger>,
    device:    &B::Device,
) -> Result<(LinearRegression<B>, TrainingHistory)> {
    ensure!(!dataset.is_empty(), "Cannot train on an empty dataset");

    let inputs  = dataset.inputs::<B>(device);
    let targets = dataset.targets::<B>(device);

    let mut optim   = SgdConfig::new().init();
    let mut history = TrainingHistory { losses: Vec::with_capacity(cfg.epochs) };

    tracing::info!(
        "Training on {} samples for {} epochs (lr={})",
        dataset.len(), cfg.epochs, cfg.learning_rate,
    );

    for epoch in 1..=cfg.epochs {
        let loss = model.forward_loss(inputs.clone(), targets.clone());
        let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();

        let grads = loss.backward();
        let grads = GradientsParams::from_grads(grads, &model);
        model = optim.step(cfg.learning_rate, model, grads);

        history.losses.push(loss_val);
        tracing::debug!("Epoch {:>4}/{} | loss={:.6}", epoch, cfg.epochs, loss_val);

        if cfg.log_every > 0 && epoch % cfg.log_every == 0 {
            tracing::info!("Epoch {:>4}/{} | loss={:.6}", epoch, cfg.epochs, loss_val);
        }

        if let Some(logger) = metrics {
            logger.log(&EpochMetrics::new(epoch, loss_val))?;
        }
    }

    tracing::info!(
        "Training complete: w={:.4} b={:.4}",
        model.weight(), model.bias(),
    );
    Ok((model, history))
}
