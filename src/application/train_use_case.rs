// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Runs the training pipeline in order:
//
//   Step 1: Build the built-in dataset    (Layer 4 - data)
//   Step 2: Create the untrained model    (Layer 5 - ml)
//   Step 3: Fit it with full-batch SGD    (Layer 5 - ml)
//   Step 4: Save record + manifest        (Layer 6 - infra)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use burn::backend::{Autodiff, NdArray};

use crate::data::dataset::RegressionDataset;
use crate::infra::{
    checkpoint::{ModelManifest, ModelStore},
    metrics::MetricsLogger,
};
use crate::ml::{
    model::{create_model, LinearRegression, LinearRegressionConfig},
    trainer::{fit, TrainingHistory},
};

type TrainBackend = Autodiff<NdArray>;

// ─── Training Configuration ──────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub model_dir:     String,
    pub model_name:    String,
    pub epochs:        usize,
    pub learning_rate: f64,
    pub log_every:     usize,
    pub write_metrics: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            model_dir:     "model".to_string(),
            model_name:    "my_best_model".to_string(),
            epochs:        500,
            learning_rate: 0.01,
            log_every:     100,
            write_metrics: false,
        }
    }
}

impl TrainConfig {
    /// `<model_dir>/<model_name>`, extension added by the store.
    pub fn model_path(&self) -> PathBuf {
        PathBuf::from(&self.model_dir).join(&self.model_name)
    }
}

/// What a finished training run produced.
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub artifact:   PathBuf,
    pub weight:     f32,
    pub bias:       f32,
    pub final_loss: f64,
    pub history:    TrainingHistory,
}

pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    /// Create a new TrainUseCase with the given configuration
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Train on the built-in six points and save the result.
    pub fn execute(&self) -> Result<TrainReport> {
        self.execute_on(&RegressionDataset::builtin()?)
    }

    /// Same pipeline as `execute` on caller-supplied data.
    pub fn execute_on(&self, dataset: &RegressionDataset) -> Result<TrainReport> {
        let cfg    = &self.config;
        let device = Default::default();

        // ── Step 2: Untrained model (the factory uses the default 1 → 1 config) ──
        let model_cfg = LinearRegressionConfig::new();
        let model: LinearRegression<TrainBackend> = create_model(&device);
        tracing::info!("Model ready: {} -> {} linear unit", model_cfg.d_input, model_cfg.d_output);

        let metrics = if cfg.write_metrics {
            let logger = MetricsLogger::new(&cfg.model_dir)?;
            tracing::info!("Writing per-epoch loss to '{}'", logger.csv_path().display());
            Some(logger)
        } else {
            None
        };

        // ── Step 3: Full-batch SGD ──────────────────────────────────────────────
        let (model, history) = fit(model, dataset, cfg, metrics.as_ref(), &device)?;

        // ── Step 4: Record + manifest ───────────────────────────────────────────
        let store    = ModelStore::new(cfg.model_path());
        let manifest = ModelManifest {
            model:      model_cfg,
            train:      cfg.clone(),
            epochs:     history.epochs(),
            final_loss: history.final_loss(),
        };
        let artifact = store.save(&model, &manifest)?;

        Ok(TrainReport {
            artifact,
            weight:     model.weight(),
            bias:       model.bias(),
            final_loss: history.final_loss().unwrap_or(f64::NAN),
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> TrainConfig {
        TrainConfig {
            model_dir: dir.join("model").to_string_lossy().into_owned(),
            ..TrainConfig::default()
        }
    }

    #[test]
    fn test_defaults_match_the_cli() {
        let cfg = TrainConfig::default();
        assert_eq!(cfg.epochs, 500);
        assert_eq!(cfg.model_path(), PathBuf::from("model/my_best_model"));
    }

    #[test]
    fn test_execute_writes_artifact() {
        let tmp    = tempfile::tempdir().unwrap();
        let report = TrainUseCase::new(config_in(tmp.path())).execute().unwrap();

        assert!(report.artifact.is_file());
        assert_eq!(report.history.epochs(), 500);
        assert!((report.weight - 3.0).abs() < 0.5, "w = {}", report.weight);
        assert!((report.bias - 1.0).abs() < 0.5, "b = {}", report.bias);
    }

    #[test]
    fn test_saved_manifest_records_the_run_config() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = TrainConfig { epochs: 30, learning_rate: 0.02, ..config_in(tmp.path()) };
        TrainUseCase::new(cfg.clone()).execute().unwrap();

        let manifest = ModelStore::new(cfg.model_path()).load_manifest().unwrap();
        assert_eq!(manifest.epochs, 30);
        assert_eq!(manifest.train.learning_rate, 0.02);
        assert_eq!(manifest.train.model_dir, cfg.model_dir);
    }

    #[test]
    fn test_metrics_csv_has_one_row_per_epoch() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = TrainConfig { epochs: 25, write_metrics: true, ..config_in(tmp.path()) };
        TrainUseCase::new(cfg.clone()).execute().unwrap();

        let csv = std::fs::read_to_string(PathBuf::from(&cfg.model_dir).join("metrics.csv")).unwrap();
        assert_eq!(csv.lines().count(), 26);
    }
}
