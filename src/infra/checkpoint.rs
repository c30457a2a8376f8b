// ============================================================
// Layer 6 — Model Store
// ============================================================
// Saves and restores the trained model.
//
// What gets written for an artifact path `model/my_best_model`:
//   model/my_best_model.mpk   ← weight + bias, full f32 precision
//   model/my_best_model.json  ← ModelManifest (architecture + run info)
//
// The manifest is read first on load so the architecture can be
// rebuilt before the record is poured into it.
//
// Only a known artifact extension (.h5, .mpk, .json) is stripped from
// the path given to the store; `model/run.v1` keeps its full name and
// becomes `model/run.v1.mpk` + `model/run.v1.json`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use burn::{
    prelude::*,
    record::{FullPrecisionSettings, NamedMpkFileRecorder, Recorder},
};

use crate::application::train_use_case::TrainConfig;
use crate::ml::model::{LinearRegression, LinearRegressionConfig};

type ModelRecorder = NamedMpkFileRecorder<FullPrecisionSettings>;

/// Extensions that already name an artifact file and are dropped from the stem
const ARTIFACT_EXTENSIONS: [&str; 3] = ["h5", "mpk", "json"];

/// Everything besides the weights needed to reuse a saved model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelManifest {
    /// Architecture to rebuild before loading the record
    pub model:      LinearRegressionConfig,

    /// The training configuration the weights came from
    pub train:      TrainConfig,

    /// Epochs actually run
    pub epochs:     usize,

    /// MSE of the last epoch, `None` when no epoch ran
    pub final_loss: Option<f64>,
}

pub struct ModelStore {
    /// Artifact path without its artifact extension
    stem: PathBuf,
}

impl ModelStore {
    /// A trailing `.h5`, `.mpk` or `.json` on `path` is dropped; any other
    /// dot in the file name is part of the name.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let is_artifact = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| ARTIFACT_EXTENSIONS.contains(&e));

        let stem = if is_artifact { path.with_extension("") } else { path };
        Self { stem }
    }

    /// `<stem>.mpk`, where the weights live.
    pub fn record_path(&self) -> PathBuf {
        self.artifact_file("mpk")
    }

    /// `<stem>.json`, where the manifest lives.
    pub fn manifest_path(&self) -> PathBuf {
        self.artifact_file("json")
    }

    /// Append `.ext` to the full file name (never replacing part of it).
    fn artifact_file(&self, ext: &str) -> PathBuf {
        let mut name = self.stem.clone().into_os_string();
        name.push(".");
        name.push(ext);
        PathBuf::from(name)
    }

    /// True only when both the record and the manifest are on disk.
    pub fn exists(&self) -> bool {
        self.record_path().is_file() && self.manifest_path().is_file()
    }

    /// Write the record and its manifest, creating parent directories first.
    pub fn save<B: Backend>(
        &self,
        model:    &LinearRegression<B>,
        manifest: &ModelManifest,
    ) -> Result<PathBuf> {
        if let Some(parent) = self.stem.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create model directory '{}'", parent.display()))?;
        }

        if self.exists() {
            tracing::info!("Replacing existing model at '{}'", self.stem.display());
        }

        let record_path = self.record_path();
        ModelRecorder::new()
            .record(model.clone().into_record(), record_path.clone())
            .with_context(|| {
                format!("Failed to save model to '{}'", record_path.display())
            })?;

        let manifest_path = self.manifest_path();
        fs::write(&manifest_path, serde_json::to_string_pretty(manifest)?)
            .with_context(|| format!("Cannot write manifest '{}'", manifest_path.display()))?;

        tracing::info!("Model saved to '{}'", record_path.display());
        Ok(record_path)
    }

    /// Rebuild the model described by the manifest and load its weights.
    pub fn load<B: Backend>(&self, device: &B::Device) -> Result<(LinearRegression<B>, ModelManifest)> {
        let manifest = self.load_manifest()?;
        let model: LinearRegression<B> = manifest.model.init(device);

        let record_path = self.record_path();
        let record = ModelRecorder::new()
            .load(record_path.clone(), device)
            .with_context(|| {
                format!("Cannot load model '{}'. Have you run 'train' first?",
                    record_path.display())
            })?;

        tracing::info!("Model loaded from '{}'", record_path.display());
        Ok((model.load_record(record), manifest))
    }

    /// Read and parse `<stem>.json` without touching the weights.
    pub fn load_manifest(&self) -> Result<ModelManifest> {
        read_manifest(&self.manifest_path())
    }
}

fn read_manifest(path: &Path) -> Result<ModelManifest> {
    let json = fs::read_to_string(path)
        .with_context(|| {
            format!(
                "Cannot read manifest '{}'. Have you run 'train' first?",
                path.display()
            )
        })?;

    serde_json::from_str(&json)
        .with_context(|| format!("Manifest '{}' is corrupt", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use crate::ml::model::create_model;

    type B = NdArray;

    fn manifest() -> ModelManifest {
        ModelManifest {
            model:      LinearRegressionConfig::new(),
            train:      TrainConfig::default(),
            epochs:     0,
            final_loss: None,
        }
    }

    #[test]
    fn test_paths_share_a_stem() {
        let store = ModelStore::new("model/my_best_model.h5");
        assert_eq!(store.record_path(), PathBuf::from("model/my_best_model.mpk"));
        assert_eq!(store.manifest_path(), PathBuf::from("model/my_best_model.json"));
    }

    #[test]
    fn test_dotted_names_keep_their_own_files() {
        let v1 = ModelStore::new("model/run.v1");
        let v2 = ModelStore::new("model/run.v2");
        assert_ne!(v1.record_path(), v2.record_path());
        assert_eq!(v1.record_path(), PathBuf::from("model/run.v1.mpk"));
        assert_eq!(v2.manifest_path(), PathBuf::from("model/run.v2.json"));

        // A known artifact extension is still dropped after the dotted part
        let h5 = ModelStore::new("model/run.v1.h5");
        assert_eq!(h5.record_path(), PathBuf::from("model/run.v1.mpk"));
    }

    #[test]
    fn test_dotted_names_do_not_overwrite_each_other() {
        let tmp    = tempfile::tempdir().unwrap();
        let device = Default::default();
        let v1     = ModelStore::new(tmp.path().join("run.v1"));
        let v2     = ModelStore::new(tmp.path().join("run.v2"));

        v1.save(&create_model::<B>(&device), &ModelManifest { epochs: 1, ..manifest() }).unwrap();
        v2.save(&create_model::<B>(&device), &ModelManifest { epochs: 2, ..manifest() }).unwrap();

        assert_eq!(v1.load_manifest().unwrap().epochs, 1);
        assert_eq!(v2.load_manifest().unwrap().epochs, 2);
    }

    #[test]
    fn test_manifest_carries_train_config() {
        let tmp   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(tmp.path().join("model"));
        let train = TrainConfig { epochs: 42, learning_rate: 0.05, ..TrainConfig::default() };

        store.save(&create_model::<B>(&Default::default()), &ModelManifest { train, ..manifest() }).unwrap();
        let loaded = store.load_manifest().unwrap();

        assert_eq!(loaded.train.epochs, 42);
        assert_eq!(loaded.train.learning_rate, 0.05);
        assert_eq!(loaded.train.model_name, "my_best_model");
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let tmp   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(tmp.path().join("a/b/model"));
        let model = create_model::<B>(&Default::default());

        store.save(&model, &manifest()).unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_round_trip_keeps_parameters() {
        let tmp    = tempfile::tempdir().unwrap();
        let store  = ModelStore::new(tmp.path().join("model"));
        let device = Default::default();
        let model  = create_model::<B>(&device);

        store.save(&model, &manifest()).unwrap();
        let (loaded, m) = store.load::<B>(&device).unwrap();

        assert_eq!(loaded.weight(), model.weight());
        assert_eq!(loaded.bias(), model.bias());
        assert_eq!(m.model.d_input, 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let tmp   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(tmp.path().join("nonexistent.h5"));
        assert!(!store.exists());
        assert!(store.load::<B>(&Default::default()).is_err());
    }

    #[test]
    fn test_missing_record_is_an_error() {
        let tmp   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(tmp.path().join("model"));
        store.save(&create_model::<B>(&Default::default()), &manifest()).unwrap();
        fs::remove_file(store.record_path()).unwrap();

        assert!(store.load::<B>(&Default::default()).is_err());
    }

    #[test]
    fn test_corrupt_manifest_is_an_error() {
        let tmp   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(tmp.path().join("model"));
        fs::write(store.manifest_path(), "not json").unwrap();

        let err = store.load::<B>(&Default::default()).unwrap_err();
        assert!(format!("{err:#}").contains("corrupt"));
    }
}
