use anyhow::{ensure, Result};
use burn::{data::dataset::Dataset, prelude::*, tensor::TensorData};

use crate::domain::sample::Sample;

/// x values of the built-in training set
pub const DEFAULT_XS: [f32; 6] = [-1.0, 0.0, 1.0, 2.0, 3.0, 4.0];
/// y = 3x + 1 for every entry of `DEFAULT_XS`
pub const DEFAULT_YS: [f32; 6] = [-2.0, 1.0, 4.0, 7.0, 10.0, 13.0];

/// The (x, y) pairs a model is fitted against, kept in insertion order.
#[derive(Debug, Clone)]
pub struct RegressionDataset {
    samples: Vec<Sample>,
}

impl RegressionDataset {
    /// Wrap already-paired samples.
    pub fn new(samples: Vec<Sample>) -> Self { Self { samples } }

    /// Pair up two parallel columns. Fails when their lengths differ.
    pub fn from_columns(xs: &[f32], ys: &[f32]) -> Result<Self> {
        ensure!(
            xs.len() == ys.len(),
            "Shape mismatch: {} inputs but {} targets",
            xs.len(),
            ys.len()
        );
        // Columns are equal length here, so zip drops nothing
        let samples = xs.iter()
            .zip(ys)
            .map(|(&x, &y)| Sample::new(x, y))
            .collect();
        Ok(Self::new(samples))
    }

    /// The six points the `train` command fits.
    pub fn builtin() -> Result<Self> {
        Self::from_columns(&DEFAULT_XS, &DEFAULT_YS)
    }

    /// The input column, in sample order.
    pub fn xs(&self) -> Vec<f32> {
        self.samples.iter().map(|s| s.x).collect()
    }

    /// The target column, in sample order.
    pub fn ys(&self) -> Vec<f32> {
        self.samples.iter().map(|s| s.y).collect()
    }

    /// Inputs as a `[n, 1]` tensor, in sample order.
    pub fn inputs<B: Backend>(&self, device: &B::Device) -> Tensor<B, 2> {
        column_tensor(self.xs(), device)
    }

    /// Targets as a `[n, 1]` tensor, in sample order.
    pub fn targets<B: Backend>(&self, device: &B::Device) -> Tensor<B, 2> {
        column_tensor(self.ys(), device)
    }
}

impl Dataset<Sample> for RegressionDataset {
    fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

/// Build an `[n, 1]` float tensor from `n` scalars.
pub fn column_tensor<B: Backend>(values: Vec<f32>, device: &B::Device) -> Tensor<B, 2> {
    let n = values.len();
    // One row per sample, one feature column: [n, 1]
    Tensor::from_data(TensorData::new(values, [n, 1]), device)
}
