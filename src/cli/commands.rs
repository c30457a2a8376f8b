// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `predict`
// and all their configurable flags. Every flag has a default,
// so both commands run with no arguments at all.

use clap::{Args, Subcommand};
use crate::application::predict_use_case::PredictConfig;
use crate::application::train_use_case::TrainConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fit the linear model on the built-in y = 3x + 1 points and save it
    Train(TrainArgs),

    /// Load a saved model and predict y for one or more x values
    Predict(PredictArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Directory the model artifact is written to (created if absent)
    #[arg(long, default_value = "model")]
    pub model_dir: String,

    /// File stem of the artifact; `.mpk` and `.json` are appended
    #[arg(long, default_value = "my_best_model")]
    pub model_name: String,

    /// Number of full-batch gradient descent passes
    #[arg(long, default_value_t = 500)]
    pub epochs: usize,

    /// SGD step size
    #[arg(long, default_value_t = 0.01)]
    pub lr: f64,

    /// Emit an info-level progress line every N epochs
    #[arg(long, default_value_t = 100)]
    pub log_every: usize,

    /// Also write per-epoch loss to <model-dir>/metrics.csv
    #[arg(long)]
    pub metrics: bool,
}

impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            model_dir:     a.model_dir,
            model_name:    a.model_name,
            epochs:        a.epochs,
            learning_rate: a.lr,
            log_every:     a.log_every,
            write_metrics: a.metrics,
        }
    }
}

/// All arguments for the `predict` command
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Directory the model artifact was saved to
    #[arg(long, default_value = "model")]
    pub model_dir: String,

    /// File stem used when the model was saved
    #[arg(long, default_value = "my_best_model")]
    pub model_name: String,

    /// Input value(s) to run through the model
    #[arg(long = "input", num_args = 1.., default_values_t = [10.0_f32], allow_negative_numbers = true)]
    pub inputs: Vec<f32>,
}

impl From<PredictArgs> for PredictConfig {
    fn from(a: PredictArgs) -> Self {
        PredictConfig {
            model_dir:  a.model_dir,
            model_name: a.model_name,
            inputs:     a.inputs,
        }
    }
}
