// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with `clap` and hands off to Layer 2.
//
// Two commands are supported:
//   1. `train`   — fits the model and writes the artifact
//   2. `predict` — loads the artifact and runs a forward pass

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PredictArgs, TrainArgs};

#[derive(Parser, Debug)]
#[command(
    name = "linreg",
    version = "0.1.0",
    about = "Fit y = 3x + 1 with a one-unit linear model, save it, load it, predict."
)]
pub struct Cli {
    /// The subcommand to run (train or predict)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args)   => run_train(args),
            Commands::Predict(args) => run_predict(args),
        }
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;

    let use_case = TrainUseCase::new(args.into());
    let report   = use_case.execute()?;

    println!(
        "Training complete after {} epochs: w={:.4} b={:.4} loss={:.6}",
        report.history.epochs(), report.weight, report.bias, report.final_loss,
    );
    println!("Model saved as: {}", report.artifact.display());
    Ok(())
}

fn run_predict(args: PredictArgs) -> Result<()> {
    use crate::application::predict_use_case::PredictUseCase;

    let use_case    = PredictUseCase::new(args.into())?;
    let predictions = use_case.execute()?;

    for (x, y) in predictions {
        println!("Prediction: f({x}) = {y:.4}");
    }
    Ok(())
}
