#![recursion_limit = "256"]

mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // Our own events at info, framework chatter only from warn upwards.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("linreg=info".parse().unwrap())
                .add_directive("burn=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
