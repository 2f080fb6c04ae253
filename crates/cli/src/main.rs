// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! spindle - a DAG-shaped command runner.

mod doc;
mod parse;
mod run;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spindle", version, about = "Run DAG-shaped command workflows")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load, enrich, and execute a workflow document
    Run(run::RunArgs),
    /// Load and enrich a workflow document, emitting it as YAML
    Parse(parse::ParseArgs),
}

#[tokio::main]
async fn main() {
    init_tracing();

    let result = match Cli::parse().command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Parse(args) => parse::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
