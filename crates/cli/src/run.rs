// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `spindle run` - load, enrich, and execute a workflow document (spec.md
//! section 6).

use anyhow::{bail, Context, Result};
use clap::Args;
use spindle_adapters::notify::ConsoleNotifier;
use spindle_engine::{RunOptions, StdinPrompter, WorkflowScheduler};
use spindle_runbook::{load, LoadOptions};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

fn parse_duration(s: &str) -> Result<Duration, humantime::DurationError> {
    humantime::parse_duration(s)
}

#[derive(Args)]
pub struct RunArgs {
    /// Workflow document to load, or `-` for stdin
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Default timeout a step/preflight inherits when it declares none
    #[arg(long, value_parser = parse_duration, default_value = "10s")]
    timeout: Duration,

    /// Maximum number of steps running at once
    #[arg(long, default_value_t = 4)]
    concurrency: usize,

    /// Answer every `ask_to_proceed` prompt as yes
    #[arg(long)]
    yes: bool,
}

pub async fn execute(args: RunArgs) -> Result<()> {
    let result = run(args).await;
    match &result {
        Ok(()) => tracing::info!("Done"),
        Err(e) => tracing::error!("Done with errors: {e}"),
    }
    result
}

async fn run(args: RunArgs) -> Result<()> {
    let bytes = crate::doc::read(&args.file)?;
    let options = LoadOptions {
        default_timeout: args.timeout,
    };
    let workflow = load(&bytes, &options).context("failed to load workflow")?;

    let scheduler = WorkflowScheduler::new(
        workflow,
        RunOptions {
            concurrency: args.concurrency,
            yes_to_all: args.yes,
            notifier: Arc::new(ConsoleNotifier),
            prompter: Arc::new(StdinPrompter),
        },
    );
    tracing::info!(session_id = %scheduler.session_id(), "starting run");

    let cancel = scheduler.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, stopping");
            cancel.cancel();
        }
    });

    match scheduler.run().await {
        Ok(None) => Ok(()),
        Ok(Some(errors)) => bail!(errors),
        Err(e) => Err(e).context("run failed"),
    }
}
