// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run-time errors: everything that can go wrong after a [`spindle_runbook::Workflow`]
//! has loaded successfully.

use std::time::Duration;
use thiserror::Error;

/// Errors from one [`crate::spinner::Spinner::run`] invocation.
#[derive(Debug, Error)]
pub enum SpinnerError {
    #[error("empty argv for {0:?}")]
    EmptyArgv(String),
    #[error("command parse error: {0}")]
    CommandParse(#[from] spindle_runbook::LoadError),
    #[error("failed to start process: {0}")]
    Start(#[source] std::io::Error),
    #[error("wait error: {0}")]
    Wait(#[source] std::io::Error),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("cancelled")]
    Cancelled,
    #[error("exited with {0}")]
    NonZeroExit(std::process::ExitStatus),
}

impl SpinnerError {
    /// The exit code carried in the `run.fail` event's extras, `-1` when
    /// the failure has no process exit status of its own.
    pub fn exit_code(&self) -> i32 {
        match self {
            SpinnerError::NonZeroExit(status) => status.code().unwrap_or(-1),
            _ => -1,
        }
    }
}

/// Errors from running one step (main command, enrichment, probe).
#[derive(Debug, Error)]
pub enum StepRunError {
    #[error("enrichment failed: {0}")]
    Enrichment(#[from] spindle_runbook::LoadError),
    #[error("step failed: {0}")]
    Main(#[source] SpinnerError),
    #[error("probe failed: {0}")]
    Probe(#[source] SpinnerError),
}

/// Errors from the dynamic context builder.
#[derive(Debug, Error)]
pub enum ContextBuilderError {
    #[error("context builder failed: {0}")]
    Run(#[source] SpinnerError),
    #[error("failed to parse context builder output as {format}: {source}")]
    Parse {
        format: &'static str,
        #[source]
        source: ContextParseError,
    },
}

#[derive(Debug, Error)]
pub enum ContextParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors from the workflow scheduler's `Run`.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("preflight {step:?} enrichment failed: {source}")]
    PreflightEnrichment {
        step: String,
        #[source]
        source: spindle_runbook::LoadError,
    },
    #[error("preflight {step:?} failed: {source}")]
    Preflight {
        step: String,
        #[source]
        source: SpinnerError,
    },
    #[error("dynamic context builder failed: {0}")]
    ContextBuilder(#[source] ContextBuilderError),
}
