// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Command Runner: runs one external process with timeout, env, workdir,
//! and output writers, emitting the fixed lifecycle event sequence.

use crate::error::SpinnerError;
use spindle_adapters::subprocess::{build_command, spawn, wait_with_timeout, SpawnError, WaitOutcome};
use spindle_adapters::writer::{OutputSink, TracingSink};
use spindle_adapters::Notifier;
use spindle_core::{CancelToken, Event, EventName};
use spindle_runbook::{validate::split_command, EnrichedPreflight, EnrichedStep};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

/// Runs one external command exactly once, per the four construction
/// variants a Step needs (main command, preflight, probe, context builder).
pub struct Spinner {
    step: String,
    argv: Vec<String>,
    workdir: Option<String>,
    env: Vec<String>,
    timeout: Duration,
}

impl Spinner {
    fn new(
        step: impl Into<String>,
        command: &str,
        workdir: Option<String>,
        env: Vec<String>,
        timeout: Duration,
    ) -> Result<Self, SpinnerError> {
        let step = step.into();
        let argv = split_command(&step, command)?;
        Ok(Self {
            step,
            argv,
            workdir,
            env,
            timeout,
        })
    }

    pub fn for_step(enriched: &EnrichedStep, env: Vec<String>, timeout: Duration) -> Result<Self, SpinnerError> {
        Self::new(
            enriched.name.clone(),
            &enriched.command,
            enriched.workdir.clone(),
            env,
            timeout,
        )
    }

    /// `enriched.probe_command` must be `Some`; only called when the step
    /// declares a probe.
    pub fn for_probe(enriched: &EnrichedStep, env: Vec<String>, timeout: Duration) -> Result<Self, SpinnerError> {
        let command = enriched
            .probe_command
            .as_deref()
            .ok_or_else(|| SpinnerError::EmptyArgv(enriched.name.clone()))?;
        Self::new(enriched.name.clone(), command, enriched.probe_workdir.clone(), env, timeout)
    }

    pub fn for_preflight(
        step_name: &str,
        enriched: &EnrichedPreflight,
        env: Vec<String>,
        timeout: Duration,
    ) -> Result<Self, SpinnerError> {
        Self::new(step_name, &enriched.command, enriched.workdir.clone(), env, timeout)
    }

    pub fn for_context_builder(
        command: &str,
        workdir: Option<String>,
        env: Vec<String>,
        timeout: Duration,
    ) -> Result<Self, SpinnerError> {
        Self::new("<workflow>", command, workdir, env, timeout)
    }

    /// The split argv, for `show_command` (spec.md "SUPPLEMENTED FEATURES":
    /// the fully argv-split command, not the raw string, is what gets
    /// logged).
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub async fn run(
        &self,
        notifier: &dyn Notifier,
        cancel: &CancelToken,
        stdout_override: Option<Arc<dyn OutputSink>>,
    ) -> Result<(), SpinnerError> {
        let _ = notifier
            .notify(Event::new(EventName::RunRequested, Some(self.step.clone())))
            .await;

        let stdout_sink: Arc<dyn OutputSink> =
            stdout_override.unwrap_or_else(|| Arc::new(TracingSink::new(self.step.clone(), Level::DEBUG)));
        let stderr_sink: Arc<dyn OutputSink> = Arc::new(TracingSink::new(self.step.clone(), Level::ERROR));

        let cmd = build_command(&self.argv, self.workdir.as_deref().map(Path::new), &self.env)
            .map_err(|_: SpawnError| SpinnerError::EmptyArgv(self.step.clone()))?;

        let (mut child, streams) = match spawn(cmd, stdout_sink, stderr_sink) {
            Ok(spawned) => spawned,
            Err(SpawnError::Start(e)) => {
                let _ = notifier
                    .notify(Event::new(EventName::RunError, Some(self.step.clone())).with_extra("error", e.to_string()))
                    .await;
                return Err(SpinnerError::Start(e));
            }
            Err(SpawnError::EmptyArgv) => return Err(SpinnerError::EmptyArgv(self.step.clone())),
        };

        let _ = notifier
            .notify(Event::new(EventName::RunStarted, Some(self.step.clone())))
            .await;

        let outcome = wait_with_timeout(&mut child, self.timeout, cancel).await;
        streams.join().await;

        match outcome {
            Err(e) => {
                let _ = notifier
                    .notify(
                        Event::new(EventName::RunWaitError, Some(self.step.clone()))
                            .with_extra("error", e.to_string()),
                    )
                    .await;
                Err(SpinnerError::Wait(e))
            }
            Ok(WaitOutcome::Success) => {
                let _ = notifier
                    .notify(Event::new(EventName::RunSuccess, Some(self.step.clone())))
                    .await;
                Ok(())
            }
            Ok(WaitOutcome::NonZero(status)) => {
                let err = SpinnerError::NonZeroExit(status);
                let _ = notifier
                    .notify(
                        Event::new(EventName::RunFail, Some(self.step.clone()))
                            .with_extra("exit_code", err.exit_code().to_string()),
                    )
                    .await;
                Err(err)
            }
            Ok(WaitOutcome::TimedOut) => {
                let _ = notifier
                    .notify(
                        Event::new(EventName::RunTimeout, Some(self.step.clone()))
                            .with_extra("timeout", format!("{:?}", self.timeout)),
                    )
                    .await;
                Err(SpinnerError::Timeout(self.timeout))
            }
            Ok(WaitOutcome::Cancelled) => {
                let _ = notifier
                    .notify(
                        Event::new(EventName::RunWaitError, Some(self.step.clone()))
                            .with_extra("reason", "cancelled"),
                    )
                    .await;
                Err(SpinnerError::Cancelled)
            }
        }
    }
}

#[cfg(test)]
#[path = "spinner_tests.rs"]
mod tests;
