// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step execution: enrichment, main-command Spinner, optional probe,
//! continue-on-fail policy (spec.md section 4.4).

use crate::error::StepRunError;
use crate::spinner::Spinner;
use spindle_adapters::Notifier;
use spindle_core::{CancelToken, Event, EventName};
use spindle_runbook::Step;
use std::collections::HashMap;
use std::time::Duration;

/// Runs one step to completion: enrichment always propagates; the main
/// command and probe are each subject to `continue_on_fail`.
pub async fn run_step(
    step: &Step,
    workflow_metadata: &HashMap<String, String>,
    dynamic_context: &HashMap<String, String>,
    default_timeout: Duration,
    notifier: &dyn Notifier,
    cancel: &CancelToken,
) -> Result<(), StepRunError> {
    if step.disabled {
        tracing::info!(step = %step.name, "skipping disabled step");
        return Ok(());
    }

    let enriched = step.enrich(workflow_metadata, dynamic_context)?;
    let timeout = step.effective_timeout(default_timeout);

    let spinner = Spinner::for_step(&enriched, step.env.clone(), timeout).map_err(StepRunError::Main)?;

    if step.show_command {
        tracing::info!(step = %enriched.name, argv = ?spinner.argv(), "running command");
    }

    if let Err(e) = spinner.run(notifier, cancel, None).await {
        if step.continue_on_fail {
            tracing::error!(step = %enriched.name, error = %e, "step failed, continuing");
        } else {
            return Err(StepRunError::Main(e));
        }
    }

    if enriched.probe_command.is_some() {
        let _ = notifier
            .notify(Event::new(EventName::RunProbing, Some(enriched.name.clone())))
            .await;
        let probe = Spinner::for_probe(&enriched, step.env.clone(), timeout).map_err(StepRunError::Probe)?;
        if let Err(e) = probe.run(notifier, cancel, None).await {
            if step.continue_on_fail {
                tracing::error!(step = %enriched.name, error = %e, "probe failed, continuing");
            } else {
                return Err(StepRunError::Probe(e));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "step_runtime_tests.rs"]
mod tests;
