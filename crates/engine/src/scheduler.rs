// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Workflow Scheduler: preflight gate, dynamic context builder, then a
//! bounded-concurrency topological execution loop (spec.md section 4.6).

use crate::context_builder_runtime::run_context_builder;
use crate::error::RuntimeError;
use crate::prompt::Prompter;
use crate::spinner::Spinner;
use crate::step_runtime::run_step;
use parking_lot::Mutex;
use spindle_adapters::Notifier;
use spindle_core::{CancelToken, SessionId, StepErrors, StepStatus};
use spindle_runbook::{enrich_preflight, Workflow};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Notify, Semaphore};
use tokio::task::JoinSet;

/// Options shaping one `Run` invocation, the in-process equivalent of the
/// spec's load `options` argument plus the scheduler-only `yes_to_all` flag.
pub struct RunOptions {
    pub concurrency: usize,
    pub yes_to_all: bool,
    pub notifier: Arc<dyn Notifier>,
    pub prompter: Arc<dyn Prompter>,
}

/// A loaded [`Workflow`] wrapped with the run-scoped concerns the original
/// spec's `Workflow` struct carries as fields (`sessionID`,
/// `concurrencySemaphore`, `stopFlag`): this crate keeps the document model
/// (`spindle_runbook::Workflow`) purely static and puts those concerns here
/// instead, since they belong to one `Run`, not to the parsed document.
pub struct WorkflowScheduler {
    workflow: Arc<Workflow>,
    options: RunOptions,
    session_id: SessionId,
    cancel: Arc<CancelToken>,
}

impl WorkflowScheduler {
    pub fn new(workflow: Workflow, options: RunOptions) -> Self {
        Self {
            workflow: Arc::new(workflow),
            options,
            session_id: SessionId::generate(),
            cancel: Arc::new(CancelToken::new()),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// A handle an external collaborator (e.g. a SIGINT handler) can use to
    /// cancel every in-flight and future command for this run (spec.md
    /// section 4.7: "an interrupt calls `workflow.stop`" is the cooperative
    /// `stop()` below; this handle is the stronger, process-killing lever
    /// spec.md section 5 calls "global" cancellation).
    pub fn cancel_handle(&self) -> Arc<CancelToken> {
        self.cancel.clone()
    }

    /// Runs preflights, then the context builder, then the main loop.
    /// Returns `Ok(None)` on total success, `Ok(Some(errors))` when at
    /// least one step failed fatally, `Err` on preflight/context-builder
    /// failure (neither of which launches any step).
    pub async fn run(&self) -> Result<Option<StepErrors>, RuntimeError> {
        self.run_preflights().await?;
        let dynamic_context = self.build_dynamic_context().await?;
        Ok(self.run_steps(Arc::new(dynamic_context)).await)
    }

    async fn run_preflights(&self) -> Result<(), RuntimeError> {
        for (step_name, preflight) in self.workflow.all_preflights() {
            let owner = match self.workflow.step(step_name) {
                Some(s) => s,
                None => continue,
            };
            let enriched = enrich_preflight(owner, preflight, &self.workflow.metadata).map_err(|source| {
                RuntimeError::PreflightEnrichment {
                    step: step_name.to_string(),
                    source,
                }
            })?;
            let timeout = preflight.timeout.unwrap_or(self.workflow.default_timeout);
            let spinner = Spinner::for_preflight(step_name, &enriched, Vec::new(), timeout).map_err(|source| {
                RuntimeError::Preflight {
                    step: step_name.to_string(),
                    source,
                }
            })?;

            tracing::debug!(step = step_name, "running preflight");
            if let Err(source) = spinner.run(self.options.notifier.as_ref(), &self.cancel, None).await {
                if let Some(message) = &enriched.message {
                    tracing::error!(step = step_name, message = %message, "preflight failed");
                }
                return Err(RuntimeError::Preflight {
                    step: step_name.to_string(),
                    source,
                });
            }
        }
        Ok(())
    }

    async fn build_dynamic_context(&self) -> Result<HashMap<String, String>, RuntimeError> {
        match &self.workflow.context_builder {
            Some(builder) => {
                run_context_builder(builder, self.workflow.default_timeout, self.options.notifier.as_ref(), &self.cancel)
                    .await
                    .map_err(RuntimeError::ContextBuilder)
            }
            None => Ok(HashMap::new()),
        }
    }

    async fn run_steps(&self, dynamic_context: Arc<HashMap<String, String>>) -> Option<StepErrors> {
        let workflow = self.workflow.clone();
        let n = workflow.steps.len();
        if n == 0 {
            return None;
        }

        let status = Arc::new(Mutex::new(vec![StepStatus::Unstarted; n]));
        let semaphore = Arc::new(Semaphore::new(self.options.concurrency.max(1)));
        let stop_flag = Arc::new(AtomicBool::new(false));
        let readiness = Arc::new(Notify::new());
        let step_errors = Arc::new(Mutex::new(StepErrors::new()));
        let mut tasks = JoinSet::new();

        loop {
            if stop_flag.load(Ordering::SeqCst) || self.cancel.is_cancelled() {
                break;
            }
            if status.lock().iter().all(|s| s.is_done()) {
                break;
            }

            match next_to_run(&workflow, &status) {
                Some(idx) => {
                    let permit = match semaphore.clone().acquire_owned().await {
                        Ok(p) => p,
                        Err(_) => break,
                    };
                    if stop_flag.load(Ordering::SeqCst) || self.cancel.is_cancelled() {
                        status.lock()[idx] = StepStatus::Unstarted;
                        drop(permit);
                        break;
                    }

                    tasks.spawn(run_one_step(
                        idx,
                        workflow.clone(),
                        dynamic_context.clone(),
                        self.options.notifier.clone(),
                        self.options.prompter.clone(),
                        self.options.yes_to_all,
                        self.cancel.clone(),
                        status.clone(),
                        stop_flag.clone(),
                        step_errors.clone(),
                        readiness.clone(),
                        permit,
                    ));
                }
                None => {
                    let notified = readiness.notified();
                    if status.lock().iter().all(|s| s.is_done())
                        || stop_flag.load(Ordering::SeqCst)
                        || self.cancel.is_cancelled()
                    {
                        continue;
                    }
                    notified.await;
                }
            }
        }

        while tasks.join_next().await.is_some() {}

        Arc::try_unwrap(step_errors)
            .map(|m| m.into_inner())
            .unwrap_or_default()
            .into_option()
    }
}

/// Scans steps in declaration order for the first `unstarted` step whose
/// dependencies are all `done`, atomically marking it `pending` so a
/// concurrent scan can't re-select it (spec.md section 4.6, `nextToRun`).
fn next_to_run(workflow: &Workflow, status: &Mutex<Vec<StepStatus>>) -> Option<usize> {
    let mut guard = status.lock();
    for (idx, step) in workflow.steps.iter().enumerate() {
        if guard[idx].is_unstarted() && step.depends_on_idx.iter().all(|&d| guard[d].is_done()) {
            guard[idx] = StepStatus::Pending;
            return Some(idx);
        }
    }
    None
}

#[allow(clippy::too_many_arguments)]
async fn run_one_step(
    idx: usize,
    workflow: Arc<Workflow>,
    dynamic_context: Arc<HashMap<String, String>>,
    notifier: Arc<dyn Notifier>,
    prompter: Arc<dyn Prompter>,
    yes_to_all: bool,
    cancel: Arc<CancelToken>,
    status: Arc<Mutex<Vec<StepStatus>>>,
    stop_flag: Arc<AtomicBool>,
    step_errors: Arc<Mutex<StepErrors>>,
    readiness: Arc<Notify>,
    _permit: tokio::sync::OwnedSemaphorePermit,
) {
    status.lock()[idx] = StepStatus::Running;
    let step = &workflow.steps[idx];

    if step.ask_to_proceed && !step.disabled && !yes_to_all && !prompter.confirm(&step.name).await {
        tracing::info!(step = %step.name, "operator declined, stopping");
        stop_flag.store(true, Ordering::SeqCst);
    } else if !stop_flag.load(Ordering::SeqCst) {
        let result = run_step(
            step,
            &workflow.metadata,
            &dynamic_context,
            workflow.default_timeout,
            notifier.as_ref(),
            &cancel,
        )
        .await;

        if let Err(e) = result {
            step_errors.lock().push(step.name.clone(), e.to_string());
            stop_flag.store(true, Ordering::SeqCst);
        }
    }

    status.lock()[idx] = StepStatus::Done;
    readiness.notify_waiters();
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
