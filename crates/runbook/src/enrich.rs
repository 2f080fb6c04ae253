// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step-time enrichment: resolves a [`Step`]'s templated/env-expanded
//! strings against the current workflow metadata and dynamic context
//! (spec section 4.2). Produces owned, ready-to-execute values without
//! mutating the statically-loaded `Step`.

use crate::error::LoadError;
use crate::preflight::Preflight;
use crate::step::Step;
use crate::template::{self, StepView};
use std::collections::HashMap;

/// The enriched, executable view of a step's command surface.
#[derive(Debug, Clone)]
pub struct EnrichedStep {
    pub name: String,
    pub command: String,
    pub workdir: Option<String>,
    pub probe_command: Option<String>,
    pub probe_workdir: Option<String>,
}

/// The enriched, executable view of one preflight.
#[derive(Debug, Clone)]
pub struct EnrichedPreflight {
    pub command: String,
    pub workdir: Option<String>,
    pub message: Option<String>,
}

fn step_view(step: &Step) -> StepView {
    StepView {
        name: step.name.clone(),
        command: step.command.clone(),
        workdir: step.workdir.clone().unwrap_or_default(),
        metadata: step.metadata.clone(),
    }
}

impl Step {
    /// Runs the two-pass enrichment (template, then env) over every
    /// templatable attribute of this step and its probe.
    pub fn enrich(
        &self,
        workflow_metadata: &HashMap<String, String>,
        dynamic_context: &HashMap<String, String>,
    ) -> Result<EnrichedStep, LoadError> {
        let view = step_view(self);
        let ctx = template::build_context(&view, workflow_metadata, dynamic_context);
        let field = |name: &'static str, value: &str| -> Result<String, LoadError> {
            template::enrich(value, &ctx).map_err(|source| LoadError::Template {
                step: self.name.clone(),
                field: name,
                source,
            })
        };

        let name = field("name", &self.name)?;
        let command = field("command", &self.command)?;
        let workdir = self
            .workdir
            .as_deref()
            .map(|w| field("workdir", w))
            .transpose()?;
        let (probe_command, probe_workdir) = match &self.probe {
            Some(probe) => {
                let cmd = field("probe.command", &probe.command)?;
                let wd = probe
                    .workdir
                    .as_deref()
                    .map(|w| field("probe.workdir", w))
                    .transpose()?;
                (Some(cmd), wd)
            }
            None => (None, None),
        };

        Ok(EnrichedStep {
            name,
            command,
            workdir,
            probe_command,
            probe_workdir,
        })
    }
}

/// Enriches one preflight against its owning step's raw fields (preflights
/// run before any step, and before the dynamic context builder, so only
/// the step's own static attributes and workflow metadata are in scope).
pub fn enrich_preflight(
    owner: &Step,
    preflight: &Preflight,
    workflow_metadata: &HashMap<String, String>,
) -> Result<EnrichedPreflight, LoadError> {
    let view = step_view(owner);
    let ctx = template::build_context(&view, workflow_metadata, &HashMap::new());
    let field = |name: &'static str, value: &str| -> Result<String, LoadError> {
        template::enrich(value, &ctx).map_err(|source| LoadError::Template {
            step: owner.name.clone(),
            field: name,
            source,
        })
    };

    let command = field("preflights[].command", &preflight.command)?;
    let workdir = preflight
        .workdir
        .as_deref()
        .map(|w| field("preflights[].workdir", w))
        .transpose()?;
    let message = preflight
        .message
        .as_deref()
        .map(|m| field("preflights[].message", m))
        .transpose()?;

    Ok(EnrichedPreflight {
        command,
        workdir,
        message,
    })
}

#[cfg(test)]
#[path = "enrich_tests.rs"]
mod tests;
