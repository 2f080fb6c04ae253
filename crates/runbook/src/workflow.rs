// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The loaded, validated workflow: a DAG of steps plus workflow-level
//! metadata and an optional dynamic context builder.

use crate::context_builder::DynamicContextBuilder;
use crate::schema::LoggerDoc;
use crate::step::Step;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Workflow {
    pub version: String,
    pub metadata: HashMap<String, String>,
    pub steps: Vec<Step>,
    pub logger: Option<LoggerDoc>,
    pub context_builder: Option<DynamicContextBuilder>,
    /// The workflow-wide default timeout a step/preflight inherits when it
    /// declares none of its own.
    pub default_timeout: Duration,
}

impl Workflow {
    pub fn step_index(&self, name: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.name == name)
    }

    pub fn step(&self, name: &str) -> Option<&Step> {
        self.step_index(name).map(|i| &self.steps[i])
    }

    /// All preflights across all steps, in workflow declaration order then
    /// per-step declaration order (spec section 4.6, step 1).
    pub fn all_preflights(&self) -> Vec<(&str, &crate::preflight::Preflight)> {
        self.steps
            .iter()
            .flat_map(|s| s.preflights.iter().map(move |p| (s.name.as_str(), p)))
            .collect()
    }

    /// Re-serializes the workflow back into document form, for the
    /// `spindle parse` verb (spec section 6): "load and enrich the
    /// workflow, then emit the enriched document as YAML".
    pub fn to_doc(&self) -> crate::schema::WorkflowDoc {
        crate::schema::WorkflowDoc {
            version: self.version.clone(),
            metadata: self.metadata.clone(),
            logger: self.logger.clone(),
            context_builder: self.context_builder.as_ref().map(|cb| cb.to_doc()),
            steps: self.steps.iter().map(Step::to_doc).collect(),
        }
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
