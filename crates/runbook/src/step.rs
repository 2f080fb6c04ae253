// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved step: a [`crate::schema::StepDoc`] with `depends_on` names
//! resolved to indices into the owning workflow's step list.

use crate::preflight::Preflight;
use crate::probe::Probe;
use crate::schema::{LoggerDoc, StepDoc};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Step {
    pub name: String,
    pub command: String,
    pub workdir: Option<String>,
    pub env: Vec<String>,
    pub timeout: Option<Duration>,
    /// Names as declared in the document, preserved for error messages and
    /// `parse` round-tripping.
    pub depends_on: Vec<String>,
    /// Indices into the owning [`crate::workflow::Workflow::steps`],
    /// resolved once at load time.
    pub depends_on_idx: Vec<usize>,
    pub preflights: Vec<Preflight>,
    pub probe: Option<Probe>,
    pub metadata: HashMap<String, String>,
    pub continue_on_fail: bool,
    pub ask_to_proceed: bool,
    pub show_command: bool,
    pub disabled: bool,
    pub logger: Option<LoggerDoc>,
}

impl Step {
    pub(crate) fn from_doc(doc: StepDoc) -> Result<Self, crate::error::LoadError> {
        let probe = doc.probe.map(Probe::from_doc);
        let preflights = doc
            .preflights
            .into_iter()
            .map(Preflight::from_doc)
            .collect();
        Ok(Self {
            name: doc.name,
            command: doc.command,
            workdir: doc.workdir,
            env: doc.env,
            timeout: doc.timeout,
            depends_on: doc.depends_on,
            depends_on_idx: Vec::new(),
            preflights,
            probe,
            metadata: doc.metadata,
            continue_on_fail: doc.continue_on_fail,
            ask_to_proceed: doc.ask_to_proceed,
            show_command: doc.show_command,
            disabled: doc.disabled,
            logger: doc.logger,
        })
    }

    /// Effective timeout for the step's main command: its own if set, else
    /// the workflow default.
    pub fn effective_timeout(&self, workflow_default: Duration) -> Duration {
        self.timeout.unwrap_or(workflow_default)
    }

    pub fn to_doc(&self) -> StepDoc {
        StepDoc {
            name: self.name.clone(),
            command: self.command.clone(),
            workdir: self.workdir.clone(),
            env: self.env.clone(),
            timeout: self.timeout,
            depends_on: self.depends_on.clone(),
            preflights: self.preflights.iter().map(Preflight::to_doc).collect(),
            probe: self.probe.as_ref().map(Probe::to_doc),
            metadata: self.metadata.clone(),
            continue_on_fail: self.continue_on_fail,
            ask_to_proceed: self.ask_to_proceed,
            show_command: self.show_command,
            disabled: self.disabled,
            logger: self.logger.clone(),
        }
    }
}
