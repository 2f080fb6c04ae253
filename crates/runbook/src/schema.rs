// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw, on-the-wire shape of a workflow document (YAML, JSON-compatible).
//!
//! These types mirror spec section 6 literally; they carry no resolved
//! references or defaults beyond what `serde(default)` fills in. The
//! [`crate::loader`] module turns a [`WorkflowDoc`] into a validated
//! [`crate::workflow::Workflow`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggerDoc {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreflightDoc {
    pub command: String,
    #[serde(default)]
    pub workdir: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, with = "humantime_serde::option")]
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeDoc {
    pub command: String,
    #[serde(default)]
    pub workdir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextBuilderDoc {
    pub command: String,
    #[serde(default)]
    pub workdir: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default, with = "humantime_serde::option")]
    pub timeout: Option<Duration>,
    #[serde(default)]
    pub env: Vec<String>,
    #[serde(default)]
    pub fail_context: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepDoc {
    pub name: String,
    pub command: String,
    #[serde(default)]
    pub workdir: Option<String>,
    #[serde(default)]
    pub env: Vec<String>,
    #[serde(default, with = "humantime_serde::option")]
    pub timeout: Option<Duration>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub preflights: Vec<PreflightDoc>,
    #[serde(default)]
    pub probe: Option<ProbeDoc>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub continue_on_fail: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub ask_to_proceed: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub show_command: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(default)]
    pub logger: Option<LoggerDoc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowDoc {
    pub version: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub logger: Option<LoggerDoc>,
    #[serde(default)]
    pub context_builder: Option<ContextBuilderDoc>,
    #[serde(default)]
    pub steps: Vec<StepDoc>,
}

/// The only version this loader accepts.
pub const SUPPORTED_VERSION: &str = "1";

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
