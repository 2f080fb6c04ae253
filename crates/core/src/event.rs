// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle events emitted by a run.
//!
//! Events are fire-and-forget: the [`crate::Event`] value is handed to a
//! notifier which must not block the emitter.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// The fixed set of lifecycle event names a run can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    #[serde(rename = "run.requested")]
    RunRequested,
    #[serde(rename = "run.started")]
    RunStarted,
    #[serde(rename = "run.success")]
    RunSuccess,
    #[serde(rename = "run.error")]
    RunError,
    #[serde(rename = "run.fail")]
    RunFail,
    #[serde(rename = "run.wait.error")]
    RunWaitError,
    #[serde(rename = "run.timeout")]
    RunTimeout,
    #[serde(rename = "run.probing")]
    RunProbing,
    #[serde(rename = "parse.context")]
    ParseContext,
}

impl EventName {
    pub fn as_str(self) -> &'static str {
        match self {
            EventName::RunRequested => "run.requested",
            EventName::RunStarted => "run.started",
            EventName::RunSuccess => "run.success",
            EventName::RunError => "run.error",
            EventName::RunFail => "run.fail",
            EventName::RunWaitError => "run.wait.error",
            EventName::RunTimeout => "run.timeout",
            EventName::RunProbing => "run.probing",
            EventName::ParseContext => "parse.context",
        }
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The data carried by an [`Event`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    /// Unique id for this specific event occurrence.
    pub event_uuid: Uuid,
    /// The step the event concerns, if any (preflights and probes are
    /// reported under their owning step's name).
    pub step: Option<String>,
    /// Free-form extras (exit codes, timeout durations, messages, ...).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extras: HashMap<String, String>,
}

impl EventPayload {
    pub fn new(step: Option<impl Into<String>>) -> Self {
        Self {
            event_uuid: Uuid::new_v4(),
            step: step.map(Into::into),
            extras: HashMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// A single lifecycle notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub name: EventName,
    pub payload: EventPayload,
}

impl Event {
    pub fn new(name: EventName, step: Option<impl Into<String>>) -> Self {
        Self {
            name,
            payload: EventPayload::new(step),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.payload = self.payload.with_extra(key, value);
        self
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "step={} event={}",
            self.payload.step.as_deref().unwrap_or("<workflow>"),
            self.name
        )
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
