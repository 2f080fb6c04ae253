// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test-only notifier that records every event it receives, modeled on the
//! teacher repo's `FakeNotifyAdapter`.

use super::Notifier;
use crate::error::NotifyError;
use async_trait::async_trait;
use parking_lot::Mutex;
use spindle_core::{Event, EventName};
use std::sync::Arc;

#[derive(Debug, Default, Clone)]
pub struct FakeNotifier {
    events: Arc<Mutex<Vec<Event>>>,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn names_for_step(&self, step: &str) -> Vec<EventName> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.payload.step.as_deref() == Some(step))
            .map(|e| e.name)
            .collect()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn notify(&self, event: Event) -> Result<(), NotifyError> {
        self.events.lock().push(event);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
