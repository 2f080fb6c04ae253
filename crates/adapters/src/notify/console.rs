// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default notifier: logs each event via `tracing`.

use super::Notifier;
use crate::error::NotifyError;
use async_trait::async_trait;
use spindle_core::Event;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, event: Event) -> Result<(), NotifyError> {
        tracing::info!(
            step = event.payload.step.as_deref().unwrap_or("<workflow>"),
            event = %event.name,
            "{}",
            event
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
