// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A notifier that discards every event.

use super::Notifier;
use crate::error::NotifyError;
use async_trait::async_trait;
use spindle_core::Event;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpNotifier;

#[async_trait]
impl Notifier for NoOpNotifier {
    async fn notify(&self, _event: Event) -> Result<(), NotifyError> {
        Ok(())
    }
}
