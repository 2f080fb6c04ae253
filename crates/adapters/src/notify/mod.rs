// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification adapters: the pluggable sink for lifecycle events (spec
//! section 2, "Event Bus").

mod console;
mod noop;

pub use console::ConsoleNotifier;
pub use noop::NoOpNotifier;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeNotifier;

use crate::error::NotifyError;
use async_trait::async_trait;
use spindle_core::Event;

/// Receives lifecycle events. Implementations must not block the emitter
/// (spec section 3: "consumers must be non-blocking or absorb
/// backpressure").
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    async fn notify(&self, event: Event) -> Result<(), NotifyError>;
}
