// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use spindle_core::EventName;

#[tokio::test]
async fn notify_never_errors() {
    let notifier = ConsoleNotifier;
    let event = Event::new(EventName::RunSuccess, Some("build"));
    notifier.notify(event).await.unwrap();
}
