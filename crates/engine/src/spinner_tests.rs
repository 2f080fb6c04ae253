// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use spindle_adapters::notify::FakeNotifier;
use spindle_adapters::writer::MemorySink;
use spindle_core::EventName;
use std::time::Duration;

fn enriched(command: &str) -> EnrichedStep {
    EnrichedStep {
        name: "a".to_string(),
        command: command.to_string(),
        workdir: None,
        probe_command: None,
        probe_workdir: None,
    }
}

#[tokio::test]
async fn successful_run_emits_requested_started_success() {
    let spinner = Spinner::for_step(&enriched("true"), Vec::new(), Duration::from_secs(5)).unwrap();
    let notifier = FakeNotifier::new();
    let cancel = CancelToken::new();
    spinner.run(&notifier, &cancel, None).await.unwrap();
    assert_eq!(
        notifier.names_for_step("a"),
        vec![EventName::RunRequested, EventName::RunStarted, EventName::RunSuccess]
    );
}

#[tokio::test]
async fn failing_run_emits_fail_with_exit_code() {
    let spinner = Spinner::for_step(&enriched("false"), Vec::new(), Duration::from_secs(5)).unwrap();
    let notifier = FakeNotifier::new();
    let cancel = CancelToken::new();
    let err = spinner.run(&notifier, &cancel, None).await.unwrap_err();
    assert!(matches!(err, SpinnerError::NonZeroExit(_)));
    assert_eq!(
        notifier.names_for_step("a"),
        vec![EventName::RunRequested, EventName::RunStarted, EventName::RunFail]
    );
    let events = notifier.events();
    let fail = events.iter().find(|e| e.name == EventName::RunFail).unwrap();
    assert!(fail.payload.extras.contains_key("exit_code"));
}

#[tokio::test]
async fn timeout_kills_and_emits_timeout() {
    let spinner = Spinner::for_step(&enriched("sleep 5"), Vec::new(), Duration::from_millis(100)).unwrap();
    let notifier = FakeNotifier::new();
    let cancel = CancelToken::new();
    let err = spinner.run(&notifier, &cancel, None).await.unwrap_err();
    assert!(matches!(err, SpinnerError::Timeout(_)));
    assert_eq!(
        notifier.names_for_step("a"),
        vec![EventName::RunRequested, EventName::RunStarted, EventName::RunTimeout]
    );
}

#[tokio::test]
async fn stdout_override_captures_into_memory_sink() {
    let spinner = Spinner::for_step(&enriched("echo hello"), Vec::new(), Duration::from_secs(5)).unwrap();
    let notifier = FakeNotifier::new();
    let cancel = CancelToken::new();
    let sink = Arc::new(MemorySink::new());
    spinner.run(&notifier, &cancel, Some(sink.clone())).await.unwrap();
    assert_eq!(sink.contents(), "hello");
}

#[tokio::test]
async fn start_failure_emits_run_error() {
    let spinner = Spinner::for_step(&enriched("/no/such/binary-at-all"), Vec::new(), Duration::from_secs(5)).unwrap();
    let notifier = FakeNotifier::new();
    let cancel = CancelToken::new();
    let err = spinner.run(&notifier, &cancel, None).await.unwrap_err();
    assert!(matches!(err, SpinnerError::Start(_)));
    assert_eq!(notifier.names_for_step("a"), vec![EventName::RunRequested, EventName::RunError]);
}

#[tokio::test]
async fn global_cancellation_kills_the_child() {
    let spinner = Spinner::for_step(&enriched("sleep 5"), Vec::new(), Duration::from_secs(30)).unwrap();
    let notifier = FakeNotifier::new();
    let cancel = CancelToken::new();
    cancel.cancel();
    let err = spinner.run(&notifier, &cancel, None).await.unwrap_err();
    assert!(matches!(err, SpinnerError::Cancelled));
}
