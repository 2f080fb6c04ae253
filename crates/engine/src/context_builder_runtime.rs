// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dynamic Context Builder execution: runs its command with stdout captured
//! into memory, then parses the result as JSON or YAML (spec.md section 4.5).

use crate::error::{ContextBuilderError, ContextParseError};
use crate::spinner::Spinner;
use spindle_adapters::writer::MemorySink;
use spindle_adapters::Notifier;
use spindle_core::{CancelToken, Event, EventName};
use spindle_runbook::{ContextFormat, DynamicContextBuilder};
use std::collections::HashMap;
use std::sync::Arc;

/// Runs `builder`, returning the parsed context map on success, its
/// `fail_context` fallback on a tolerated failure, or the error when
/// neither applies.
pub async fn run_context_builder(
    builder: &DynamicContextBuilder,
    default_timeout: std::time::Duration,
    notifier: &dyn Notifier,
    cancel: &CancelToken,
) -> Result<HashMap<String, String>, ContextBuilderError> {
    let timeout = builder.timeout.unwrap_or(default_timeout);
    let spinner = Spinner::for_context_builder(&builder.command, builder.workdir.clone(), builder.env.clone(), timeout)
        .map_err(ContextBuilderError::Run)?;

    let sink = Arc::new(MemorySink::new());
    let result = spinner.run(notifier, cancel, Some(sink.clone())).await;

    match result {
        Ok(()) => {
            let _ = notifier
                .notify(Event::new(EventName::ParseContext, Some("<workflow>")))
                .await;
            parse_context(builder.format, &sink.contents())
        }
        Err(e) => match &builder.fail_context {
            Some(fallback) => {
                tracing::warn!(error = %e, "context builder failed, using fail_context fallback");
                Ok(fallback.clone())
            }
            None => Err(ContextBuilderError::Run(e)),
        },
    }
}

fn parse_context(format: ContextFormat, contents: &str) -> Result<HashMap<String, String>, ContextBuilderError> {
    match format {
        ContextFormat::Json => serde_json::from_str(contents)
            .map_err(ContextParseError::from)
            .map_err(|source| ContextBuilderError::Parse { format: "json", source }),
        ContextFormat::Yaml => serde_yaml::from_str(contents)
            .map_err(ContextParseError::from)
            .map_err(|source| ContextBuilderError::Parse { format: "yaml", source }),
    }
}

#[cfg(test)]
#[path = "context_builder_runtime_tests.rs"]
mod tests;
