// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-buffered output sinks for a running process's stdout/stderr.
//!
//! Spec section 4.3: "Output writers must flush line-buffered (split on
//! `\n`, one log record per line, trailing `\n` stripped)".

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::Level;

/// Receives complete, newline-stripped lines from a child process stream.
pub trait OutputSink: Send + Sync {
    fn on_line(&self, line: &str);
}

/// Default sink: each line becomes one `tracing` record tagged with the
/// step name, at `debug` for stdout and `error` for stderr (spec section
/// 4.3, step 3).
pub struct TracingSink {
    step: String,
    level: Level,
}

impl TracingSink {
    pub fn new(step: impl Into<String>, level: Level) -> Self {
        Self {
            step: step.into(),
            level,
        }
    }
}

impl OutputSink for TracingSink {
    fn on_line(&self, line: &str) {
        match self.level {
            Level::ERROR => tracing::error!(step = %self.step, "{line}"),
            Level::WARN => tracing::warn!(step = %self.step, "{line}"),
            Level::INFO => tracing::info!(step = %self.step, "{line}"),
            Level::TRACE => tracing::trace!(step = %self.step, "{line}"),
            Level::DEBUG => tracing::debug!(step = %self.step, "{line}"),
        }
    }
}

/// Captures lines into an in-memory buffer. This is the override hook the
/// Dynamic Context Builder installs to capture a step's stdout instead of
/// logging it (spec section 4.5).
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins captured lines back with `\n`, matching the original
    /// newline-delimited stdout the process produced.
    pub fn contents(&self) -> String {
        self.lines.lock().join("\n")
    }
}

impl OutputSink for MemorySink {
    fn on_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
