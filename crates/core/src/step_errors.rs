// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-error accumulator for fatal step failures.
//!
//! The scheduler keeps running already-launched steps after a fatal
//! failure; it needs to report every fatal error at the end of the run,
//! not just the first one. `StepErrors` is the Rust-idiomatic stand-in for
//! a Go multierror: non-empty iff at least one step propagated a fatal
//! error out of its run.

use std::fmt;

/// One step's fatal failure, named so the aggregate error message stays
/// attributable.
#[derive(Debug, Clone)]
pub struct StepError {
    pub step: String,
    pub message: String,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.step, self.message)
    }
}

/// Accumulates fatal step errors across a run.
#[derive(Debug, Clone, Default)]
pub struct StepErrors {
    errors: Vec<StepError>,
}

impl StepErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: impl Into<String>, message: impl Into<String>) {
        self.errors.push(StepError {
            step: step.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepError> {
        self.errors.iter()
    }

    /// Returns `None` when no step failed fatally; otherwise the
    /// aggregate, matching spec section 4.6's "non-nil iff at least one
    /// step failed fatally" rule.
    pub fn into_option(self) -> Option<Self> {
        if self.errors.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl fmt::Display for StepErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{} step(s) failed: {}", self.errors.len(), joined)
    }
}

impl std::error::Error for StepErrors {}

#[cfg(test)]
#[path = "step_errors_tests.rs"]
mod tests;
