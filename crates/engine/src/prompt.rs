// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive "proceed?" confirmation for steps with `ask_to_proceed` set
//! (spec.md section 4.6, scheduler goroutine step b). Kept behind a trait so
//! the scheduler never touches stdin directly in tests.

use async_trait::async_trait;
use std::io::Write;

#[async_trait]
pub trait Prompter: Send + Sync + 'static {
    async fn confirm(&self, step: &str) -> bool;
}

/// Reads y/n from stdin, one retry on an unrecognized answer, defaulting to
/// "no" (i.e. stop) if stdin can't be read or the retry is also unrecognized.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompter;

#[async_trait]
impl Prompter for StdinPrompter {
    async fn confirm(&self, step: &str) -> bool {
        for _ in 0..2 {
            print!("proceed with step {step:?}? [y/n] ");
            if std::io::stdout().flush().is_err() {
                return false;
            }
            let mut line = String::new();
            if std::io::stdin().read_line(&mut line).is_err() {
                return false;
            }
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => continue,
            }
        }
        false
    }
}

#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompter(pub bool);

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl Prompter for FixedPrompter {
    async fn confirm(&self, _step: &str) -> bool {
        self.0
    }
}
