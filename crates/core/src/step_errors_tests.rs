// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn empty_accumulator_collapses_to_none() {
    let errors = StepErrors::new();
    assert!(errors.is_empty());
    assert!(errors.into_option().is_none());
}

#[test]
fn non_empty_accumulator_reports_each_step() {
    let mut errors = StepErrors::new();
    errors.push("a", "boom");
    errors.push("b", "also boom");
    assert_eq!(errors.len(), 2);
    let message = errors.to_string();
    assert!(message.contains("a: boom"));
    assert!(message.contains("b: also boom"));
    assert!(errors.into_option().is_some());
}
