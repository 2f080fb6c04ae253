// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn empty_string_passes_through() {
    let ctx = Context::new();
    assert_eq!(render("", &ctx).unwrap(), "");
    assert_eq!(expand_env(""), "");
}

#[test]
fn template_substitutes_step_fields() {
    let step = StepView {
        name: "build".to_string(),
        command: "make".to_string(),
        workdir: "/repo".to_string(),
        metadata: HashMap::new(),
    };
    let ctx = build_context(&step, &HashMap::new(), &HashMap::new());
    let out = render("running {{ step.name }} in {{ step.workdir }}", &ctx).unwrap();
    assert_eq!(out, "running build in /repo");
}

#[test]
fn dynamic_context_is_flattened_into_top_level() {
    let step = StepView::default();
    let mut dyn_ctx = HashMap::new();
    dyn_ctx.insert("region".to_string(), "us-east-1".to_string());
    let ctx = build_context(&step, &HashMap::new(), &dyn_ctx);
    assert_eq!(render("{{ region }}", &ctx).unwrap(), "us-east-1");
}

#[test]
fn env_pass_runs_after_template_pass() {
    std::env::set_var("SPINDLE_TEMPLATE_TEST_VAR", "resolved");
    let step = StepView {
        name: "SPINDLE_TEMPLATE_TEST_VAR".to_string(),
        ..Default::default()
    };
    let ctx = build_context(&step, &HashMap::new(), &HashMap::new());
    // The template emits a `$VAR` reference; only the env pass resolves it.
    let templated = render("${{ step.name }}", &ctx).unwrap();
    assert_eq!(templated, "$SPINDLE_TEMPLATE_TEST_VAR");
    assert_eq!(expand_env(&templated), "resolved");
    std::env::remove_var("SPINDLE_TEMPLATE_TEST_VAR");
}

#[test]
fn unresolved_env_var_becomes_empty_string() {
    std::env::remove_var("SPINDLE_DEFINITELY_UNSET_VAR");
    assert_eq!(expand_env("$SPINDLE_DEFINITELY_UNSET_VAR"), "");
}
