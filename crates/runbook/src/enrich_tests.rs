// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::loader::{load, LoadOptions};
use std::time::Duration;

fn opts() -> LoadOptions {
    LoadOptions {
        default_timeout: Duration::from_secs(5),
    }
}

#[test]
fn enriches_command_and_probe_with_dynamic_context() {
    let yaml = r#"
version: "1"
steps:
  - name: deploy
    command: "deploy {{ region }}"
    probe:
      command: "check {{ region }}"
"#;
    let wf = load(yaml.as_bytes(), &opts()).unwrap();
    let step = wf.step("deploy").unwrap();
    let mut dyn_ctx = HashMap::new();
    dyn_ctx.insert("region".to_string(), "us-east-1".to_string());
    let enriched = step.enrich(&wf.metadata, &dyn_ctx).unwrap();
    assert_eq!(enriched.command, "deploy us-east-1");
    assert_eq!(enriched.probe_command.as_deref(), Some("check us-east-1"));
}

#[test]
fn preflight_enrichment_uses_owning_step_context_only() {
    let yaml = r#"
version: "1"
steps:
  - name: build
    command: "make"
    preflights:
      - command: "which {{ step.name }}"
        message: "need {{ step.name }}"
"#;
    let wf = load(yaml.as_bytes(), &opts()).unwrap();
    let step = wf.step("build").unwrap();
    let enriched = enrich_preflight(step, &step.preflights[0], &wf.metadata).unwrap();
    assert_eq!(enriched.command, "which build");
    assert_eq!(enriched.message.as_deref(), Some("need build"));
}
