// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn parses_minimal_document() {
    let yaml = r#"
version: "1"
steps:
  - name: a
    command: "echo A"
"#;
    let doc: WorkflowDoc = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(doc.version, "1");
    assert_eq!(doc.steps.len(), 1);
    assert_eq!(doc.steps[0].name, "a");
    assert!(!doc.steps[0].continue_on_fail);
}

#[test]
fn parses_full_document() {
    let yaml = r#"
version: "1"
metadata:
  owner: platform
context_builder:
  command: "cat vars.json"
  format: json
  fail_context:
    region: unknown
steps:
  - name: build
    command: "make build"
    workdir: /tmp
    env: ["FOO=bar"]
    timeout: 30s
    depends_on: []
    continue_on_fail: true
    ask_to_proceed: true
    show_command: true
    disabled: false
    preflights:
      - command: "which make"
        message: "need make"
    probe:
      command: "make check"
"#;
    let doc: WorkflowDoc = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(doc.metadata.get("owner").map(String::as_str), Some("platform"));
    let step = &doc.steps[0];
    assert_eq!(step.timeout, Some(std::time::Duration::from_secs(30)));
    assert!(step.continue_on_fail);
    assert_eq!(step.preflights.len(), 1);
    assert!(step.probe.is_some());
    let cb = doc.context_builder.unwrap();
    assert_eq!(cb.format.as_deref(), Some("json"));
    assert_eq!(cb.fail_context.unwrap().get("region").map(String::as_str), Some("unknown"));
}
