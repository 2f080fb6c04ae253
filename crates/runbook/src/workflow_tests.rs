// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::loader::{load, LoadOptions};
use std::time::Duration;

fn opts() -> LoadOptions {
    LoadOptions {
        default_timeout: Duration::from_secs(5),
    }
}

#[test]
fn round_trip_through_doc_and_yaml_is_idempotent() {
    let yaml = r#"
version: "1"
metadata:
  owner: platform
steps:
  - name: a
    command: "echo A"
  - name: b
    command: "echo B"
    depends_on: [a]
"#;
    let wf = load(yaml.as_bytes(), &opts()).unwrap();
    let doc = wf.to_doc();
    let reserialized = serde_yaml::to_string(&doc).unwrap();
    let wf2 = load(reserialized.as_bytes(), &opts()).unwrap();
    assert_eq!(wf.steps.len(), wf2.steps.len());
    assert_eq!(wf.metadata, wf2.metadata);
    assert_eq!(wf2.step("b").unwrap().depends_on_idx, vec![0]);
}
