// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn generated_session_id_is_eight_hex_chars() {
    let id = SessionId::generate();
    assert_eq!(id.as_str().len(), 8);
    assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generated_session_ids_differ() {
    let a = SessionId::generate();
    let b = SessionId::generate();
    // Not a hard guarantee, but collision probability is ~1/4 billion.
    assert_ne!(a, b);
}

#[test]
fn display_matches_as_str() {
    let id = SessionId::new("deadbeef");
    assert_eq!(id.to_string(), "deadbeef");
    assert_eq!(id, "deadbeef");
}
