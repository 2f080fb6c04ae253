// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reads a workflow document from a file or, via the `-` sentinel, stdin
//! (spec.md section 6: "File sentinel `-` means stdin").

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

pub fn read(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read workflow document from stdin")?;
        Ok(buf)
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}
