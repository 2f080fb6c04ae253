// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Preflights: gating commands run sequentially before any step starts.

use std::time::Duration;

/// A single gating command. If it fails, the workflow aborts before any
/// step runs (spec section 3, "Preflight").
#[derive(Debug, Clone)]
pub struct Preflight {
    pub command: String,
    pub workdir: Option<String>,
    pub message: Option<String>,
    pub timeout: Option<Duration>,
}

impl Preflight {
    pub(crate) fn from_doc(doc: crate::schema::PreflightDoc) -> Self {
        Self {
            command: doc.command,
            workdir: doc.workdir,
            message: doc.message,
            timeout: doc.timeout,
        }
    }

    pub fn to_doc(&self) -> crate::schema::PreflightDoc {
        crate::schema::PreflightDoc {
            command: self.command.clone(),
            workdir: self.workdir.clone(),
            message: self.message.clone(),
            timeout: self.timeout,
        }
    }
}
