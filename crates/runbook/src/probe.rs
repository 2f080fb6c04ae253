// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Probes: post-step verification commands.

/// Runs after a step's main command finishes. Failure is treated
/// identically to a main-command failure (spec section 3, "Probe").
#[derive(Debug, Clone)]
pub struct Probe {
    pub command: String,
    pub workdir: Option<String>,
}

impl Probe {
    pub(crate) fn from_doc(doc: crate::schema::ProbeDoc) -> Self {
        Self {
            command: doc.command,
            workdir: doc.workdir,
        }
    }

    pub fn to_doc(&self) -> crate::schema::ProbeDoc {
        crate::schema::ProbeDoc {
            command: self.command.clone(),
            workdir: self.workdir.clone(),
        }
    }
}
