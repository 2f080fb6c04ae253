// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `spindle parse` - load and enrich a workflow document, then emit it as
//! YAML (spec.md section 6).

use anyhow::{Context, Result};
use clap::Args;
use spindle_runbook::{load, LoadOptions, Workflow};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Args)]
pub struct ParseArgs {
    /// Workflow document to load, or `-` for stdin
    #[arg(short = 'f', long = "file")]
    file: PathBuf,
}

pub fn execute(args: ParseArgs) -> Result<()> {
    let bytes = crate::doc::read(&args.file)?;
    let workflow = load(&bytes, &LoadOptions::default()).context("failed to load workflow")?;
    let doc = enrich_doc(&workflow)?;
    let yaml = serde_yaml::to_string(&doc).context("failed to render enriched workflow")?;
    print!("{yaml}");
    Ok(())
}

/// Overlays each step's templated/env-expanded fields (spec.md section
/// 4.2) onto the document's raw form; `parse` has no dynamic context to
/// enrich against since it never runs the context builder.
fn enrich_doc(workflow: &Workflow) -> Result<spindle_runbook::schema::WorkflowDoc> {
    let mut doc = workflow.to_doc();
    let empty = HashMap::new();
    for (step, step_doc) in workflow.steps.iter().zip(doc.steps.iter_mut()) {
        let enriched = step
            .enrich(&workflow.metadata, &empty)
            .with_context(|| format!("failed to enrich step {:?}", step.name))?;
        step_doc.name = enriched.name;
        step_doc.command = enriched.command;
        step_doc.workdir = enriched.workdir;
        if let Some(probe) = step_doc.probe.as_mut() {
            if let Some(cmd) = enriched.probe_command {
                probe.command = cmd;
            }
            probe.workdir = enriched.probe_workdir;
        }
    }
    Ok(doc)
}
