// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parses and validates a workflow document into a dependency DAG.
//!
//! Deliberately does not own concurrency or session-identity concerns
//! (spec section 3's `sessionID`, `concurrencySemaphore`, `stopFlag`): those
//! are run-scoped, not document-scoped, and live in `spindle-engine`'s
//! runtime wrapper instead. This loader's job ends at producing a
//! validated, statically-resolved [`Workflow`].

use crate::context_builder::DynamicContextBuilder;
use crate::error::LoadError;
use crate::schema::{WorkflowDoc, SUPPORTED_VERSION};
use crate::step::Step;
use crate::template::{self, StepView};
use crate::validate::split_command;
use crate::workflow::Workflow;
use std::collections::HashMap;
use std::time::Duration;

/// Options that shape a load, independent of the document's own contents.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Default timeout a step/preflight inherits when it declares none.
    pub default_timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            default_timeout: Duration::from_secs(10),
        }
    }
}

/// Parses `bytes` as a YAML workflow document and returns a fully resolved,
/// cycle-checked [`Workflow`].
pub fn load(bytes: &[u8], options: &LoadOptions) -> Result<Workflow, LoadError> {
    let doc: WorkflowDoc = serde_yaml::from_slice(bytes)?;
    load_doc(doc, options)
}

fn load_doc(doc: WorkflowDoc, options: &LoadOptions) -> Result<Workflow, LoadError> {
    if doc.version != SUPPORTED_VERSION {
        return Err(LoadError::UnsupportedVersion(doc.version));
    }

    let mut steps = Vec::with_capacity(doc.steps.len());
    let mut seen = HashMap::new();
    for step_doc in doc.steps {
        let name = step_doc.name.clone();
        if seen.insert(name.clone(), ()).is_some() {
            return Err(LoadError::DuplicateStepName(name));
        }
        split_command(&name, &step_doc.command)?;
        steps.push(Step::from_doc(step_doc)?);
    }

    resolve_dependencies(&mut steps)?;
    detect_cycles(&steps)?;

    let context_builder = doc
        .context_builder
        .map(DynamicContextBuilder::from_doc)
        .transpose()?;

    let metadata = enrich_metadata(doc.metadata)?;

    Ok(Workflow {
        version: doc.version,
        metadata,
        steps,
        logger: doc.logger,
        context_builder,
        default_timeout: options.default_timeout,
    })
}

fn resolve_dependencies(steps: &mut [Step]) -> Result<(), LoadError> {
    let index_by_name: HashMap<String, usize> = steps
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name.clone(), i))
        .collect();

    for i in 0..steps.len() {
        let mut resolved = Vec::with_capacity(steps[i].depends_on.len());
        for dep_name in steps[i].depends_on.clone() {
            let dep_idx = index_by_name
                .get(&dep_name)
                .copied()
                .ok_or_else(|| LoadError::UnresolvedDependency {
                    step: steps[i].name.clone(),
                    dependency: dep_name.clone(),
                })?;
            resolved.push(dep_idx);
        }
        steps[i].depends_on_idx = resolved;
    }
    Ok(())
}

/// Rejects cyclic `depends_on` graphs, including self-loops, via
/// three-color DFS. Spec section 9 leaves this as an open question
/// ("source has a TODO"); this loader makes it mandatory and rejects
/// self-loops rather than treating them as "never runnable".
fn detect_cycles(steps: &[Step]) -> Result<(), LoadError> {
    #[derive(Clone, Copy, PartialEq)]
    enum Color {
        White,
        Gray,
        Black,
    }

    let mut color = vec![Color::White; steps.len()];

    fn visit(
        idx: usize,
        steps: &[Step],
        color: &mut [Color],
    ) -> Result<(), LoadError> {
        color[idx] = Color::Gray;
        for &dep in &steps[idx].depends_on_idx {
            match color[dep] {
                Color::White => visit(dep, steps, color)?,
                Color::Gray => {
                    return Err(LoadError::CyclicDependency(steps[idx].name.clone()));
                }
                Color::Black => {}
            }
        }
        color[idx] = Color::Black;
        Ok(())
    }

    for idx in 0..steps.len() {
        if color[idx] == Color::White {
            visit(idx, steps, &mut color)?;
        }
    }
    Ok(())
}

fn enrich_metadata(metadata: HashMap<String, String>) -> Result<HashMap<String, String>, LoadError> {
    let empty = StepView::default();
    let full_ctx = template::build_context(&empty, &metadata, &HashMap::new());
    metadata
        .into_iter()
        .map(|(k, v)| {
            let rendered =
                template::enrich(&v, &full_ctx).map_err(|source| LoadError::Template {
                    step: "<workflow>".to_string(),
                    field: "metadata",
                    source,
                })?;
            Ok((k, rendered))
        })
        .collect()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
