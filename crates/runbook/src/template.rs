// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Two-pass string enrichment: `{{ ... }}` templating, then `$VAR`
//! environment expansion (spec section 4.2).
//!
//! Template output may contain `$VAR` references that the env pass
//! resolves, so the order is fixed: template first, then env.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

/// The values a step's strings are templated against: the step's own
/// attributes (Go's "`.Name`, `.Metadata`, etc." via a bound struct view),
/// the workflow's (already-expanded) metadata, and whatever the dynamic
/// context builder produced, flattened so `{{ region }}` works directly.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StepView {
    pub name: String,
    pub command: String,
    pub workdir: String,
    pub metadata: HashMap<String, String>,
}

pub fn build_context(
    step: &StepView,
    workflow_metadata: &HashMap<String, String>,
    dynamic_context: &HashMap<String, String>,
) -> Context {
    let mut ctx = Context::new();
    ctx.insert("step", step);
    ctx.insert("metadata", workflow_metadata);
    for (k, v) in dynamic_context {
        ctx.insert(k, v);
    }
    ctx
}

/// Renders a single `{{ ... }}` string. Empty strings pass through
/// unchanged without invoking the engine.
pub fn render(template: &str, ctx: &Context) -> Result<String, tera::Error> {
    if template.is_empty() {
        return Ok(String::new());
    }
    Tera::one_off(template, ctx, false)
}

/// Expands `$VAR` / `${VAR}` references against the process environment.
/// Unresolved variables become the empty string, matching the original
/// implementation's use of Go's `os.ExpandEnv`.
pub fn expand_env(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    shellexpand::env_with_context_no_errors(s, |name| std::env::var(name).ok()).into_owned()
}

/// Runs both passes in order: template, then env.
pub fn enrich(template: &str, ctx: &Context) -> Result<String, tera::Error> {
    let templated = render(template, ctx)?;
    Ok(expand_env(&templated))
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
