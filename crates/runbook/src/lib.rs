// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! spindle-runbook: parses and validates a workflow document into a
//! dependency DAG, and provides the `{{ ... }}` templating + `$VAR`
//! environment expansion enrichment pass.

pub mod context_builder;
pub mod enrich;
pub mod error;
pub mod loader;
pub mod preflight;
pub mod probe;
pub mod schema;
pub mod step;
pub mod template;
pub mod validate;
pub mod workflow;

pub use context_builder::{ContextFormat, DynamicContextBuilder};
pub use enrich::{enrich_preflight, EnrichedPreflight, EnrichedStep};
pub use error::LoadError;
pub use loader::{load, LoadOptions};
pub use preflight::Preflight;
pub use probe::Probe;
pub use schema::LoggerDoc;
pub use step::Step;
pub use workflow::Workflow;
