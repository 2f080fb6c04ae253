// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dynamic Context Builder definition: a step-shaped command whose stdout
//! is parsed as structured data and merged into the template context.

use crate::error::LoadError;
use crate::schema::ContextBuilderDoc;
use std::collections::HashMap;
use std::time::Duration;

/// Output parsing format for a [`DynamicContextBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextFormat {
    Json,
    Yaml,
}

impl ContextFormat {
    /// Parses the `format` field, normalizing `yml` to `yaml` and
    /// defaulting to `json`, per spec section 4.5.
    fn parse(raw: Option<&str>) -> Result<Self, LoadError> {
        match raw.unwrap_or("json") {
            "json" => Ok(ContextFormat::Json),
            "yaml" | "yml" => Ok(ContextFormat::Yaml),
            other => Err(LoadError::InvalidContextFormat(other.to_string())),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ContextFormat::Json => "json",
            ContextFormat::Yaml => "yaml",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DynamicContextBuilder {
    pub command: String,
    pub workdir: Option<String>,
    pub format: ContextFormat,
    pub timeout: Option<Duration>,
    pub env: Vec<String>,
    pub fail_context: Option<HashMap<String, String>>,
}

impl DynamicContextBuilder {
    pub(crate) fn from_doc(doc: ContextBuilderDoc) -> Result<Self, LoadError> {
        let format = ContextFormat::parse(doc.format.as_deref())?;
        Ok(Self {
            command: doc.command,
            workdir: doc.workdir,
            format,
            timeout: doc.timeout,
            env: doc.env,
            fail_context: doc.fail_context,
        })
    }

    pub fn to_doc(&self) -> ContextBuilderDoc {
        ContextBuilderDoc {
            command: self.command.clone(),
            workdir: self.workdir.clone(),
            format: Some(self.format.as_str().to_string()),
            timeout: self.timeout,
            env: self.env.clone(),
            fail_context: self.fail_context.clone(),
        }
    }
}

#[cfg(test)]
#[path = "context_builder_tests.rs"]
mod tests;
