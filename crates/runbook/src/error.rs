// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Load-time errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed workflow document: {0}")]
    Malformed(#[from] serde_yaml::Error),

    #[error("unsupported workflow version {0:?}, expected \"1\"")]
    UnsupportedVersion(String),

    #[error("invalid step name in depends_on for {step} ({dependency})")]
    UnresolvedDependency { step: String, dependency: String },

    #[error("duplicate step name {0:?}")]
    DuplicateStepName(String),

    #[error("circular depends_on involving step {0:?}")]
    CyclicDependency(String),

    #[error("step {0:?} has an empty command")]
    EmptyCommand(String),

    #[error("only json and yaml are accepted as context builder format (got {0:?})")]
    InvalidContextFormat(String),

    #[error("template error in {field} of {step:?}: {source}")]
    Template {
        step: String,
        field: &'static str,
        #[source]
        source: tera::Error,
    },

    #[error("command parse error in {field} of {step:?}: {message}")]
    CommandParse {
        step: String,
        field: &'static str,
        message: String,
    },
}
