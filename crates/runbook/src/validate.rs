// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-quote argv splitting, shared by the loader (static validation) and
//! the engine's Spinner (post-enrichment validation).

use crate::error::LoadError;

/// Splits a shell-quoted command string into argv, the way a POSIX shell
/// would tokenize it (quoting, escaping) without actually invoking a
/// shell. Rejects commands that resolve to zero tokens.
pub fn split_command(step: &str, command: &str) -> Result<Vec<String>, LoadError> {
    let argv = shell_words::split(command).map_err(|e| LoadError::CommandParse {
        step: step.to_string(),
        field: "command",
        message: e.to_string(),
    })?;
    if argv.is_empty() {
        return Err(LoadError::EmptyCommand(step.to_string()));
    }
    Ok(argv)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
