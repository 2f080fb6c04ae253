// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ID types shared across the workflow engine.

use rand::Rng;
use std::fmt;

/// Define a newtype ID wrapper around `String`.
///
/// Generates `new()`, `as_str()`, `Display`, `From<String>`, `From<&str>`,
/// `PartialEq<str>` and `PartialEq<&str>` implementations.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id! {
    /// Identifies a single `run` invocation. Stable for the lifetime of the
    /// run, different across invocations with probability ~= 1.
    pub struct SessionId;
}

impl Default for SessionId {
    /// Generates a fresh, random 8-character lowercase-hex session id.
    fn default() -> Self {
        Self::generate()
    }
}

impl SessionId {
    /// Generates a random 8-character lowercase-hex token, matching the
    /// `%08x`-formatted random `u32` used by the original implementation.
    pub fn generate() -> Self {
        let value: u32 = rand::rng().random();
        Self(format!("{value:08x}"))
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
