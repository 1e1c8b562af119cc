// azd-env: Azure Developer CLI environment loader
//
// SPDX-FileCopyrightText: 2026 The azd-env Contributors
// SPDX-License-Identifier: MIT

//! Error handling module.
//!
//! ```text
//!                      AzdError
//!                         |
//!       +---------------+-+-------------+-----------+
//!       v               v               v           v
//!  CommandNotFound  NoProjectExists  CommandFailed  Spawn
//!  azd unresolvable azd ran, no     any other      OS refused
//!  (spawn + PATH    project in cwd  nonzero exit   to start azd
//!   search missed)
//!
//!  quiet suppresses:  NoProjectExists, CommandFailed
//!  always fatal:      CommandNotFound, Spawn
//! ```

use thiserror::Error;

/// Result type using [`AzdError`].
pub type AzdResult<T> = std::result::Result<T, AzdError>;

/// Errors produced while fetching and loading azd environment values.
///
/// The set is closed so callers can match on the failure class. Variants
/// carry the tool's raw diagnostic text where one exists; nothing is
/// paraphrased into vaguer messages.
#[derive(Debug, Error)]
pub enum AzdError {
    /// The azd executable could not be resolved, neither by direct spawn nor
    /// by searching the PATH.
    #[error("azd executable not found: '{name}' (not in PATH)")]
    CommandNotFound { name: String },

    /// azd ran but found no project in the working directory.
    #[error("azd reported no project: {message}")]
    NoProjectExists { message: String },

    /// azd exited nonzero for any other reason.
    #[error("failed to get azd environment values (exit code {exit_code}): {message}")]
    CommandFailed { exit_code: i32, message: String },

    /// The azd process could not be started.
    #[error("failed to spawn process '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl AzdError {
    /// Whether quiet mode swallows this error.
    ///
    /// Only failures reported by a tool that was found and ran are
    /// suppressible. A missing or unspawnable executable is an installation
    /// problem and always propagates.
    #[must_use]
    pub const fn is_suppressible(&self) -> bool {
        matches!(
            self,
            Self::NoProjectExists { .. } | Self::CommandFailed { .. }
        )
    }
}
