// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! Error type for `container` CLI invocations.

use thiserror::Error;

/// Errors from invoking the `container` binary.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The binary could not be spawned at all (missing, not executable).
    #[error("failed to launch {binary}: {source}")]
    Spawn {
        /// Path that was invoked.
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited unsuccessfully.
    #[error("container {verb} exited with {status}: {stderr}")]
    CommandFailed {
        /// First argument passed, for context.
        verb: String,
        /// Exit status of the child.
        status: std::process::ExitStatus,
        /// Captured stderr, trimmed.
        stderr: String,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
