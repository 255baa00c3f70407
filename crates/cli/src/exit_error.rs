// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! Error type that carries a process exit code.
//!
//! Exec must hand the child's exit code straight back to DevPod (it
//! distinguishes remote command failure from driver failure by code).
//! Commands return `ExitError` instead of calling `process::exit`
//! directly so `main()` stays the only place that terminates.

use std::fmt;
use std::process::ExitStatus;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    /// Printed to stderr when non-empty.
    pub message: String,
}

impl ExitError {
    /// Mirror a child process exit. A signal death (no code) maps to 1.
    pub fn from_status(status: ExitStatus) -> Self {
        Self {
            code: status.code().unwrap_or(1),
            message: String::new(),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "exit code {}", self.code)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
