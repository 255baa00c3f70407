// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! Spawning the `container` binary.

use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::error::RuntimeError;

/// Default install location of the Apple `container` CLI.
pub const DEFAULT_BINARY: &str = "/usr/local/bin/container";

/// Path to the `container` binary: `CONTAINER_PATH` if set, otherwise
/// the default install location.
pub fn binary_path() -> String {
    std::env::var("CONTAINER_PATH")
        .ok()
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| DEFAULT_BINARY.to_string())
}

/// Run `container` with the given arguments and collect stdout.
///
/// A non-zero exit is an error carrying the captured stderr; discovery
/// callers downgrade it to "no containers observed".
pub fn capture<S: AsRef<str>>(args: &[S]) -> Result<Vec<u8>, RuntimeError> {
    capture_with(&binary_path(), args)
}

pub(crate) fn capture_with<S: AsRef<str>>(
    binary: &str,
    args: &[S],
) -> Result<Vec<u8>, RuntimeError> {
    debug!(binary, args = %join(args), "capturing container output");
    let output = Command::new(binary)
        .args(args.iter().map(AsRef::as_ref))
        .stdin(Stdio::null())
        .output()
        .map_err(|source| RuntimeError::Spawn { binary: binary.to_string(), source })?;

    if !output.status.success() {
        return Err(RuntimeError::CommandFailed {
            verb: first_arg(args),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output.stdout)
}

/// Run `container` with stdin, stdout and stderr inherited from this
/// process. Used for exec and logs, where DevPod pipes binary data
/// (agent binaries, tar streams, SSH traffic) through the streams; they
/// must not be buffered or rewritten.
pub fn passthrough<S: AsRef<str>>(args: &[S]) -> Result<ExitStatus, RuntimeError> {
    status_with(&binary_path(), args, Stdio::inherit())
}

/// Run `container` with stdout/stderr inherited but stdin closed. Used
/// for lifecycle verbs whose progress output DevPod logs.
pub fn stream<S: AsRef<str>>(args: &[S]) -> Result<ExitStatus, RuntimeError> {
    status_with(&binary_path(), args, Stdio::null())
}

fn status_with<S: AsRef<str>>(
    binary: &str,
    args: &[S],
    stdin: Stdio,
) -> Result<ExitStatus, RuntimeError> {
    debug!(binary, args = %join(args), "running container");
    Command::new(binary)
        .args(args.iter().map(AsRef::as_ref))
        .stdin(stdin)
        .status()
        .map_err(|source| RuntimeError::Spawn { binary: binary.to_string(), source })
}

fn first_arg<S: AsRef<str>>(args: &[S]) -> String {
    args.first().map(|s| s.as_ref().to_string()).unwrap_or_default()
}

fn join<S: AsRef<str>>(args: &[S]) -> String {
    args.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "invoke_tests.rs"]
mod tests;
