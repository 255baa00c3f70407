// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! `dpac command` - execute a command inside the container.
//!
//! DevPod pipes binary data (compressed tar, its agent binary, SSH
//! tunnel traffic) through stdin/stdout of this verb, so the child runs
//! with full stdio passthrough and its exit code is propagated verbatim.

use anyhow::{bail, Result};

use crate::exit_error::ExitError;

pub fn run(container_id: &str) -> Result<()> {
    if container_id.is_empty() {
        bail!("container ID is required");
    }

    let user = std::env::var("DEVCONTAINER_USER").unwrap_or_default();
    let Ok(command) = std::env::var("DEVCONTAINER_COMMAND") else {
        bail!("DEVCONTAINER_COMMAND environment variable is required");
    };
    if command.is_empty() {
        bail!("DEVCONTAINER_COMMAND environment variable is required");
    }

    let args = exec_args(container_id, &user, &command);
    let status = dpac_runtime::passthrough(&args)?;
    if !status.success() {
        return Err(ExitError::from_status(status).into());
    }
    Ok(())
}

/// `exec -i [-u USER] ID sh -c COMMAND`. `-i` keeps stdin open; DevPod
/// sends data through it even for short-lived commands.
fn exec_args(container_id: &str, user: &str, command: &str) -> Vec<String> {
    let mut args = vec!["exec".to_string(), "-i".to_string()];
    if !user.is_empty() {
        args.push("-u".to_string());
        args.push(user.to_string());
    }
    args.push(container_id.to_string());
    args.push("sh".to_string());
    args.push("-c".to_string());
    args.push(command.to_string());
    args
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
