// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! `dpac start|stop|delete|logs|arch` - thin lifecycle verbs.

use anyhow::{bail, Result};
use tracing::info;

use crate::exit_error::ExitError;

pub fn start(container_id: &str) -> Result<()> {
    info!("starting container {container_id}");
    control(container_id, &["start", container_id])
}

pub fn stop(container_id: &str) -> Result<()> {
    info!("stopping container {container_id}");
    control(container_id, &["stop", container_id])
}

/// `--force` so deletion works on running containers too.
pub fn delete(container_id: &str) -> Result<()> {
    info!("deleting container {container_id}");
    control(container_id, &["delete", "--force", container_id])
}

/// Logs go through full passthrough: DevPod may stream them.
pub fn logs(container_id: &str) -> Result<()> {
    if container_id.is_empty() {
        bail!("container ID is required");
    }
    let status = dpac_runtime::passthrough(&["logs", container_id])?;
    if !status.success() {
        return Err(ExitError::from_status(status).into());
    }
    Ok(())
}

/// Apple `container` only runs on Apple Silicon.
pub fn arch() -> Result<()> {
    print!("arm64");
    Ok(())
}

fn control(container_id: &str, args: &[&str]) -> Result<()> {
    if container_id.is_empty() {
        bail!("container ID is required");
    }
    let status = dpac_runtime::stream(args)?;
    if !status.success() {
        return Err(ExitError::from_status(status).into());
    }
    Ok(())
}
