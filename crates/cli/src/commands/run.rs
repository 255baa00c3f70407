// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! `dpac run` - create and start the dev container.
//!
//! Translates DevPod's `DEVCONTAINER_RUN_OPTIONS` payload into a
//! `container run` command line. Docker-only options the Apple runtime
//! has no equivalent for (capAdd, securityOpt, privileged) are logged
//! and dropped rather than failing the workspace.

use anyhow::{bail, Context, Result};
use dpac_core::{Mount, RunOptions};
use tracing::{debug, warn};

use crate::exit_error::ExitError;

pub fn run(container_id: &str) -> Result<()> {
    if container_id.is_empty() {
        bail!("container ID is required");
    }

    let Ok(raw) = std::env::var("DEVCONTAINER_RUN_OPTIONS") else {
        bail!("DEVCONTAINER_RUN_OPTIONS environment variable is required");
    };
    let opts: RunOptions =
        serde_json::from_str(&raw).context("failed to parse DEVCONTAINER_RUN_OPTIONS")?;

    if opts.image.is_empty() {
        bail!("run options did not include an image");
    }

    if !opts.cap_add.is_empty() {
        warn!("capAdd is not supported by Apple container, ignoring: {:?}", opts.cap_add);
    }
    if !opts.security_opt.is_empty() {
        warn!("securityOpt is not supported by Apple container, ignoring: {:?}", opts.security_opt);
    }
    if opts.privileged == Some(true) {
        warn!("privileged mode is not supported by Apple container, ignoring");
    }

    let args = run_args(container_id, &opts);
    debug!("container {}", args.join(" "));

    let status = dpac_runtime::stream(&args)?;
    if !status.success() {
        return Err(ExitError::from_status(status).into());
    }
    Ok(())
}

/// Build the `container run` argument list. The image must come after
/// all flags, and command arguments after the image.
fn run_args(container_id: &str, opts: &RunOptions) -> Vec<String> {
    let mut args: Vec<String> = vec!["run".into(), "-d".into(), "--name".into(), container_id.into()];

    if !opts.user.is_empty() {
        args.push("-u".into());
        args.push(opts.user.clone());
    }
    if !opts.entrypoint.is_empty() {
        args.push("--entrypoint".into());
        args.push(opts.entrypoint.clone());
    }
    for (key, value) in &opts.env {
        args.push("-e".into());
        args.push(format!("{key}={value}"));
    }
    for label in &opts.labels {
        args.push("-l".into());
        args.push(label.clone());
    }
    if let Some(mount) = opts.workspace_mount.as_ref().and_then(mount_flag) {
        args.push("--mount".into());
        args.push(mount);
    }
    for mount in opts.mounts.iter().filter_map(mount_flag) {
        args.push("--mount".into());
        args.push(mount);
    }

    args.push(opts.image.clone());
    args.extend(opts.cmd.iter().cloned());
    args
}

/// `type=<type>,source=<source>,target=<target>[,extra...]`; a mount
/// without a target is meaningless and is skipped.
fn mount_flag(mount: &Mount) -> Option<String> {
    if mount.target.is_empty() {
        return None;
    }

    let kind = if mount.kind.is_empty() { "bind" } else { &mount.kind };
    let mut parts = vec![format!("type={kind}")];
    if !mount.source.is_empty() {
        parts.push(format!("source={}", mount.source));
    }
    parts.push(format!("target={}", mount.target));
    parts.extend(mount.other.iter().cloned());
    Some(parts.join(","))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
