// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! Run options received from DevPod via `DEVCONTAINER_RUN_OPTIONS`.
//!
//! The payload mirrors DevPod's docker run options; only the subset the
//! Apple runtime can honor is acted on. Env is a `BTreeMap` so the
//! generated command line is deterministic.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunOptions {
    pub uid: String,
    pub image: String,
    pub user: String,
    pub entrypoint: String,
    pub cmd: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub cap_add: Vec<String>,
    pub security_opt: Vec<String>,
    /// Already formatted as KEY=VALUE strings on the DevPod side.
    pub labels: Vec<String>,
    pub privileged: Option<bool>,
    pub workspace_mount: Option<Mount>,
    pub mounts: Vec<Mount>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mount {
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    pub target: String,
    pub external: bool,
    pub other: Vec<String>,
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
