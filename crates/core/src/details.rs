// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! Canonical container record returned to DevPod.
//!
//! Field names mirror DevPod's Go-side `ContainerDetails` struct, so the
//! serialized JSON is byte-compatible with what the docker driver emits.
//! `User` and `Image` live under `Config` for legacy reasons on the
//! DevPod side.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The one output shape of discovery, independent of which runtime
/// JSON variant was observed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDetails {
    #[serde(rename = "ID")]
    pub id: String,
    /// ISO-8601 creation timestamp, empty if unknown.
    #[serde(rename = "Created")]
    pub created: String,
    #[serde(rename = "State")]
    pub state: DetailsState,
    #[serde(rename = "Config")]
    pub config: DetailsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailsState {
    /// Normalized status token. DevPod compares this against exactly
    /// "running" to decide whether the container needs a start.
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "StartedAt")]
    pub started_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailsConfig {
    /// Always serialized, even when empty: DevPod dereferences the label
    /// map unconditionally, so a null here breaks discovery.
    #[serde(rename = "Labels")]
    pub labels: BTreeMap<String, String>,
    #[serde(rename = "WorkingDir")]
    pub working_dir: String,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Image")]
    pub image: String,
}

#[cfg(test)]
#[path = "details_tests.rs"]
mod tests;
