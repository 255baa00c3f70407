// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! `dpac find` - container discovery.
//!
//! Lists all containers, correlates one with the workspace identifier,
//! and prints its canonical details as JSON. Every failure on the way
//! there (runtime unreachable, unparseable listing, no match) collapses
//! to "print nothing, exit 0" — DevPod only distinguishes found from
//! not found, and partial JSON on a miss would break the protocol.

use std::io::Write;

use anyhow::Result;
use dpac_core::{find_match, normalize, parse_inspect, parse_snapshot, ContainerDetails};
use tracing::{debug, warn};

pub fn run(container_id: &str) -> Result<()> {
    if container_id.is_empty() {
        // Nothing to find; no fetch, no output.
        return Ok(());
    }

    let Some(details) = discover(container_id) else {
        return Ok(());
    };

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &details)?;
    writeln!(stdout)?;
    Ok(())
}

/// Fetch, parse, match, normalize. `None` is "not found", whatever the
/// underlying reason was.
fn discover(container_id: &str) -> Option<ContainerDetails> {
    let raw = match dpac_runtime::capture(&["list", "--all", "--format", "json"]) {
        Ok(raw) => raw,
        Err(err) => {
            // A runtime with zero containers can report failure here.
            warn!("listing containers failed: {err}");
            return None;
        }
    };

    let records = match parse_snapshot(&raw) {
        Ok(records) => records,
        Err(err) => {
            warn!("container listing unusable: {err}");
            return None;
        }
    };

    let matched = find_match(&records, container_id)?;
    let native_id = matched.match_key().unwrap_or(container_id).to_string();

    // The listing can be lean; inspect gives richer detail when it works.
    // When it does not, the matched listing record is enough.
    match dpac_runtime::capture(&["inspect", native_id.as_str()]) {
        Ok(raw) => {
            if let Some(details) = parse_inspect(&raw, container_id) {
                return Some(details);
            }
            debug!("inspect output for {native_id} unusable, using listing record");
        }
        Err(err) => debug!("inspect {native_id} failed: {err}"),
    }

    Some(normalize(matched, container_id))
}
