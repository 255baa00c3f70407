// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! Converting one matched runtime record into canonical details.
//!
//! Normalization never fails: every output field resolves through an
//! ordered fallback chain with a defined empty value, so the worst case
//! is a sparse record, not an error. One function per shape variant
//! keeps each chain auditable on its own.

use std::collections::BTreeMap;

use chrono::{LocalResult, SecondsFormat, TimeZone, Utc};
use serde_json::{Map, Value};

use crate::details::{ContainerDetails, DetailsConfig, DetailsState};
use crate::record::{str_field, ContainerRecord, FlatContainer, NestedContainer};

/// Unix timestamp of the Core Foundation reference epoch,
/// 2001-01-01T00:00:00Z. Newer `container` releases report timestamps
/// as float seconds relative to this instant.
pub const REFERENCE_EPOCH_UNIX: i64 = 978_307_200;

/// Produce canonical details for a matched record. `fallback_id` is the
/// caller's identifier, used only when the record yields no id of its own.
pub fn normalize(record: &ContainerRecord, fallback_id: &str) -> ContainerDetails {
    match record {
        ContainerRecord::Flat(flat) => flat_details(flat, fallback_id),
        ContainerRecord::Nested(nested) => nested_details(nested, fallback_id),
        ContainerRecord::Generic(map) => generic_details(map, fallback_id),
    }
}

fn flat_details(flat: &FlatContainer, fallback_id: &str) -> ContainerDetails {
    let config = flat.config.as_ref();
    let process = flat.process_config.as_ref();

    let labels = flat
        .labels
        .clone()
        .or_else(|| config.and_then(|c| c.labels.clone()))
        .unwrap_or_default();

    ContainerDetails {
        id: pick(&[flat.id.as_str(), flat.name.as_str(), fallback_id]).to_string(),
        created: flat.created_at.clone(),
        state: DetailsState {
            status: normalize_state(pick(&[flat.state.as_str(), flat.status.as_str()])),
            started_at: flat.started_at.clone(),
        },
        config: DetailsConfig {
            labels,
            working_dir: config.map(|c| c.working_dir.clone()).unwrap_or_default(),
            user: pick(&[
                config.map(|c| c.user.as_str()).unwrap_or(""),
                process.map(|p| p.user.as_str()).unwrap_or(""),
            ])
            .to_string(),
            image: pick(&[
                flat.image.as_str(),
                config.map(|c| c.image.as_str()).unwrap_or(""),
            ])
            .to_string(),
        },
    }
}

fn nested_details(nested: &NestedContainer, fallback_id: &str) -> ContainerDetails {
    let conf = &nested.configuration;
    let init = conf.init_process.as_ref();

    let user = init
        .and_then(|p| p.user.as_ref())
        .and_then(|u| u.raw.as_ref())
        .map(|r| r.user_string.as_str())
        .unwrap_or("");

    let image = conf
        .image
        .as_ref()
        .map(|image| {
            pick(&[
                image.reference.as_str(),
                image.descriptor.as_ref().map(|d| d.digest.as_str()).unwrap_or(""),
            ])
        })
        .unwrap_or("");

    ContainerDetails {
        id: pick(&[conf.id.as_str(), fallback_id]).to_string(),
        created: nested.created_date.map(reference_epoch_to_utc).unwrap_or_default(),
        state: DetailsState {
            status: normalize_state(&nested.status),
            started_at: nested.started_date.map(reference_epoch_to_utc).unwrap_or_default(),
        },
        config: DetailsConfig {
            labels: conf.labels.clone().unwrap_or_default(),
            working_dir: init.map(|p| p.working_directory.clone()).unwrap_or_default(),
            user: user.to_string(),
            image: image.to_string(),
        },
    }
}

fn generic_details(map: &Map<String, Value>, fallback_id: &str) -> ContainerDetails {
    let labels: BTreeMap<String, String> = map
        .get("labels")
        .and_then(Value::as_object)
        .map(|labels| {
            labels
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default();

    ContainerDetails {
        id: pick(&[str_field(map, "id"), str_field(map, "name"), fallback_id]).to_string(),
        created: str_field(map, "createdAt").to_string(),
        state: DetailsState {
            status: normalize_state(pick(&[str_field(map, "state"), str_field(map, "status")])),
            started_at: str_field(map, "startedAt").to_string(),
        },
        config: DetailsConfig {
            labels,
            working_dir: String::new(),
            user: String::new(),
            image: String::new(),
        },
    }
}

/// Map a runtime state token onto the vocabulary DevPod understands.
///
/// DevPod's only load-bearing comparison is against "running"; everything
/// it considers stopped maps to "exited". Unknown tokens pass through
/// lowercased rather than being guessed at.
pub fn normalize_state(raw: &str) -> String {
    let token = raw.trim().to_lowercase();
    match token.as_str() {
        "running" => "running".to_string(),
        "stopped" | "exited" | "created" => "exited".to_string(),
        _ => token,
    }
}

/// Format a CFAbsoluteTime float as an RFC 3339 UTC instant.
///
/// Zero and negatives are treated as "never" (the runtime reports 0 for
/// containers that have not started), as are values chrono cannot
/// represent.
fn reference_epoch_to_utc(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return String::new();
    }
    let unix = seconds + REFERENCE_EPOCH_UNIX as f64;
    let mut whole = unix.trunc() as i64;
    let mut nanos = ((unix - unix.trunc()) * 1e9).round() as u32;
    if nanos >= 1_000_000_000 {
        whole += 1;
        nanos = 0;
    }
    match Utc.timestamp_opt(whole, nanos) {
        LocalResult::Single(instant) => instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        _ => String::new(),
    }
}

/// First non-empty candidate, or "".
fn pick<'a>(candidates: &[&'a str]) -> &'a str {
    candidates.iter().copied().find(|s| !s.is_empty()).unwrap_or("")
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
