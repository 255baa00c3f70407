// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! Snapshot and inspect output parsing.
//!
//! The listing format is not stable across `container` releases, so
//! parsing is an ordered trial of shape hypotheses: a well-formed JSON
//! array first, then newline-delimited records (some releases print a
//! pretty-printed array that is only valid line by line). A parse
//! failure is not fatal to discovery; callers treat it as "zero
//! containers observed".

use serde_json::Value;
use thiserror::Error;

use crate::details::ContainerDetails;
use crate::normalize::normalize;
use crate::record::ContainerRecord;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("container listing was empty")]
    EmptyListing,
    #[error("container listing did not match any known format")]
    UnknownFormat,
}

/// Decode a raw listing snapshot into container records.
///
/// Returns at least one record on success. An empty or undecodable
/// listing is an error so the discovery boundary can log which case it
/// hit before degrading to "not found".
pub fn parse_snapshot(raw: &[u8]) -> Result<Vec<ContainerRecord>, ParseError> {
    let mut saw_array = false;

    if let Ok(Value::Array(items)) = serde_json::from_slice::<Value>(raw) {
        saw_array = true;
        let records: Vec<ContainerRecord> =
            items.into_iter().filter_map(ContainerRecord::from_value).collect();
        if !records.is_empty() {
            return Ok(records);
        }
    }

    let records = parse_line_delimited(raw);
    if !records.is_empty() {
        return Ok(records);
    }

    if saw_array {
        Err(ParseError::EmptyListing)
    } else {
        Err(ParseError::UnknownFormat)
    }
}

/// Newline-delimited fallback: one record per line, bracket-only lines
/// dropped, a single trailing comma stripped (artifact of pretty-printed
/// arrays split across lines), undecodable lines skipped.
fn parse_line_delimited(raw: &[u8]) -> Vec<ContainerRecord> {
    let text = String::from_utf8_lossy(raw);
    let mut records = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line == "[" || line == "]" {
            continue;
        }
        let line = line.strip_suffix(',').unwrap_or(line);
        let Ok(value) = serde_json::from_str::<Value>(line) else {
            continue;
        };
        if let Some(record) = ContainerRecord::from_value(value) {
            records.push(record);
        }
    }
    records
}

/// Decode `container inspect` output into canonical details.
///
/// Inspect shares the listing's shape tolerance: a single object, an
/// array (first usable element wins), or a generic map. `fallback_id` is
/// the caller's identifier, used when the output carries no id of its own.
pub fn parse_inspect(raw: &[u8], fallback_id: &str) -> Option<ContainerDetails> {
    let value: Value = serde_json::from_slice(raw).ok()?;
    let record = match value {
        Value::Array(items) => items.into_iter().find_map(ContainerRecord::from_value)?,
        other => ContainerRecord::from_value(other)?,
    };
    Some(normalize(&record, fallback_id))
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
