// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! Correlating a DevPod workspace identifier with one runtime container.
//!
//! A wrong match means DevPod operates on someone else's container, so
//! the rules are strict and a record that cannot be identified at all is
//! never considered.

use crate::record::ContainerRecord;

/// Label key DevPod stamps on containers it creates, carrying the
/// workspace identifier. Lookup via this label works even when the
/// runtime assigns its own container ids.
pub const CORRELATION_LABEL: &str = "dev.containers.id";

/// Select at most one record for `query`.
///
/// Records are scanned in listing order; the first one satisfying any
/// rule wins. Per record the rules are, in order: exact native-id match,
/// native-id prefix match (truncated ids), correlation-label match. An
/// empty query matches nothing.
pub fn find_match<'a>(
    records: &'a [ContainerRecord],
    query: &str,
) -> Option<&'a ContainerRecord> {
    if query.is_empty() {
        return None;
    }
    records.iter().find(|record| record_matches(record, query))
}

fn record_matches(record: &ContainerRecord, query: &str) -> bool {
    // Unusable without an identifier, regardless of labels.
    let Some(key) = record.match_key() else {
        return false;
    };
    if key == query {
        return true;
    }
    if key.starts_with(query) {
        return true;
    }
    record.label(CORRELATION_LABEL) == Some(query)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
