// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! `dpac find` specs
//!
//! Discovery must either print one ContainerDetails JSON document or
//! nothing at all, and must exit 0 even when the runtime is broken.

use crate::prelude::*;

#[test]
fn find_without_identifier_prints_nothing_and_skips_the_runtime() {
    let fake = FakeRuntime::new();
    dpac(&fake).args(&["find"]).run().passes().stdout_empty();
    assert!(!fake.was_invoked(), "runtime must not be fetched for an empty identifier");
}

#[test]
fn find_matches_flat_entry_by_exact_id() {
    let fake = FakeRuntime::new();
    fake.set_list(
        r#"[{"id": "aaa111", "name": "web", "state": "running",
             "createdAt": "2024-01-01T00:00:00Z",
             "labels": {"dev.containers.id": "ws-web"}}]"#,
    );
    // No inspect.json: the inspect fallback fails and the listing record
    // is normalized directly.
    let ran = dpac(&fake).args(&["find", "aaa111"]).run().passes();
    let json = ran.json();
    assert_eq!(json["ID"], "aaa111");
    assert_eq!(json["State"]["Status"], "running");
    assert_eq!(json["Created"], "2024-01-01T00:00:00Z");
    assert_eq!(json["Config"]["Labels"]["dev.containers.id"], "ws-web");
}

#[test]
fn find_matches_by_id_prefix() {
    let fake = FakeRuntime::new();
    fake.set_list(r#"[{"id": "aaa111deadbeef", "state": "running"}]"#);
    let ran = dpac(&fake).args(&["find", "aaa111"]).run().passes();
    assert_eq!(ran.json()["ID"], "aaa111deadbeef");
}

#[test]
fn find_matches_by_correlation_label() {
    let fake = FakeRuntime::new();
    fake.set_list(
        r#"[{"id": "zzz999", "labels": {"dev.containers.id": "other"}},
            {"id": "aaa111", "labels": {"dev.containers.id": "ws-1"}}]"#,
    );
    let ran = dpac(&fake).args(&["find", "ws-1"]).run().passes();
    assert_eq!(ran.json()["ID"], "aaa111");
}

#[test]
fn find_prefers_inspect_detail_when_available() {
    let fake = FakeRuntime::new();
    fake.set_list(r#"[{"id": "aaa111", "labels": {"dev.containers.id": "ws-1"}}]"#);
    fake.set_inspect(
        r#"{"id": "aaa111", "state": "running",
            "config": {"workingDir": "/workspaces/ws-1", "user": "vscode"}}"#,
    );
    let ran = dpac(&fake).args(&["find", "ws-1"]).run().passes();
    let json = ran.json();
    assert_eq!(json["State"]["Status"], "running");
    assert_eq!(json["Config"]["WorkingDir"], "/workspaces/ws-1");
    assert_eq!(json["Config"]["User"], "vscode");

    let calls = fake.calls();
    assert!(calls.iter().any(|line| line == "inspect aaa111"), "calls: {calls:?}");
}

#[test]
fn find_handles_nested_configuration_listings() {
    let fake = FakeRuntime::new();
    fake.set_list(
        r#"[{"configuration": {"id": "ccc333",
                               "labels": {"dev.containers.id": "ws-1"},
                               "image": {"reference": "ubuntu:22.04"}},
             "status": "stopped",
             "startedDate": 700000000.0}]"#,
    );
    let ran = dpac(&fake).args(&["find", "ws-1"]).run().passes();
    let json = ran.json();
    assert_eq!(json["ID"], "ccc333");
    assert_eq!(json["State"]["Status"], "exited");
    assert_eq!(json["State"]["StartedAt"], "2023-03-08T20:26:40Z");
    assert_eq!(json["Config"]["Image"], "ubuntu:22.04");
}

#[test]
fn find_parses_line_delimited_listings_with_trailing_commas() {
    let fake = FakeRuntime::new();
    fake.set_list("{\"id\": \"aaa111\"},\n{\"id\": \"bbb222\", \"state\": \"running\"}\n");
    let ran = dpac(&fake).args(&["find", "bbb222"]).run().passes();
    assert_eq!(ran.json()["ID"], "bbb222");
}

#[test]
fn find_emits_labels_even_when_the_record_has_none() {
    let fake = FakeRuntime::new();
    fake.set_list(r#"[{"id": "aaa111"}]"#);
    let ran = dpac(&fake).args(&["find", "aaa111"]).run().passes();
    assert!(ran.json()["Config"]["Labels"].is_object());
}

#[test]
fn find_miss_prints_nothing() {
    let fake = FakeRuntime::new();
    fake.set_list(r#"[{"id": "aaa111"}]"#);
    dpac(&fake).args(&["find", "zzz"]).run().passes().stdout_empty();
}

#[test]
fn find_with_malformed_listing_exits_clean() {
    let fake = FakeRuntime::new();
    fake.set_list("this is not json in any shape");
    dpac(&fake).args(&["find", "ws-1"]).run().passes().stdout_empty();
}

#[test]
fn find_with_failing_runtime_exits_clean() {
    // No list.json: the fake exits 1, as the CLI does with no containers.
    let fake = FakeRuntime::new();
    dpac(&fake).args(&["find", "ws-1"]).run().passes().stdout_empty();
}
