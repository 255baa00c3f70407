// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! Specs for the plumbing verbs: command/exec, run, lifecycle, arch.

use crate::prelude::*;

#[test]
fn arch_prints_arm64() {
    let fake = FakeRuntime::new();
    let ran = dpac(&fake).args(&["arch"]).run().passes();
    assert_eq!(ran.stdout(), "arm64");
}

#[test]
fn exec_requires_devcontainer_command() {
    let fake = FakeRuntime::new();
    dpac(&fake).args(&["command", "web-1"]).run().fails();
}

#[test]
fn exec_builds_user_and_shell_wrapping() {
    let fake = FakeRuntime::new();
    dpac(&fake)
        .args(&["command", "web-1"])
        .env("DEVCONTAINER_USER", "vscode")
        .env("DEVCONTAINER_COMMAND", "echo hi")
        .run()
        .passes();
    let calls = fake.calls();
    assert_eq!(calls, vec!["exec -i -u vscode web-1 sh -c echo hi"]);
}

#[test]
fn exec_omits_user_flag_when_unset() {
    let fake = FakeRuntime::new();
    dpac(&fake)
        .args(&["command", "web-1"])
        .env("DEVCONTAINER_COMMAND", "ls")
        .run()
        .passes();
    assert_eq!(fake.calls(), vec!["exec -i web-1 sh -c ls"]);
}

#[test]
fn exec_propagates_the_child_exit_code() {
    let fake = FakeRuntime::new();
    dpac(&fake)
        .args(&["command", "web-1"])
        .env("DEVCONTAINER_COMMAND", "false")
        .env("FAKE_EXEC_EXIT", "7")
        .run()
        .code(7);
}

#[test]
fn run_requires_devcontainer_run_options() {
    let fake = FakeRuntime::new();
    dpac(&fake).args(&["run", "ws-1"]).run().fails();
}

#[test]
fn run_rejects_options_without_an_image() {
    let fake = FakeRuntime::new();
    dpac(&fake)
        .args(&["run", "ws-1"])
        .env("DEVCONTAINER_RUN_OPTIONS", r#"{"user": "vscode"}"#)
        .run()
        .fails();
    assert!(!fake.was_invoked());
}

#[test]
fn run_translates_options_into_container_run() {
    let fake = FakeRuntime::new();
    dpac(&fake)
        .args(&["run", "ws-1"])
        .env(
            "DEVCONTAINER_RUN_OPTIONS",
            r#"{"image": "ubuntu:22.04",
                "user": "vscode",
                "env": {"FOO": "bar"},
                "labels": ["dev.containers.id=ws-1"],
                "workspaceMount": {"source": "/src", "target": "/workspaces/p"},
                "cmd": ["sleep", "infinity"]}"#,
        )
        .run()
        .passes();
    assert_eq!(
        fake.calls(),
        vec![
            "run -d --name ws-1 -u vscode -e FOO=bar -l dev.containers.id=ws-1 \
             --mount type=bind,source=/src,target=/workspaces/p ubuntu:22.04 sleep infinity"
        ]
    );
}

#[test]
fn run_ignores_unsupported_docker_options_with_a_warning() {
    let fake = FakeRuntime::new();
    let ran = dpac(&fake)
        .args(&["run", "ws-1"])
        .env(
            "DEVCONTAINER_RUN_OPTIONS",
            r#"{"image": "img", "capAdd": ["SYS_PTRACE"], "privileged": true}"#,
        )
        .run()
        .passes();
    assert_eq!(fake.calls(), vec!["run -d --name ws-1 img"]);
    assert!(ran.stderr().contains("capAdd"), "stderr: {}", ran.stderr());
}

#[test]
fn start_and_stop_pass_the_identifier_through() {
    let fake = FakeRuntime::new();
    dpac(&fake).args(&["start", "web-1"]).run().passes();
    dpac(&fake).args(&["stop", "web-1"]).run().passes();
    assert_eq!(fake.calls(), vec!["start web-1", "stop web-1"]);
}

#[test]
fn delete_always_forces() {
    let fake = FakeRuntime::new();
    dpac(&fake).args(&["delete", "web-1"]).run().passes();
    assert_eq!(fake.calls(), vec!["delete --force web-1"]);
}

#[test]
fn logs_stream_through_to_stdout() {
    let fake = FakeRuntime::new();
    dpac(&fake).args(&["logs", "web-1"]).run().passes().stdout_has("log line one");
}

#[test]
fn lifecycle_verbs_reject_an_empty_identifier() {
    let fake = FakeRuntime::new();
    dpac(&fake).args(&["start", ""]).run().fails();
    dpac(&fake).args(&["delete", ""]).run().fails();
    assert!(!fake.was_invoked());
}
