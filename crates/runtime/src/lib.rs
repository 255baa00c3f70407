// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dpac-runtime: invocation of the Apple `container` CLI.
//!
//! Every driver verb ends in one `container` process. Three invocation
//! modes cover them all: captured output for discovery, full stdio
//! passthrough for exec/logs (DevPod pipes binary data through those
//! streams), and streamed output for lifecycle verbs.

pub mod error;
pub mod invoke;

pub use error::RuntimeError;
pub use invoke::{binary_path, capture, passthrough, stream, DEFAULT_BINARY};
