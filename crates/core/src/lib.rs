// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dpac-core: container discovery and metadata normalization for the
//! dpac DevPod driver.
//!
//! The Apple `container` CLI has shipped several incompatible JSON shapes
//! for its listing and inspect output. This crate parses whatever shape
//! arrives, correlates one entry with a DevPod workspace identifier, and
//! normalizes it into the single `ContainerDetails` record DevPod expects.
//! Everything here is pure: process invocation lives in `dpac-runtime`.

pub mod details;
pub mod matcher;
pub mod normalize;
pub mod options;
pub mod parse;
pub mod record;

pub use details::{ContainerDetails, DetailsConfig, DetailsState};
pub use matcher::{find_match, CORRELATION_LABEL};
pub use normalize::{normalize, normalize_state};
pub use options::{Mount, RunOptions};
pub use parse::{parse_inspect, parse_snapshot, ParseError};
pub use record::ContainerRecord;
