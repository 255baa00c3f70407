// SPDX-License-Identifier: MIT
// Copyright (c) 2026 dpac contributors

//! Driver verb implementations

pub mod exec;
pub mod find;
pub mod lifecycle;
pub mod run;
