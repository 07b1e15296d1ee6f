// ABOUTME: Formula coefficients, limits, and service defaults from nutrigoal-core
// ABOUTME: Preserves crate::constants import paths for handlers, binaries, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrigoal_core::constants::*;
