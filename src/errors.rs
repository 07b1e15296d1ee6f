// ABOUTME: Unified error handling re-exported from the nutrigoal-core crate
// ABOUTME: Preserves crate::errors import paths for handlers, binaries, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrigoal_core::errors::*;
