// ABOUTME: Profile, calorie, diet mode, and macro target models from nutrigoal-core
// ABOUTME: Preserves crate::models import paths for handlers, binaries, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrigoal_core::models::*;
