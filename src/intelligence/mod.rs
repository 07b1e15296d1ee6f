// ABOUTME: Goal engine: calorie goal calculation, diet mode catalog, and macro allocation
// ABOUTME: Pure synchronous functions over typed inputs and injected configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Profile snapshot → [`goal_calculator`] → daily calorie goal →
//! [`macro_allocator`] (split chosen through [`diet_modes`]) → gram targets.
//! [`intake_progress`] compares logged intake against those targets.

/// Diet mode catalog and split classification
pub mod diet_modes;
/// Mifflin-St Jeor BMR, TDEE, and goal-adjusted calorie targets
pub mod goal_calculator;
/// Consumed-versus-goal comparison
pub mod intake_progress;
/// Percentage split to gram target conversion
pub mod macro_allocator;

pub use diet_modes::DietModeRegistry;
pub use goal_calculator::{
    adjust_for_goal, calculate_bmr, calculate_tdee, compute_calorie_goal,
    compute_calorie_goal_from_input,
};
pub use intake_progress::compare_intake;
pub use macro_allocator::{
    allocate, allocate_for_mode, is_valid_split, normalize_split, RawSplit,
};
