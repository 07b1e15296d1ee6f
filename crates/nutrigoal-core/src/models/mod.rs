// ABOUTME: Core data models for calorie and macro goal computation
// ABOUTME: Re-exports profile inputs, diet modes, and goal value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models exchanged between callers and the goal engine.
//!
//! - [`profile`]: biometric inputs, both the loose wire form and the validated form
//! - [`goals`]: calorie results, macro splits, diet modes, and gram targets

/// Biometric profile inputs and their enumerations
pub mod profile;

/// Calorie, macro, and diet mode value objects
pub mod goals;

pub use goals::{
    AggregationPeriod, CalorieResult, DietMode, IntakeProgress, MacroGoals, MacroIntake,
    MacroSplit, NutrientProgress,
};
pub use profile::{ActivityLevel, CalorieProfile, Gender, ProfileInput, WeightGoal};
