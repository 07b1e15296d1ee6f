// ABOUTME: Compares consumed macronutrient grams against daily or weekly gram targets
// ABOUTME: Produces remaining grams and percent-of-goal figures for progress bars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrigoal_core::models::{IntakeProgress, MacroGoals, MacroIntake, NutrientProgress};

fn nutrient_progress(consumed: f64, goal: u32) -> NutrientProgress {
    let consumed = if consumed.is_finite() {
        consumed.max(0.0)
    } else {
        0.0
    };
    let target = f64::from(goal);
    let percent = if goal == 0 {
        0
    } else {
        (consumed / target * 100.0).round() as u32
    };

    NutrientProgress {
        consumed,
        goal,
        remaining: (target - consumed).max(0.0),
        percent,
    }
}

/// Per-nutrient consumed-versus-goal comparison
///
/// Negative or non-finite intake is treated as zero. Percent is 0 when the
/// goal itself is 0.
#[must_use]
pub fn compare_intake(consumed: &MacroIntake, goals: &MacroGoals) -> IntakeProgress {
    IntakeProgress {
        carbs: nutrient_progress(consumed.carbs, goals.carbs),
        protein: nutrient_progress(consumed.protein, goals.protein),
        fat: nutrient_progress(consumed.fat, goals.fat),
        fiber: nutrient_progress(consumed.fiber, goals.fiber),
    }
}
