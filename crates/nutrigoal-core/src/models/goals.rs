// ABOUTME: Value objects for calorie results, macro splits, diet modes, and gram targets
// ABOUTME: Derived fresh per request and never persisted by the goal engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{diet_modes, macro_energy, split};
use serde::{Deserialize, Serialize};

/// Daily energy figures derived from a profile
///
/// `daily_calorie_goal` is always within the configured clamp bounds
/// (800-5000 kcal by default). `tdee` is not clamped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalorieResult {
    /// Rounded total daily energy expenditure (kcal)
    pub tdee: i64,
    /// Goal-adjusted, clamped daily calorie target (kcal)
    pub daily_calorie_goal: i64,
}

/// Integer percentage split of calories across carbs, protein, and fat
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MacroSplit {
    /// Carbohydrate share of calories (%)
    #[serde(rename = "carbsPercentage")]
    pub carbs: u32,
    /// Protein share of calories (%)
    #[serde(rename = "proteinPercentage")]
    pub protein: u32,
    /// Fat share of calories (%)
    #[serde(rename = "fatPercentage")]
    pub fat: u32,
}

impl MacroSplit {
    /// Create a split from carbs, protein, and fat percentages
    #[must_use]
    pub const fn new(carbs: u32, protein: u32, fat: u32) -> Self {
        Self {
            carbs,
            protein,
            fat,
        }
    }

    /// Sum of the three percentages, `None` on overflow
    #[must_use]
    pub const fn total(&self) -> Option<u32> {
        match self.carbs.checked_add(self.protein) {
            Some(partial) => partial.checked_add(self.fat),
            None => None,
        }
    }

    /// Whether the split sums to exactly 100
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.total(), Some(split::TOTAL_PERCENT))
    }

    /// Whether the split equals the given triple exactly
    #[must_use]
    pub const fn matches(&self, carbs: u32, protein: u32, fat: u32) -> bool {
        self.carbs == carbs && self.protein == protein && self.fat == fat
    }
}

/// Named macro split preset, or the passthrough `custom` bucket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DietMode {
    /// Stable identifier (`balanced`, `keto`, `custom`, ...)
    pub id: String,
    /// Display name
    pub name: String,
    /// Fixed split; `None` for the custom bucket
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub split: Option<MacroSplit>,
    /// Short description for display
    pub description: String,
}

impl DietMode {
    /// Create a preset with a fixed split
    pub fn preset(
        id: impl Into<String>,
        name: impl Into<String>,
        split: MacroSplit,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            split: Some(split),
            description: description.into(),
        }
    }

    /// Create the custom bucket, which has no fixed split
    pub fn custom(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: diet_modes::CUSTOM.to_owned(),
            name: name.into(),
            split: None,
            description: description.into(),
        }
    }

    /// Whether this is the custom bucket
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.split.is_none()
    }
}

/// Aggregation window for gram targets
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AggregationPeriod {
    /// One day
    #[default]
    Daily,
    /// Seven days
    Weekly,
}

impl AggregationPeriod {
    /// Factor applied to rounded daily gram amounts
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        match self {
            Self::Daily => 1,
            Self::Weekly => macro_energy::DAYS_PER_WEEK,
        }
    }
}

/// Gram targets per macronutrient
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MacroGoals {
    /// Carbohydrate grams
    pub carbs: u32,
    /// Protein grams
    pub protein: u32,
    /// Fat grams
    pub fat: u32,
    /// Fiber grams
    pub fiber: u32,
}

/// Grams actually consumed, as logged by the caller
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroIntake {
    /// Carbohydrate grams
    #[serde(default)]
    pub carbs: f64,
    /// Protein grams
    #[serde(default)]
    pub protein: f64,
    /// Fat grams
    #[serde(default)]
    pub fat: f64,
    /// Fiber grams
    #[serde(default)]
    pub fiber: f64,
}

/// Consumed-versus-goal figures for one nutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutrientProgress {
    /// Grams consumed
    pub consumed: f64,
    /// Gram target
    pub goal: u32,
    /// Grams left before reaching the target, never negative
    pub remaining: f64,
    /// Consumed as a rounded percentage of the target (may exceed 100)
    pub percent: u32,
}

/// Consumed-versus-goal figures for every tracked nutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IntakeProgress {
    /// Carbohydrates
    pub carbs: NutrientProgress,
    /// Protein
    pub protein: NutrientProgress,
    /// Fat
    pub fat: NutrientProgress,
    /// Fiber
    pub fiber: NutrientProgress,
}
