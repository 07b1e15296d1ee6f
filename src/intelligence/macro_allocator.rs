// ABOUTME: Converts a daily calorie goal and macro percentage split into gram targets
// ABOUTME: Also renormalizes user-edited custom splits so they sum to exactly 100 percent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Allocator
//!
//! Gram amounts are rounded per day first and only then multiplied by the
//! aggregation period, so a weekly target is always seven times a daily one.

use crate::config::{MacroEnergyConfig, NutritionConfig, SplitValidationConfig};
use nutrigoal_core::constants::split::TOTAL_PERCENT;
use nutrigoal_core::errors::{AppError, AppResult};
use nutrigoal_core::models::{AggregationPeriod, DietMode, MacroGoals, MacroSplit};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw percentage triple as edited by a user, before normalization
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RawSplit {
    /// Carbohydrate percentage
    pub carbs: f64,
    /// Protein percentage
    pub protein: f64,
    /// Fat percentage
    pub fat: f64,
}

fn grams_for(calories: i64, percent: u32, kcal_per_g: f64) -> u32 {
    let grams = (calories as f64 * f64::from(percent) / 100.0 / kcal_per_g).round();
    grams.max(0.0) as u32
}

/// Compute gram targets for a calorie goal and split
#[must_use]
pub fn allocate(
    calories: i64,
    split: &MacroSplit,
    body_weight_kg: f64,
    period: AggregationPeriod,
    config: &MacroEnergyConfig,
) -> MacroGoals {
    let multiplier = period.multiplier();
    let fiber = (body_weight_kg * config.fiber_g_per_kg).round().max(0.0) as u32;

    // Saturate rather than wrap for inputs far outside any real diet.
    MacroGoals {
        carbs: grams_for(calories, split.carbs, config.carbs_kcal_per_g)
            .saturating_mul(multiplier),
        protein: grams_for(calories, split.protein, config.protein_kcal_per_g)
            .saturating_mul(multiplier),
        fat: grams_for(calories, split.fat, config.fat_kcal_per_g).saturating_mul(multiplier),
        fiber: fiber.saturating_mul(multiplier),
    }
}

/// Whether a percentage triple sums to 100 within the configured tolerance
#[must_use]
pub fn is_valid_split(carbs: f64, protein: f64, fat: f64, config: &SplitValidationConfig) -> bool {
    (carbs + protein + fat - f64::from(TOTAL_PERCENT)).abs() <= config.sum_tolerance
}

/// Rescale a percentage triple so it sums to exactly 100
///
/// Carbs and protein are scaled and rounded; fat takes the remainder.
///
/// # Errors
///
/// Returns `InvalidInput` if any component is negative or non-finite, or if
/// the components sum to zero
pub fn normalize_split(
    carbs: f64,
    protein: f64,
    fat: f64,
    config: &SplitValidationConfig,
) -> AppResult<MacroSplit> {
    if [carbs, protein, fat].iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(AppError::invalid_input(
            "Macro percentages must be finite and non-negative",
        ));
    }

    let sum = carbs + protein + fat;
    if sum == 0.0 || !sum.is_finite() {
        return Err(AppError::invalid_input(
            "Macro percentages must have a finite, non-zero sum",
        ));
    }

    let factor = if is_valid_split(carbs, protein, fat, config) {
        1.0
    } else {
        f64::from(TOTAL_PERCENT) / sum
    };

    let mut adjusted_carbs = (carbs * factor).round() as u32;
    let mut adjusted_protein = (protein * factor).round() as u32;

    // Rounding both halves up can overshoot; trim from the larger share.
    let overshoot = (adjusted_carbs + adjusted_protein).saturating_sub(TOTAL_PERCENT);
    if overshoot > 0 {
        if adjusted_carbs >= adjusted_protein {
            adjusted_carbs -= overshoot;
        } else {
            adjusted_protein -= overshoot;
        }
    }

    let normalized = MacroSplit::new(
        adjusted_carbs,
        adjusted_protein,
        TOTAL_PERCENT - adjusted_carbs - adjusted_protein,
    );
    debug!(carbs, protein, fat, factor, ?normalized, "Custom split normalized");
    Ok(normalized)
}

/// Resolve the effective split for a diet mode and compute gram targets
///
/// Presets use their fixed split and ignore `custom_split`. The custom mode
/// requires one and normalizes it first.
///
/// # Errors
///
/// - `MissingRequiredField` (`customSplit`) if the mode is custom and no split
///   was supplied
/// - `InvalidInput` if the custom split cannot be normalized
pub fn allocate_for_mode(
    calories: i64,
    mode: &DietMode,
    custom_split: Option<RawSplit>,
    body_weight_kg: f64,
    period: AggregationPeriod,
    config: &NutritionConfig,
) -> AppResult<(MacroSplit, MacroGoals)> {
    let split = match (mode.split, custom_split) {
        (Some(preset), _) => preset,
        (None, Some(raw)) => {
            normalize_split(raw.carbs, raw.protein, raw.fat, &config.split_validation)?
        }
        (None, None) => return Err(AppError::missing_field("customSplit")),
    };

    Ok((
        split,
        allocate(calories, &split, body_weight_kg, period, &config.macro_energy),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrigoal_core::errors::ErrorCode;

    #[test]
    fn test_keto_allocation() {
        let goals = allocate(
            2000,
            &MacroSplit::new(5, 20, 75),
            70.0,
            AggregationPeriod::Daily,
            &MacroEnergyConfig::default(),
        );
        assert_eq!(
            goals,
            MacroGoals {
                carbs: 25,
                protein: 100,
                fat: 167,
                fiber: 35,
            }
        );
    }

    #[test]
    fn test_weekly_rounds_before_scaling() {
        let config = MacroEnergyConfig::default();
        let split = MacroSplit::new(5, 20, 75);
        let daily = allocate(2000, &split, 70.0, AggregationPeriod::Daily, &config);
        let weekly = allocate(2000, &split, 70.0, AggregationPeriod::Weekly, &config);
        // 166.67g/day rounds to 167 before the x7
        assert_eq!(weekly.fat, 1169);
        assert_eq!(weekly.carbs, daily.carbs * 7);
        assert_eq!(weekly.fiber, daily.fiber * 7);
    }

    #[test]
    fn test_extreme_inputs_saturate_instead_of_wrapping() {
        let config = MacroEnergyConfig::default();
        let goals = allocate(
            2000,
            &MacroSplit::new(50, 20, 30),
            1.0e10,
            AggregationPeriod::Weekly,
            &config,
        );
        assert_eq!(goals.fiber, u32::MAX);
        assert_eq!(goals.carbs, 250 * 7);

        let keto = allocate(
            100_000_000_000,
            &MacroSplit::new(5, 20, 75),
            70.0,
            AggregationPeriod::Weekly,
            &config,
        );
        assert_eq!(keto.fat, u32::MAX);
        assert_eq!(keto.fiber, 35 * 7);
    }

    #[test]
    fn test_normalize_absorbs_residue_in_fat() {
        let config = SplitValidationConfig::default();
        let split = normalize_split(45.0, 45.0, 45.0, &config).unwrap();
        assert_eq!(split, MacroSplit::new(33, 33, 34));
    }

    #[test]
    fn test_normalize_within_tolerance_is_unscaled() {
        let config = SplitValidationConfig::default();
        assert!(is_valid_split(49.95, 20.0, 30.0, &config));
        let split = normalize_split(49.95, 20.0, 30.0, &config).unwrap();
        assert_eq!(split, MacroSplit::new(50, 20, 30));
    }

    #[test]
    fn test_normalize_never_yields_negative_fat() {
        let config = SplitValidationConfig::default();
        // 50.5 + 49.5 + 0 sums to 100 but both halves round up
        let split = normalize_split(50.5, 49.5, 0.0, &config).unwrap();
        assert!(split.is_complete());
        assert_eq!(split.fat, 0);
    }

    #[test]
    fn test_normalize_rejects_degenerate_input() {
        let config = SplitValidationConfig::default();
        let zero = normalize_split(0.0, 0.0, 0.0, &config).unwrap_err();
        assert_eq!(zero.code, ErrorCode::InvalidInput);
        assert!(normalize_split(-10.0, 60.0, 50.0, &config).is_err());
        assert!(normalize_split(f64::NAN, 60.0, 50.0, &config).is_err());
        assert!(normalize_split(f64::MAX, f64::MAX, 0.0, &config).is_err());
    }

    #[test]
    fn test_custom_mode_requires_split() {
        let err = allocate_for_mode(
            2000,
            &DietMode::custom("Custom", ""),
            None,
            70.0,
            AggregationPeriod::Daily,
            &NutritionConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(err.field(), Some("customSplit"));
    }
}
