// ABOUTME: Daily calorie goal calculation using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, goal-adjusted and clamped daily calorie targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Calculator
//!
//! Derives BMR, TDEE, and a bounded daily calorie goal from a profile snapshot.
//! Pure arithmetic over the supplied profile and configuration.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{ActivityFactorsConfig, BmrConfig, CalorieGoalConfig, NutritionConfig};
use nutrigoal_core::errors::{AppError, AppResult};
use nutrigoal_core::models::{
    ActivityLevel, CalorieProfile, CalorieResult, Gender, ProfileInput, WeightGoal,
};
use tracing::debug;

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Male: +5
/// - Female and other: -161
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female | Gender::Other => config.msj_female_constant,
    };

    config.msj_age_coef.mul_add(
        f64::from(age),
        config
            .msj_weight_coef
            .mul_add(weight_kg, config.msj_height_coef * height_cm),
    ) + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE), unrounded
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Apply the goal adjustment to an unrounded TDEE and round
///
/// `lose` subtracts the profile's rate (or the default deficit when the rate
/// is absent or zero), `gain` adds it, `maintain` leaves TDEE unchanged.
#[must_use]
pub fn adjust_for_goal(
    tdee: f64,
    goal: WeightGoal,
    weight_change_rate: Option<f64>,
    config: &CalorieGoalConfig,
) -> i64 {
    let rate = weight_change_rate.filter(|r| *r != 0.0 && r.is_finite());
    let adjusted = match goal {
        WeightGoal::Lose => tdee - rate.unwrap_or(config.default_deficit_kcal),
        WeightGoal::Gain => tdee + rate.unwrap_or(config.default_surplus_kcal),
        WeightGoal::Maintain => tdee,
    };
    adjusted.round() as i64
}

/// Compute TDEE and the clamped daily calorie goal for a validated profile
///
/// # Errors
///
/// Returns `MissingRequiredField` if age, height, or weight is zero
pub fn compute_calorie_goal(
    profile: &CalorieProfile,
    config: &NutritionConfig,
) -> AppResult<CalorieResult> {
    if profile.age == 0 {
        return Err(AppError::missing_field("age"));
    }
    if profile.height_cm == 0.0 || profile.height_cm.is_nan() {
        return Err(AppError::missing_field("height"));
    }
    if profile.weight_kg == 0.0 || profile.weight_kg.is_nan() {
        return Err(AppError::missing_field("weight"));
    }

    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let goal_calories = adjust_for_goal(
        tdee,
        profile.goal,
        profile.weight_change_rate,
        &config.calorie_goal,
    );
    let daily_calorie_goal = goal_calories.clamp(
        config.calorie_goal.min_daily_calories,
        config.calorie_goal.max_daily_calories,
    );

    debug!(
        bmr,
        tdee,
        goal = ?profile.goal,
        goal_calories,
        daily_calorie_goal,
        "Calorie goal computed"
    );

    Ok(CalorieResult {
        tdee: tdee.round() as i64,
        daily_calorie_goal,
    })
}

/// Validate a raw profile payload and compute its calorie goal
///
/// # Errors
///
/// - `MissingRequiredField` if a required field is absent, empty, or zero
/// - `InvalidEnumValue` if the activity level is not recognized
pub fn compute_calorie_goal_from_input(
    input: &ProfileInput,
    config: &NutritionConfig,
) -> AppResult<CalorieResult> {
    let profile = input.into_profile()?;
    compute_calorie_goal(&profile, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrigoal_core::errors::ErrorCode;

    // BMR = 800 + 1212.5 - 150 + 5 = 1867.5, TDEE = 1867.5 x 1.55 = 2894.625
    fn reference_profile(goal: WeightGoal, rate: Option<f64>) -> CalorieProfile {
        CalorieProfile {
            gender: Gender::Male,
            age: 30,
            height_cm: 194.0,
            weight_kg: 80.0,
            activity_level: ActivityLevel::Moderate,
            goal,
            weight_change_rate: rate,
        }
    }

    #[test]
    fn test_bmr_male() {
        let config = BmrConfig::default();
        // 800 + 1125 - 150 + 5
        let bmr = calculate_bmr(80.0, 180.0, 30, Gender::Male, &config);
        assert!((bmr - 1780.0).abs() < 1e-9);

        let bmr = calculate_bmr(80.0, 194.0, 30, Gender::Male, &config);
        assert!((bmr - 1867.5).abs() < 1e-9);
    }

    #[test]
    fn test_other_uses_female_constant() {
        let config = BmrConfig::default();
        let female = calculate_bmr(60.0, 165.0, 25, Gender::Female, &config);
        let other = calculate_bmr(60.0, 165.0, 25, Gender::Other, &config);
        assert!((female - 1345.25).abs() < 1e-9);
        assert!((female - other).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tdee_unrounded() {
        let factors = ActivityFactorsConfig::default();
        let tdee = calculate_tdee(1867.5, ActivityLevel::Moderate, &factors);
        assert!((tdee - 2_894.625).abs() < 1e-9);

        let tdee = calculate_tdee(1780.0, ActivityLevel::Sedentary, &factors);
        assert!((tdee - 2136.0).abs() < 1e-9);
    }

    #[test]
    fn test_maintain_reference() {
        let config = NutritionConfig::default();
        let result = compute_calorie_goal(&reference_profile(WeightGoal::Maintain, None), &config)
            .unwrap();
        assert_eq!(result.tdee, 2895);
        assert_eq!(result.daily_calorie_goal, 2895);
    }

    #[test]
    fn test_lose_default_and_explicit_rate() {
        let config = NutritionConfig::default();
        let default_rate =
            compute_calorie_goal(&reference_profile(WeightGoal::Lose, None), &config).unwrap();
        assert_eq!(default_rate.daily_calorie_goal, 2495);
        assert_eq!(default_rate.tdee, 2895);

        let explicit =
            compute_calorie_goal(&reference_profile(WeightGoal::Lose, Some(600.0)), &config)
                .unwrap();
        assert_eq!(explicit.daily_calorie_goal, 2295);
    }

    #[test]
    fn test_zero_rate_falls_back_to_default() {
        let config = NutritionConfig::default();
        let result =
            compute_calorie_goal(&reference_profile(WeightGoal::Gain, Some(0.0)), &config)
                .unwrap();
        assert_eq!(result.daily_calorie_goal, 3295);
    }

    #[test]
    fn test_goal_clamped_but_tdee_is_not() {
        let mut profile = reference_profile(WeightGoal::Lose, Some(2500.0));
        let config = NutritionConfig::default();
        let low = compute_calorie_goal(&profile, &config).unwrap();
        assert_eq!(low.daily_calorie_goal, 800);
        assert_eq!(low.tdee, 2895);

        profile.goal = WeightGoal::Gain;
        profile.weight_change_rate = Some(4000.0);
        let high = compute_calorie_goal(&profile, &config).unwrap();
        assert_eq!(high.daily_calorie_goal, 5000);
    }

    #[test]
    fn test_zero_age_is_missing() {
        let mut profile = reference_profile(WeightGoal::Maintain, None);
        profile.age = 0;
        let err = compute_calorie_goal(&profile, &NutritionConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(err.field(), Some("age"));
    }
}
