// ABOUTME: Nutrition configuration for calorie goal and macro target calculations
// ABOUTME: Configures BMR coefficients, activity factors, calorie bounds, and macro energy density
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Goal Configuration
//!
//! Every coefficient used by the goal engine lives here. Defaults reproduce the
//! published formulas; environment variables prefixed `NUTRIGOAL_` override
//! individual values, and [`NutritionConfig::load`] rejects inconsistent results.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology

use super::error::ConfigError;
use nutrigoal_core::constants::{activity_factors, bmr, calorie_goal, macro_energy, split};
use nutrigoal_core::models::ActivityLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Nutrition goal configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal adjustment and clamp bounds
    pub calorie_goal: CalorieGoalConfig,
    /// Energy density per macronutrient and fiber target
    pub macro_energy: MacroEnergyConfig,
    /// Tolerance for custom split sums
    pub split_validation: SplitValidationConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161), also used for `other`
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training 2x/day): 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for the given activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

/// Goal adjustment and clamp configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalorieGoalConfig {
    /// Deficit for `lose` when the profile has no rate (kcal/day)
    pub default_deficit_kcal: f64,
    /// Surplus for `gain` when the profile has no rate (kcal/day)
    pub default_surplus_kcal: f64,
    /// Lower clamp for the daily goal (kcal)
    pub min_daily_calories: i64,
    /// Upper clamp for the daily goal (kcal)
    pub max_daily_calories: i64,
}

/// Energy density per gram and fiber target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroEnergyConfig {
    /// kcal per gram of carbohydrate (4)
    pub carbs_kcal_per_g: f64,
    /// kcal per gram of protein (4)
    pub protein_kcal_per_g: f64,
    /// kcal per gram of fat (9)
    pub fat_kcal_per_g: f64,
    /// Fiber grams per kg body weight (0.5)
    pub fiber_g_per_kg: f64,
}

/// Custom split validation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitValidationConfig {
    /// Sums within this distance of 100 are accepted without renormalization
    pub sum_tolerance: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: bmr::WEIGHT_COEF,
            msj_height_coef: bmr::HEIGHT_COEF,
            msj_age_coef: bmr::AGE_COEF,
            msj_male_constant: bmr::MALE_CONSTANT,
            msj_female_constant: bmr::FEMALE_CONSTANT,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            light: activity_factors::LIGHT,
            moderate: activity_factors::MODERATE,
            active: activity_factors::ACTIVE,
            very_active: activity_factors::VERY_ACTIVE,
        }
    }
}

impl Default for CalorieGoalConfig {
    fn default() -> Self {
        Self {
            default_deficit_kcal: calorie_goal::DEFAULT_DEFICIT_KCAL,
            default_surplus_kcal: calorie_goal::DEFAULT_SURPLUS_KCAL,
            min_daily_calories: calorie_goal::MIN_DAILY_CALORIES,
            max_daily_calories: calorie_goal::MAX_DAILY_CALORIES,
        }
    }
}

impl Default for MacroEnergyConfig {
    fn default() -> Self {
        Self {
            carbs_kcal_per_g: macro_energy::CARBS_KCAL_PER_G,
            protein_kcal_per_g: macro_energy::PROTEIN_KCAL_PER_G,
            fat_kcal_per_g: macro_energy::FAT_KCAL_PER_G,
            fiber_g_per_kg: macro_energy::FIBER_G_PER_KG,
        }
    }
}

impl Default for SplitValidationConfig {
    fn default() -> Self {
        Self {
            sum_tolerance: split::SUM_TOLERANCE,
        }
    }
}

impl NutritionConfig {
    /// Load configuration: defaults, then environment overrides, then validation
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the
    /// resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "Nutrition configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.float_fields().iter().all(|v| v.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "Nutrition coefficients must be finite numbers",
            ));
        }

        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goal = &self.calorie_goal;
        if goal.default_deficit_kcal < 0.0 || goal.default_surplus_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default deficit and surplus must not be negative",
            ));
        }
        if goal.min_daily_calories <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_daily_calories must be positive",
            ));
        }
        if goal.min_daily_calories >= goal.max_daily_calories {
            return Err(ConfigError::InvalidRange(
                "min_daily_calories must be < max_daily_calories",
            ));
        }

        let energy = &self.macro_energy;
        if energy.carbs_kcal_per_g <= 0.0
            || energy.protein_kcal_per_g <= 0.0
            || energy.fat_kcal_per_g <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "kcal per gram must be positive for every macronutrient",
            ));
        }
        if energy.fiber_g_per_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fiber_g_per_kg must not be negative",
            ));
        }

        if !(0.0..1.0).contains(&self.split_validation.sum_tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "Split sum tolerance must be in [0, 1)",
            ));
        }

        Ok(())
    }

    fn float_fields(&self) -> [f64; 16] {
        [
            self.bmr.msj_weight_coef,
            self.bmr.msj_height_coef,
            self.bmr.msj_age_coef,
            self.bmr.msj_male_constant,
            self.bmr.msj_female_constant,
            self.activity_factors.sedentary,
            self.activity_factors.light,
            self.activity_factors.moderate,
            self.activity_factors.active,
            self.activity_factors.very_active,
            self.calorie_goal.default_deficit_kcal,
            self.calorie_goal.default_surplus_kcal,
            self.macro_energy.carbs_kcal_per_g,
            self.macro_energy.protein_kcal_per_g,
            self.macro_energy.fat_kcal_per_g,
            self.macro_energy.fiber_g_per_kg,
        ]
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // BMR coefficients
        Self::apply_env_var("NUTRIGOAL_BMR_WEIGHT_COEF", &mut self.bmr.msj_weight_coef)?;
        Self::apply_env_var("NUTRIGOAL_BMR_HEIGHT_COEF", &mut self.bmr.msj_height_coef)?;
        Self::apply_env_var("NUTRIGOAL_BMR_AGE_COEF", &mut self.bmr.msj_age_coef)?;
        Self::apply_env_var(
            "NUTRIGOAL_BMR_MALE_CONSTANT",
            &mut self.bmr.msj_male_constant,
        )?;
        Self::apply_env_var(
            "NUTRIGOAL_BMR_FEMALE_CONSTANT",
            &mut self.bmr.msj_female_constant,
        )?;

        // Activity factors
        Self::apply_env_var(
            "NUTRIGOAL_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var("NUTRIGOAL_ACTIVITY_LIGHT", &mut self.activity_factors.light)?;
        Self::apply_env_var(
            "NUTRIGOAL_ACTIVITY_MODERATE",
            &mut self.activity_factors.moderate,
        )?;
        Self::apply_env_var("NUTRIGOAL_ACTIVITY_ACTIVE", &mut self.activity_factors.active)?;
        Self::apply_env_var(
            "NUTRIGOAL_ACTIVITY_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;

        // Calorie goal
        Self::apply_env_var(
            "NUTRIGOAL_DEFAULT_DEFICIT_KCAL",
            &mut self.calorie_goal.default_deficit_kcal,
        )?;
        Self::apply_env_var(
            "NUTRIGOAL_DEFAULT_SURPLUS_KCAL",
            &mut self.calorie_goal.default_surplus_kcal,
        )?;
        Self::apply_env_var(
            "NUTRIGOAL_MIN_DAILY_CALORIES",
            &mut self.calorie_goal.min_daily_calories,
        )?;
        Self::apply_env_var(
            "NUTRIGOAL_MAX_DAILY_CALORIES",
            &mut self.calorie_goal.max_daily_calories,
        )?;

        // Macro energy
        Self::apply_env_var(
            "NUTRIGOAL_FIBER_G_PER_KG",
            &mut self.macro_energy.fiber_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRIGOAL_SPLIT_SUM_TOLERANCE",
            &mut self.split_validation.sum_tolerance,
        )?;

        Ok(self)
    }
}
