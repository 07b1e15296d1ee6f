// ABOUTME: Biometric profile models used to derive BMR, TDEE, and calorie goals
// ABOUTME: Converts loosely-typed request payloads into a validated CalorieProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::profile_limits;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Gender as stored on the profile
///
/// Only `Male` selects the male Mifflin-St Jeor constant; `Female` and
/// `Other` share the female constant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Any other value
    Other,
}

impl Gender {
    /// Parse gender from string; anything but an exact match becomes `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "male" => Self::Male,
            "female" => Self::Female,
            "other" => Self::Other,
            unknown => {
                debug!(gender = %unknown, "Unrecognized gender, using shared female/other formula");
                Self::Other
            }
        }
    }
}

/// Activity level selecting the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Physical job or twice-daily training
    VeryActive,
}

impl ActivityLevel {
    /// Wire name of this level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            other => Err(AppError::invalid_enum("activityLevel", other)),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight goal driving the calorie adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Hold current weight
    Maintain,
    /// Caloric deficit
    Lose,
    /// Caloric surplus
    Gain,
}

impl WeightGoal {
    /// Parse goal from string; unrecognized values fall through to `Maintain`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "lose" => Self::Lose,
            "gain" => Self::Gain,
            "maintain" => Self::Maintain,
            unknown => {
                debug!(goal = %unknown, "Unrecognized goal, treating as maintain");
                Self::Maintain
            }
        }
    }
}

/// Profile payload exactly as a caller submits it
///
/// Every field is optional here; [`ProfileInput::into_profile`] performs the
/// required-field and enum checks once, before any computation runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    /// Gender string
    pub gender: Option<String>,
    /// Age in years
    pub age: Option<f64>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    /// Activity level string
    pub activity_level: Option<String>,
    /// Goal string
    pub goal: Option<String>,
    /// Optional target weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Optional daily kcal delta for lose/gain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_change_rate: Option<f64>,
}

// Only absent or empty strings count as missing; values are matched verbatim.
fn required_str<'a>(value: Option<&'a str>, field: &str) -> AppResult<&'a str> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(AppError::missing_field(field)),
    }
}

fn required_number(value: Option<f64>, field: &str) -> AppResult<f64> {
    match value {
        Some(n) if n != 0.0 && !n.is_nan() => Ok(n),
        _ => Err(AppError::missing_field(field)),
    }
}

impl ProfileInput {
    /// Validate required fields and convert to a typed [`CalorieProfile`]
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if a required field is absent, empty, or zero
    /// - `InvalidEnumValue` if the activity level is not recognized
    /// - `ValueOutOfRange` if age is negative or fractional
    pub fn into_profile(&self) -> AppResult<CalorieProfile> {
        let gender = Gender::from_str_lossy(required_str(self.gender.as_deref(), "gender")?);
        let age = required_number(self.age, "age")?;
        let height_cm = required_number(self.height, "height")?;
        let weight_kg = required_number(self.weight, "weight")?;
        let activity_level: ActivityLevel =
            required_str(self.activity_level.as_deref(), "activityLevel")?.parse()?;
        let goal = WeightGoal::from_str_lossy(required_str(self.goal.as_deref(), "goal")?);

        if age < 0.0 || age.fract() != 0.0 || age > f64::from(u32::MAX) {
            return Err(AppError::out_of_range(
                "age",
                format!("Age must be a whole number of years, got {age}"),
            ));
        }

        Ok(CalorieProfile {
            gender,
            age: age as u32,
            height_cm,
            weight_kg,
            activity_level,
            goal,
            weight_change_rate: self.weight_change_rate,
        })
    }
}

/// Validated snapshot of the fields the calorie calculation reads
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalorieProfile {
    /// Gender
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: WeightGoal,
    /// Optional daily kcal delta for lose/gain
    pub weight_change_rate: Option<f64>,
}

impl CalorieProfile {
    /// Enforce the accepted profile ranges (age 13-120, height 100-250 cm, weight 30-300 kg)
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first field outside its range
    pub fn check_limits(&self) -> AppResult<()> {
        if !(profile_limits::MIN_AGE..=profile_limits::MAX_AGE).contains(&self.age) {
            return Err(AppError::out_of_range(
                "age",
                format!(
                    "Age must be between {} and {} years",
                    profile_limits::MIN_AGE,
                    profile_limits::MAX_AGE
                ),
            ));
        }
        if !(profile_limits::MIN_HEIGHT_CM..=profile_limits::MAX_HEIGHT_CM)
            .contains(&self.height_cm)
        {
            return Err(AppError::out_of_range(
                "height",
                format!(
                    "Height must be between {} and {} cm",
                    profile_limits::MIN_HEIGHT_CM,
                    profile_limits::MAX_HEIGHT_CM
                ),
            ));
        }
        if !(profile_limits::MIN_WEIGHT_KG..=profile_limits::MAX_WEIGHT_KG)
            .contains(&self.weight_kg)
        {
            return Err(AppError::out_of_range(
                "weight",
                format!(
                    "Weight must be between {} and {} kg",
                    profile_limits::MIN_WEIGHT_KG,
                    profile_limits::MAX_WEIGHT_KG
                ),
            ));
        }
        Ok(())
    }
}
