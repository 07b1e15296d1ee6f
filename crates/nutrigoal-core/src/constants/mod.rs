// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Physiological coefficients, calorie bounds, profile ranges, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Values in [`bmr`], [`activity_factors`],
//! [`calorie_goal`] and [`macro_energy`] are the defaults behind
//! `NutritionConfig`; deployments may override them through the environment.

/// Mifflin-St Jeor coefficients (Mifflin et al. 1990, DOI: 10.1093/ajcn/51.2.241)
pub mod bmr {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age
    pub const AGE_COEF: f64 = -5.0;
    /// Constant term for male profiles
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Constant term for female and other profiles
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// TDEE activity multipliers
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Physical job or twice-daily training
    pub const VERY_ACTIVE: f64 = 1.9;
}

/// Goal adjustment and clamp bounds for the daily calorie goal
pub mod calorie_goal {
    /// Deficit applied for `lose` when no rate is supplied (kcal/day)
    pub const DEFAULT_DEFICIT_KCAL: f64 = 400.0;
    /// Surplus applied for `gain` when no rate is supplied (kcal/day)
    pub const DEFAULT_SURPLUS_KCAL: f64 = 400.0;
    /// Lowest daily calorie goal ever returned
    pub const MIN_DAILY_CALORIES: i64 = 800;
    /// Highest daily calorie goal ever returned
    pub const MAX_DAILY_CALORIES: i64 = 5000;
}

/// Energy density and fiber targets used by the macro allocator
pub mod macro_energy {
    /// kcal per gram of carbohydrate
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// kcal per gram of protein
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// kcal per gram of fat
    pub const FAT_KCAL_PER_G: f64 = 9.0;
    /// Fiber grams per kg of body weight
    pub const FIBER_G_PER_KG: f64 = 0.5;
    /// Days in the weekly aggregation view
    pub const DAYS_PER_WEEK: u32 = 7;
}

/// Macro split validation
pub mod split {
    /// Percentages must total this value
    pub const TOTAL_PERCENT: u32 = 100;
    /// A raw sum within this distance of 100 needs no renormalization
    pub const SUM_TOLERANCE: f64 = 0.1;
}

/// Accepted profile ranges, enforced at the HTTP boundary
pub mod profile_limits {
    /// Minimum age in years
    pub const MIN_AGE: u32 = 13;
    /// Maximum age in years
    pub const MAX_AGE: u32 = 120;
    /// Minimum height in cm
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum height in cm
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum weight in kg
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum weight in kg
    pub const MAX_WEIGHT_KG: f64 = 300.0;
}

/// Built-in diet mode identifiers
pub mod diet_modes {
    /// Default balanced split
    pub const BALANCED: &str = "balanced";
    /// Ketogenic split
    pub const KETO: &str = "keto";
    /// Passthrough bucket for user-defined splits
    pub const CUSTOM: &str = "custom";
}

/// Service names for structured logging
pub mod service_names {
    /// HTTP server binary
    pub const NUTRIGOAL_SERVER: &str = "nutrigoal-server";
}

/// Server defaults
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default bind address
    pub const HTTP_HOST: &str = "127.0.0.1";
    /// Default per-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Environment variable names
pub mod env_config {
    /// HTTP port override
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address override
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Request timeout override
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Comma-separated list of allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}
