// ABOUTME: Configuration management module for server and nutrition settings
// ABOUTME: Handles environment-driven server config and validated nutrition coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the nutrigoal server
//!
//! - **Environment**: bind address, port, and timeouts from environment variables
//! - **Nutrition**: BMR, activity, calorie bound, and macro energy coefficients

/// Environment and server configuration
pub mod environment;
/// Configuration error type
pub mod error;
/// Nutrition coefficient configuration
pub mod nutrition;

pub use environment::ServerConfig;
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieGoalConfig, MacroEnergyConfig, NutritionConfig,
    SplitValidationConfig,
};
