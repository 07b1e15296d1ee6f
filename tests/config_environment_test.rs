// ABOUTME: Integration tests for environment-driven server and nutrition configuration
// ABOUTME: Validates defaults, overrides, parse failures, and rejected coefficient sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrigoal_server::config::{ConfigError, NutritionConfig, ServerConfig};
use serial_test::serial;
use std::env;
use std::time::Duration;

const SERVER_VARS: [&str; 4] = [
    "HTTP_PORT",
    "HTTP_HOST",
    "REQUEST_TIMEOUT_SECS",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_server_vars() {
    for var in SERVER_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_server_config_defaults() {
    clear_server_vars();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8081");
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.cors_allowed_origins, "*");
}

#[test]
#[serial]
fn test_server_config_overrides() {
    clear_server_vars();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("HTTP_HOST", "0.0.0.0");
    env::set_var("REQUEST_TIMEOUT_SECS", "5");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9090");
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert!(config.summary().contains("0.0.0.0:9090"));

    clear_server_vars();
}

#[test]
#[serial]
fn test_server_config_rejects_bad_port() {
    clear_server_vars();
    env::set_var("HTTP_PORT", "not-a-port");

    let err = ServerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("HTTP_PORT"));

    clear_server_vars();
}

#[test]
#[serial]
fn test_nutrition_config_env_override() {
    env::set_var("NUTRIGOAL_DEFAULT_DEFICIT_KCAL", "500");
    env::set_var("NUTRIGOAL_MIN_DAILY_CALORIES", "1200");

    let config = NutritionConfig::load().unwrap();
    assert!((config.calorie_goal.default_deficit_kcal - 500.0).abs() < f64::EPSILON);
    assert_eq!(config.calorie_goal.min_daily_calories, 1200);
    assert_eq!(config.calorie_goal.max_daily_calories, 5000);

    env::remove_var("NUTRIGOAL_DEFAULT_DEFICIT_KCAL");
    env::remove_var("NUTRIGOAL_MIN_DAILY_CALORIES");
}

#[test]
#[serial]
fn test_nutrition_config_parse_failure() {
    env::set_var("NUTRIGOAL_ACTIVITY_MODERATE", "fast");

    let err = NutritionConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("NUTRIGOAL_ACTIVITY_MODERATE"));

    env::remove_var("NUTRIGOAL_ACTIVITY_MODERATE");
}

#[test]
#[serial]
fn test_nutrition_config_inverted_bounds_rejected() {
    env::set_var("NUTRIGOAL_MAX_DAILY_CALORIES", "700");

    let err = NutritionConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRange(_)));

    env::remove_var("NUTRIGOAL_MAX_DAILY_CALORIES");
}

#[test]
#[serial]
fn test_nutrition_config_nan_override_rejected() {
    env::set_var("NUTRIGOAL_BMR_AGE_COEF", "NaN");

    let err = NutritionConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));

    env::remove_var("NUTRIGOAL_BMR_AGE_COEF");
}
