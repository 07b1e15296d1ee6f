// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference profiles, and router construction helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutrigoal_server`

use nutrigoal_server::{
    models::{ActivityLevel, CalorieProfile, Gender, ProfileInput, WeightGoal},
    resources::ServerResources,
    routes,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Male, 30 years, 194 cm, 80 kg, moderate activity.
///
/// BMR = 800 + 1212.5 - 150 + 5 = 1867.5, TDEE = 2894.625 (rounds to 2895).
pub fn reference_profile(goal: WeightGoal, weight_change_rate: Option<f64>) -> CalorieProfile {
    CalorieProfile {
        gender: Gender::Male,
        age: 30,
        height_cm: 194.0,
        weight_kg: 80.0,
        activity_level: ActivityLevel::Moderate,
        goal,
        weight_change_rate,
    }
}

/// Raw payload equivalent of [`reference_profile`] with a maintain goal
pub fn reference_input() -> ProfileInput {
    ProfileInput {
        gender: Some("male".into()),
        age: Some(30.0),
        height: Some(194.0),
        weight: Some(80.0),
        activity_level: Some("moderate".into()),
        goal: Some("maintain".into()),
        ..ProfileInput::default()
    }
}

/// Default resources shared by route tests
pub fn create_test_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::default())
}

/// Full application router with default resources
pub fn create_test_router() -> axum::Router {
    routes::build_router(create_test_resources())
}
