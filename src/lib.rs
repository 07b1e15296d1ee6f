// ABOUTME: Main library entry point for the nutrigoal calorie and macro goal service
// ABOUTME: Exposes the goal engine, configuration, logging, and axum HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrigoal Server
//!
//! Daily calorie and macronutrient goal engine with a small REST surface.
//!
//! ## Architecture
//!
//! - **Intelligence**: Mifflin-St Jeor calorie goals, diet mode catalog, macro allocation
//! - **Config**: environment-driven server settings and validated nutrition coefficients
//! - **Routes**: axum handlers over shared, immutable [`resources::ServerResources`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrigoal_server::config::NutritionConfig;
//! use nutrigoal_server::errors::AppResult;
//! use nutrigoal_server::intelligence::compute_calorie_goal_from_input;
//! use nutrigoal_server::models::ProfileInput;
//!
//! fn main() -> AppResult<()> {
//!     let input = ProfileInput {
//!         gender: Some("female".into()),
//!         age: Some(34.0),
//!         height: Some(168.0),
//!         weight: Some(64.0),
//!         activity_level: Some("light".into()),
//!         goal: Some("lose".into()),
//!         ..ProfileInput::default()
//!     };
//!     let result = compute_calorie_goal_from_input(&input, &NutritionConfig::default())?;
//!     println!("Daily goal: {} kcal", result.daily_calorie_goal);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;
/// Formula coefficients, limits, and defaults
pub mod constants;
/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;
/// Calorie goal calculation, diet modes, and macro allocation
pub mod intelligence;
/// Structured logging setup
pub mod logging;
/// HTTP middleware
pub mod middleware;
/// Profile, goal, and macro models
pub mod models;
/// Shared server state
pub mod resources;
/// `HTTP` routes
pub mod routes;
