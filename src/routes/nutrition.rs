// ABOUTME: Nutrition goal route handlers for calorie previews, diet modes, and macro targets
// ABOUTME: Thin axum handlers that validate request bodies and delegate to the goal engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition goal routes
//!
//! Every handler is synchronous arithmetic over the shared, immutable
//! [`ServerResources`]. Request bodies arrive loosely typed and are validated
//! once here before anything is computed.

use super::AppJson;
use crate::constants::profile_limits;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    allocate_for_mode, compare_intake, compute_calorie_goal, normalize_split, RawSplit,
};
use crate::models::{
    AggregationPeriod, CalorieResult, DietMode, IntakeProgress, MacroGoals, MacroIntake,
    MacroSplit, ProfileInput,
};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Integer split to map onto the catalog
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ClassifyRequest {
    /// Carbohydrate percentage
    pub carbs: u32,
    /// Protein percentage
    pub protein: u32,
    /// Fat percentage
    pub fat: u32,
}

/// Gram target request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroGoalsRequest {
    /// Daily calorie goal from the calorie preview
    pub daily_calorie_goal: i64,
    /// Catalog id of the chosen diet mode
    pub diet_mode_id: String,
    /// Required when `diet_mode_id` is `custom`, ignored otherwise
    #[serde(default)]
    pub custom_split: Option<RawSplit>,
    /// Body weight, used for the fiber target
    pub body_weight_kg: f64,
    /// Aggregation window, daily when omitted
    #[serde(default)]
    pub period: AggregationPeriod,
}

/// Gram target response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroGoalsResponse {
    /// Diet mode the targets were computed for
    pub diet_mode: DietMode,
    /// Effective split after normalization
    pub split: MacroSplit,
    /// Aggregation window
    pub period: AggregationPeriod,
    /// Gram targets
    pub goals: MacroGoals,
}

/// Intake comparison request
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeProgressRequest {
    /// Gram targets
    pub goals: MacroGoals,
    /// Grams consumed so far
    #[serde(default)]
    pub consumed: MacroIntake,
}

/// Nutrition goal routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition goal routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/nutrition/calories/preview",
                post(Self::handle_calorie_preview),
            )
            .route("/api/nutrition/diet-modes", get(Self::handle_list_diet_modes))
            .route(
                "/api/nutrition/diet-modes/classify",
                post(Self::handle_classify_split),
            )
            .route(
                "/api/nutrition/diet-modes/:id",
                get(Self::handle_get_diet_mode),
            )
            .route(
                "/api/nutrition/splits/normalize",
                post(Self::handle_normalize_split),
            )
            .route("/api/nutrition/macros", post(Self::handle_macro_goals))
            .route("/api/nutrition/progress", post(Self::handle_intake_progress))
            .with_state(resources)
    }

    /// Handle calorie goal preview for an unsaved profile
    async fn handle_calorie_preview(
        State(resources): State<Arc<ServerResources>>,
        AppJson(input): AppJson<ProfileInput>,
    ) -> AppResult<Json<CalorieResult>> {
        let profile = input.into_profile()?;
        profile.check_limits()?;

        let result = compute_calorie_goal(&profile, &resources.nutrition)?;
        debug!(
            goal = ?profile.goal,
            activity_level = %profile.activity_level,
            daily_calorie_goal = result.daily_calorie_goal,
            "Calorie preview computed"
        );
        Ok(Json(result))
    }

    /// Handle listing the diet mode catalog
    async fn handle_list_diet_modes(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<Vec<DietMode>> {
        Json(resources.diet_modes.modes().to_vec())
    }

    /// Handle diet mode lookup by id
    async fn handle_get_diet_mode(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> AppResult<Json<DietMode>> {
        let mode = resources.diet_modes.find_by_id(&id)?;
        Ok(Json(mode.clone()))
    }

    /// Handle classifying an integer split
    async fn handle_classify_split(
        State(resources): State<Arc<ServerResources>>,
        AppJson(request): AppJson<ClassifyRequest>,
    ) -> Json<DietMode> {
        let mode = resources
            .diet_modes
            .classify(request.carbs, request.protein, request.fat);
        debug!(?request, diet_mode = %mode.id, "Split classified");
        Json(mode.clone())
    }

    /// Handle normalizing a user-edited split
    async fn handle_normalize_split(
        State(resources): State<Arc<ServerResources>>,
        AppJson(raw): AppJson<RawSplit>,
    ) -> AppResult<Json<MacroSplit>> {
        let split = normalize_split(
            raw.carbs,
            raw.protein,
            raw.fat,
            &resources.nutrition.split_validation,
        )?;
        Ok(Json(split))
    }

    /// Handle gram target computation for a diet mode
    async fn handle_macro_goals(
        State(resources): State<Arc<ServerResources>>,
        AppJson(request): AppJson<MacroGoalsRequest>,
    ) -> AppResult<Json<MacroGoalsResponse>> {
        let bounds = &resources.nutrition.calorie_goal;
        if !(bounds.min_daily_calories..=bounds.max_daily_calories)
            .contains(&request.daily_calorie_goal)
        {
            return Err(AppError::out_of_range(
                "dailyCalorieGoal",
                format!(
                    "Daily calorie goal must be between {} and {} kcal",
                    bounds.min_daily_calories, bounds.max_daily_calories
                ),
            ));
        }
        if !(profile_limits::MIN_WEIGHT_KG..=profile_limits::MAX_WEIGHT_KG)
            .contains(&request.body_weight_kg)
        {
            return Err(AppError::out_of_range(
                "bodyWeightKg",
                format!(
                    "Body weight must be between {} and {} kg",
                    profile_limits::MIN_WEIGHT_KG,
                    profile_limits::MAX_WEIGHT_KG
                ),
            ));
        }

        let mode = resources.diet_modes.find_by_id(&request.diet_mode_id)?;
        let (split, goals) = allocate_for_mode(
            request.daily_calorie_goal,
            mode,
            request.custom_split,
            request.body_weight_kg,
            request.period,
            &resources.nutrition,
        )?;

        debug!(
            diet_mode = %mode.id,
            period = ?request.period,
            daily_calorie_goal = request.daily_calorie_goal,
            "Macro goals computed"
        );

        Ok(Json(MacroGoalsResponse {
            diet_mode: mode.clone(),
            split,
            period: request.period,
            goals,
        }))
    }

    /// Handle consumed-versus-goal comparison
    async fn handle_intake_progress(
        AppJson(request): AppJson<IntakeProgressRequest>,
    ) -> Json<IntakeProgress> {
        Json(compare_intake(&request.consumed, &request.goals))
    }
}
