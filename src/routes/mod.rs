// ABOUTME: Route module organization for the nutrigoal HTTP endpoints
// ABOUTME: Merges domain route groups and applies tracing, request-id, CORS, and timeout layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the nutrigoal server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the goal engine.

/// Health check and readiness routes
pub mod health;
/// Calorie, diet mode, and macro target routes
pub mod nutrition;

pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;

use crate::errors::AppError;
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::extract::FromRequest;
use axum::Router;
use http::header::HeaderName;
use http::StatusCode;
use std::sync::Arc;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// JSON body extractor whose rejections use the standard error envelope
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Build the full application router with middleware applied
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout = resources.server.request_timeout();
    let cors = setup_cors(&resources.server);

    // Layers run bottom-up: the request id is set before the trace span opens
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionRoutes::routes(resources))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}
