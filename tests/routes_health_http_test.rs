// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests liveness and readiness endpoints and their response structure
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for health check routes

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use nutrigoal_server::routes::health::HealthRoutes;

/// Get health routes for testing
fn health_routes() -> axum::Router {
    HealthRoutes::routes(common::create_test_resources())
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health").send(health_routes()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "nutrigoal-server");

    // Verify timestamp is in ISO 8601 format
    let timestamp_str = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp_str).is_ok());
}

#[tokio::test]
async fn test_ready_endpoint_reports_catalog() {
    let response = AxumTestRequest::get("/ready").send(health_routes()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["dietModes"], 9);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = AxumTestRequest::get("/healthz").send(health_routes()).await;

    assert_eq!(response.status(), 404);
}
