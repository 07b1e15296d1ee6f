// ABOUTME: Tests for the diet mode catalog and exact-match split classification
// ABOUTME: Covers preset round-trips, custom fallback, scan order, and catalog validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrigoal_server::{
    config::ConfigError,
    errors::ErrorCode,
    intelligence::DietModeRegistry,
    models::{DietMode, MacroSplit},
};

#[test]
fn test_builtin_catalog_order() {
    let registry = DietModeRegistry::builtin();
    let ids: Vec<&str> = registry.modes().iter().map(|m| m.id.as_str()).collect();

    assert_eq!(
        ids,
        [
            "balanced",
            "low_carb",
            "high_protein",
            "keto",
            "low_fat",
            "mediterranean",
            "zone",
            "paleo",
            "custom"
        ]
    );
}

#[test]
fn test_every_preset_round_trips() {
    let registry = DietModeRegistry::builtin();

    for mode in registry.modes().iter().filter(|m| !m.is_custom()) {
        let split = mode.split.unwrap();
        let classified = registry.classify(split.carbs, split.protein, split.fat);
        assert_eq!(classified.id, mode.id);

        let found = registry.find_by_id(&classified.id).unwrap();
        assert_eq!(found, mode);
        assert!(split.is_complete());
    }
}

#[test]
fn test_classify_requires_exact_match() {
    let registry = DietModeRegistry::builtin();

    assert_eq!(registry.classify(50, 20, 30).id, "balanced");
    assert_eq!(registry.classify(5, 20, 75).id, "keto");
    assert_eq!(registry.classify(33, 33, 34).id, "custom");
    // Off by one from zone
    assert_eq!(registry.classify(41, 30, 29).id, "custom");
    // Does not sum to 100
    assert_eq!(registry.classify(0, 0, 0).id, "custom");
}

#[test]
fn test_classify_split_matches_triple() {
    let registry = DietModeRegistry::builtin();
    let split = MacroSplit::new(30, 30, 40);

    assert_eq!(registry.classify_split(&split).id, "paleo");
}

#[test]
fn test_first_declared_preset_wins() {
    // Same percentages under two ids: scan order decides
    let registry = DietModeRegistry::new(vec![
        DietMode::preset("first", "First", MacroSplit::new(40, 30, 30), ""),
        DietMode::preset("second", "Second", MacroSplit::new(40, 30, 30), ""),
        DietMode::custom("Custom", ""),
    ])
    .unwrap();

    assert_eq!(registry.classify(40, 30, 30).id, "first");
}

#[test]
fn test_find_by_id_unknown() {
    let err = DietModeRegistry::builtin().find_by_id("atkins").unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.http_status(), 404);
    assert_eq!(err.context.resource_id.as_deref(), Some("atkins"));
}

#[test]
fn test_catalog_validation() {
    assert!(matches!(
        DietModeRegistry::new(Vec::new()),
        Err(ConfigError::InvalidCatalog(_))
    ));

    let two_customs = vec![
        DietMode::preset("balanced", "Balanced", MacroSplit::new(50, 20, 30), ""),
        DietMode::custom("Custom", ""),
        DietMode::custom("Custom again", ""),
    ];
    assert!(DietModeRegistry::new(two_customs).is_err());
}

#[test]
fn test_custom_mode_serializes_without_percentages() {
    let registry = DietModeRegistry::builtin();
    let json = serde_json::to_value(registry.custom()).unwrap();

    assert_eq!(json["id"], "custom");
    assert!(json.get("fatPercentage").is_none());
}
