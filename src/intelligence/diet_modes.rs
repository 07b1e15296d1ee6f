// ABOUTME: Diet mode catalog with exact-match classification of macro percentage triples
// ABOUTME: Immutable registry built once at startup and injected into request handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diet Mode Registry
//!
//! A fixed, ordered catalog of named macro splits plus one `custom` bucket.
//! Classification scans presets in declaration order and returns the first
//! exact match; anything else is `custom`. The registry is an ordinary value:
//! tests construct their own catalogs, the server wraps the built-in one in its
//! shared resources.

use crate::config::ConfigError;
use nutrigoal_core::constants::{diet_modes, split};
use nutrigoal_core::errors::{AppError, AppResult};
use nutrigoal_core::models::{DietMode, MacroSplit};
use std::collections::HashSet;

/// Ordered, validated diet mode catalog
#[derive(Debug, Clone)]
pub struct DietModeRegistry {
    modes: Vec<DietMode>,
    custom_index: usize,
}

impl DietModeRegistry {
    /// Build a registry from an ordered list of modes
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCatalog` if the list is empty, contains
    /// duplicate ids, a preset whose split does not sum to 100, or not exactly
    /// one custom entry
    pub fn new(modes: Vec<DietMode>) -> Result<Self, ConfigError> {
        if modes.is_empty() {
            return Err(ConfigError::InvalidCatalog(
                "catalog must not be empty".to_owned(),
            ));
        }

        let mut seen = HashSet::with_capacity(modes.len());
        for mode in &modes {
            if !seen.insert(mode.id.as_str()) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "duplicate diet mode id '{}'",
                    mode.id
                )));
            }
            if let Some(preset) = &mode.split {
                if !preset.is_complete() {
                    return Err(ConfigError::InvalidCatalog(format!(
                        "diet mode '{}' split {}/{}/{} does not sum to {}",
                        mode.id,
                        preset.carbs,
                        preset.protein,
                        preset.fat,
                        split::TOTAL_PERCENT
                    )));
                }
            }
        }

        let mut custom = modes.iter().enumerate().filter(|(_, m)| m.is_custom());
        let custom_index = match (custom.next(), custom.next()) {
            (Some((index, _)), None) => index,
            (None, _) => {
                return Err(ConfigError::InvalidCatalog(
                    "catalog needs a custom entry".to_owned(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(ConfigError::InvalidCatalog(
                    "catalog has more than one custom entry".to_owned(),
                ))
            }
        };

        Ok(Self {
            modes,
            custom_index,
        })
    }

    /// The nine presets shipped with the service
    #[must_use]
    pub fn builtin() -> Self {
        let modes = builtin_modes();
        let custom_index = modes.len() - 1;
        Self {
            modes,
            custom_index,
        }
    }

    /// All modes in declaration order
    #[must_use]
    pub fn modes(&self) -> &[DietMode] {
        &self.modes
    }

    /// The custom bucket
    #[must_use]
    pub fn custom(&self) -> &DietMode {
        &self.modes[self.custom_index]
    }

    /// Look up a mode by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no mode has this id
    pub fn find_by_id(&self, id: &str) -> AppResult<&DietMode> {
        self.modes
            .iter()
            .find(|mode| mode.id == id)
            .ok_or_else(|| AppError::not_found(format!("Diet mode '{id}'")).with_resource_id(id))
    }

    /// Map a percentage triple onto the catalog
    ///
    /// Returns the first preset whose percentages equal the input exactly, or
    /// the custom bucket when none does.
    #[must_use]
    pub fn classify(&self, carbs: u32, protein: u32, fat: u32) -> &DietMode {
        self.modes
            .iter()
            .find(|mode| {
                mode.split
                    .is_some_and(|preset| preset.matches(carbs, protein, fat))
            })
            .unwrap_or_else(|| self.custom())
    }

    /// Map a split onto the catalog
    #[must_use]
    pub fn classify_split(&self, split: &MacroSplit) -> &DietMode {
        self.classify(split.carbs, split.protein, split.fat)
    }
}

impl Default for DietModeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// Custom must stay last: `builtin()` relies on it.
fn builtin_modes() -> Vec<DietMode> {
    vec![
        DietMode::preset(
            diet_modes::BALANCED,
            "Balanced",
            MacroSplit::new(50, 20, 30),
            "Moderate carbohydrates with adequate protein and fat for everyday eating",
        ),
        DietMode::preset(
            "low_carb",
            "Low Carb",
            MacroSplit::new(25, 35, 40),
            "Reduced carbohydrates with protein and fat making up the difference",
        ),
        DietMode::preset(
            "high_protein",
            "High Protein",
            MacroSplit::new(40, 35, 25),
            "Elevated protein to support muscle gain and satiety",
        ),
        DietMode::preset(
            diet_modes::KETO,
            "Keto",
            MacroSplit::new(5, 20, 75),
            "Very low carbohydrate, high fat ketogenic split",
        ),
        DietMode::preset(
            "low_fat",
            "Low Fat",
            MacroSplit::new(60, 20, 20),
            "Carbohydrate-forward with restricted fat",
        ),
        DietMode::preset(
            "mediterranean",
            "Mediterranean",
            MacroSplit::new(45, 20, 35),
            "Whole grains and olive oil with moderate protein",
        ),
        DietMode::preset(
            "zone",
            "Zone",
            MacroSplit::new(40, 30, 30),
            "40/30/30 split across carbohydrate, protein, and fat",
        ),
        DietMode::preset(
            "paleo",
            "Paleo",
            MacroSplit::new(30, 30, 40),
            "Lower carbohydrate with animal protein and natural fats",
        ),
        DietMode::custom("Custom", "Your own macro split"),
    ]
}
