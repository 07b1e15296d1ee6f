// ABOUTME: Centralized resource container for dependency injection into HTTP handlers
// ABOUTME: Holds the validated nutrition configuration, diet mode catalog, and server settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once at startup, shared read-only behind an `Arc`. Nothing in here is
//! mutated after construction, so handlers need no locking.

use crate::config::{ConfigError, NutritionConfig, ServerConfig};
use crate::intelligence::DietModeRegistry;
use std::sync::Arc;
use tracing::info;

/// Shared, immutable server state
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server bind and timeout settings
    pub server: Arc<ServerConfig>,
    /// Coefficients for the goal engine
    pub nutrition: Arc<NutritionConfig>,
    /// Diet mode catalog
    pub diet_modes: Arc<DietModeRegistry>,
}

impl ServerResources {
    /// Assemble resources from already-validated parts
    #[must_use]
    pub fn new(
        server: ServerConfig,
        nutrition: NutritionConfig,
        diet_modes: DietModeRegistry,
    ) -> Self {
        Self {
            server: Arc::new(server),
            nutrition: Arc::new(nutrition),
            diet_modes: Arc::new(diet_modes),
        }
    }

    /// Load nutrition configuration from the environment and use the built-in catalog
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a `NUTRIGOAL_*` override is invalid
    pub fn from_env(server: ServerConfig) -> Result<Self, ConfigError> {
        let nutrition = NutritionConfig::load()?;
        let diet_modes = DietModeRegistry::builtin();
        info!(
            diet_modes = diet_modes.modes().len(),
            "Server resources initialized"
        );
        Ok(Self::new(server, nutrition, diet_modes))
    }
}

impl Default for ServerResources {
    fn default() -> Self {
        Self::new(
            ServerConfig::default(),
            NutritionConfig::default(),
            DietModeRegistry::builtin(),
        )
    }
}
