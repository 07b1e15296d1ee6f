// ABOUTME: Configuration error type for loading and validating nutrition settings
// ABOUTME: Shared by environment parsing, value validation, and diet mode catalog checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrigoal_core::errors::AppError;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value lies outside its accepted bounds
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// The diet mode catalog is inconsistent
    #[error("Invalid diet mode catalog: {0}")]
    InvalidCatalog(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let message = error.to_string();
        match error {
            ConfigError::Parse(_) => Self::config(message),
            ConfigError::InvalidRange(_)
            | ConfigError::ValueOutOfRange(_)
            | ConfigError::InvalidCatalog(_) => Self::config_invalid(message),
        }
        .with_source(error)
    }
}
