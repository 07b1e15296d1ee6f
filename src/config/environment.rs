// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads bind address, port, and request timeout from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based server configuration

use anyhow::{Context, Result};
use nutrigoal_core::constants::{defaults, env_config};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::info;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub http_host: IpAddr,
    /// HTTP port
    pub http_port: u16,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Comma-separated CORS origins, or `*`
    pub cors_allowed_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: IpAddr::from([127, 0, 0, 1]),
            http_port: defaults::HTTP_PORT,
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            cors_allowed_origins: "*".to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading server configuration from environment variables");

        let config = Self {
            http_host: env_var_or(env_config::HTTP_HOST, defaults::HTTP_HOST)
                .parse()
                .context("Invalid HTTP_HOST value")?,
            http_port: env_var_or(env_config::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            request_timeout_secs: env_var_or(
                env_config::REQUEST_TIMEOUT_SECS,
                &defaults::REQUEST_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            cors_allowed_origins: env_var_or(env_config::CORS_ALLOWED_ORIGINS, "*"),
        };

        Ok(config)
    }

    /// Socket address to bind
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrigoal Server Configuration:\n\
             - Bind Address: {}\n\
             - Request Timeout: {}s\n\
             - CORS Origins: {}",
            self.bind_addr(),
            self.request_timeout_secs,
            self.cors_allowed_origins,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
