// ABOUTME: Configuration management module for the catalog engine
// ABOUTME: Bundles catalog source settings and logging settings loaded from environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Catalog**: catalog file path, serving mode, default limits, scan concurrency
//! - **Logging**: re-exported from [`crate::logging`]
//!
//! There is no process-wide catalog path. A [`CatalogConfig`] is handed to the
//! scanner when it is built.

use ate_core::errors::AppResult;
use tracing::info;

/// Catalog source configuration
pub mod catalog;

pub use catalog::{CatalogConfig, ServingMode};

pub use crate::logging::{LogFormat, LoggingConfig};

/// Complete engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Catalog source settings
    pub catalog: CatalogConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load all configuration from environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a catalog variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            catalog: CatalogConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        };
        config.summarize();
        Ok(config)
    }

    /// Log a one-line summary of the loaded configuration
    pub fn summarize(&self) {
        info!(
            catalog.path = %self.catalog.catalog_path.display(),
            catalog.serving_mode = %self.catalog.serving_mode,
            catalog.fetch_limit = self.catalog.fetch_limit,
            catalog.search_limit = self.catalog.search_limit,
            catalog.scan_concurrency = self.catalog.scan_concurrency,
            environment = %self.logging.environment,
            "Engine configuration loaded"
        );
    }
}
