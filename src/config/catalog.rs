// ABOUTME: Catalog source configuration passed into the scanner at construction
// ABOUTME: Catalog path, serving mode, default limits and scan concurrency from environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use ate_core::constants::limits::{
    DEFAULT_CATALOG_PATH, DEFAULT_FETCH_LIMIT, DEFAULT_SCAN_CONCURRENCY, DEFAULT_SEARCH_LIMIT,
};
use ate_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// How serving options are built for each profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingMode {
    /// Use each record's own portion list, falling back to 100 g
    #[default]
    Portions,
    /// Use the fixed standard serving list for every record
    Standard,
}

impl FromStr for ServingMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "portions" | "portion" => Ok(Self::Portions),
            "standard" => Ok(Self::Standard),
            other => Err(AppError::config_invalid(
                "ATE_SERVING_MODE",
                format!("expected 'portions' or 'standard', got '{other}'"),
            )),
        }
    }
}

impl fmt::Display for ServingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portions => write!(f, "portions"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

/// Catalog source handle and scan defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path of the JSON catalog file
    pub catalog_path: PathBuf,
    /// Serving option strategy
    pub serving_mode: ServingMode,
    /// Default bounded fetch size
    pub fetch_limit: usize,
    /// Default bounded search size
    pub search_limit: usize,
    /// Maximum catalog scans in flight at once
    pub scan_concurrency: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            serving_mode: ServingMode::default(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            search_limit: DEFAULT_SEARCH_LIMIT,
            scan_concurrency: DEFAULT_SCAN_CONCURRENCY,
        }
    }
}

impl CatalogConfig {
    /// Configuration for a catalog at `path` with default settings
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: path.into(),
            ..Self::default()
        }
    }

    /// Replace the serving mode
    #[must_use]
    pub const fn with_serving_mode(mut self, serving_mode: ServingMode) -> Self {
        self.serving_mode = serving_mode;
        self
    }

    /// Replace the scan concurrency
    #[must_use]
    pub const fn with_scan_concurrency(mut self, scan_concurrency: usize) -> Self {
        self.scan_concurrency = scan_concurrency;
        self
    }

    /// Load catalog configuration from environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set but cannot be parsed or is out of range
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            catalog_path: PathBuf::from(env_var_or("ATE_CATALOG_PATH", DEFAULT_CATALOG_PATH)),
            serving_mode: env_var_or("ATE_SERVING_MODE", "portions").parse()?,
            fetch_limit: parse_env_usize("ATE_FETCH_LIMIT", DEFAULT_FETCH_LIMIT)?,
            search_limit: parse_env_usize("ATE_SEARCH_LIMIT", DEFAULT_SEARCH_LIMIT)?,
            scan_concurrency: parse_env_usize("ATE_SCAN_CONCURRENCY", DEFAULT_SCAN_CONCURRENCY)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when `scan_concurrency` is zero or the catalog path is empty
    pub fn validate(&self) -> AppResult<()> {
        if self.scan_concurrency == 0 {
            return Err(AppError::config_invalid(
                "ATE_SCAN_CONCURRENCY",
                "must be at least 1",
            ));
        }
        if self.catalog_path.as_os_str().is_empty() {
            return Err(AppError::config_invalid(
                "ATE_CATALOG_PATH",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env_usize(key: &str, default: usize) -> AppResult<usize> {
    match env::var(key) {
        Ok(value) => value.trim().parse().map_err(|e| {
            AppError::config_invalid(key, format!("'{value}' is not a valid count: {e}"))
        }),
        Err(_) => Ok(default),
    }
}
