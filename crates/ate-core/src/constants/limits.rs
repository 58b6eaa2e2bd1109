// ABOUTME: Default limits and configuration defaults for catalog access
// ABOUTME: Fetch/search limits, scan concurrency, catalog path and profile defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default catalog file, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "foodNutrientDatabase.json";

/// Default bounded fetch size
pub const DEFAULT_FETCH_LIMIT: usize = 100;

/// Default bounded search size
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Default number of catalog scans allowed to run at once
pub const DEFAULT_SCAN_CONCURRENCY: usize = 8;

/// Name given to records that carry none
pub const UNKNOWN_FOOD_NAME: &str = "Unknown";

/// Body weight assumed when a profile has none (kg)
pub const DEFAULT_BODY_WEIGHT_KG: f64 = 70.0;
