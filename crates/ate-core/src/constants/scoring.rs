// ABOUTME: Meal scaling multipliers, coverage thresholds and ranking limits
// ABOUTME: Heuristic unit multipliers applied to per-100 g catalog values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Gram-denominated template units
pub const GRAM_UNITS: &[&str] = &["g", "gram", "grams"];

/// Amount assumed for a gram unit whose amount is zero
pub const DEFAULT_GRAM_AMOUNT: f64 = 100.0;

/// Coarse count units (`2 large` eggs)
pub const COUNT_UNITS: &[&str] = &["large", "medium", "small"];

/// Multiplier per count unit (one unit is roughly 50 g)
pub const COUNT_UNIT_FACTOR: f64 = 0.5;

/// Discrete piece-like units
pub const PIECE_UNITS: &[&str] = &[
    "slice",
    "pieces",
    "whole",
    "patty",
    "shells",
    "tortillas",
    "roll",
    "cloves",
];

/// Multiplier per piece unit (one unit is roughly 30 g)
pub const PIECE_UNIT_FACTOR: f64 = 0.3;

/// Volumetric spoon and cup units
pub const VOLUME_UNITS: &[&str] = &["cup", "tbsp", "tsp"];

/// Multiplier per volume unit
pub const VOLUME_UNIT_FACTOR: f64 = 0.5;

/// Multiplier for any unit not listed above
pub const DEFAULT_UNIT_MULTIPLIER: f64 = 1.0;

/// Minimum coverage percent for a deficiency to count as covered
pub const COVERAGE_THRESHOLD_PERCENT: f64 = 20.0;

/// Maximum number of suggested meals
pub const MAX_SUGGESTIONS: usize = 5;

/// Search limit used to resolve one template ingredient
pub const INGREDIENT_SEARCH_LIMIT: usize = 5;

/// Maximum number of deficiencies reported by the weekly analysis
pub const MAX_DEFICIENCIES: usize = 8;

/// Days in the analysis window
pub const DAYS_PER_WEEK: f64 = 7.0;
