// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for nutrient matching, servings, meal scoring and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Nutrient code table and flat-key aliases
pub mod nutrients;
/// Serving and unit-to-gram constants
pub mod servings;
/// Meal scaling multipliers and coverage thresholds
pub mod scoring;
/// Default limits and configuration defaults
pub mod limits;

pub use nutrients::{NameRule, NutrientMatcher, FLAT_KEY_ALIASES, NUTRIENT_MATCHERS};
