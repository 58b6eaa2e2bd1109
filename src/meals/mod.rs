// ABOUTME: Meal template library and deficiency-driven meal suggestion
// ABOUTME: Re-exports the suggester and the built-in templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Concurrent template scoring against the catalog
pub mod suggestion;
/// Built-in meal templates
pub mod templates;

pub use suggestion::MealSuggester;
pub use templates::{by_category, MEAL_TEMPLATES};
