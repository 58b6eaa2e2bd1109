// ABOUTME: Re-exports the catalog and meal data models from ate-core
// ABOUTME: Nutrient, NutrientSet, NutrientProfile, MealTemplate, ScoredMeal and friends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ate_core::models::*;
