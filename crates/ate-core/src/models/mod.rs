// ABOUTME: Core data models for the nutrient catalog engine
// ABOUTME: Re-exports nutrient sets, catalog profiles and meal scoring types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! ## Design Principles
//!
//! - **Schema Agnostic**: profiles hide which catalog shape a record came from
//! - **Zero-filled**: nutrient fields are always present, so arithmetic needs no null checks
//! - **Serializable**: all models serialize to the camelCase wire format collaborators consume
//!
//! ## Core Models
//!
//! - `NutrientProfile`: canonical record for one catalog food
//! - `NutrientSet`: the 23 nutrient amounts
//! - `MealTemplate`: curated meal reference data
//! - `ScoredMeal`: a ranked meal suggestion

mod catalog;
mod meal;
mod nutrition;

pub use catalog::{FoodId, NutrientProfile, ServingKind, ServingOption};
pub use meal::{Deficiency, MealCategory, MealTemplate, ResolvedFood, ScoredMeal, TemplateFood};
pub use nutrition::{Nutrient, NutrientCategory, NutrientSet, NUTRIENT_COUNT};
