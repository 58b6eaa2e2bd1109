// ABOUTME: Meal template reference data, deficiency requests and scored meal output
// ABOUTME: MealCategory, MealTemplate, TemplateFood, Deficiency, ResolvedFood and ScoredMeal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::catalog::FoodId;
use super::nutrition::{Nutrient, NutrientSet};

/// Meal slot a template is intended for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

/// One ingredient line of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFood {
    /// Catalog search term used to resolve the ingredient
    pub search_term: String,
    /// Quantity in `unit`
    pub amount: f64,
    /// Unit label driving the scale multiplier
    pub unit: String,
}

impl TemplateFood {
    /// Construct an ingredient line
    pub fn new(search_term: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// A curated meal definition, independent of catalog contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTemplate {
    /// Stable template id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Meal slot
    pub category: MealCategory,
    /// Ingredient lines in declaration order
    pub foods: Vec<TemplateFood>,
}

/// Gap between observed daily intake and target for one nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deficiency {
    /// Nutrient wire key (`"protein"`, `"vitaminD"`)
    pub nutrient: String,
    /// Observed average daily intake
    #[serde(default)]
    pub daily: f64,
    /// Daily target
    #[serde(default)]
    pub target: f64,
    /// `target - daily`
    pub deficit: f64,
}

impl Deficiency {
    /// Build a deficiency for a canonical nutrient, deriving the deficit
    #[must_use]
    pub fn new(nutrient: Nutrient, daily: f64, target: f64) -> Self {
        Self {
            nutrient: nutrient.key().to_owned(),
            daily,
            target,
            deficit: target - daily,
        }
    }
}

/// An ingredient after catalog resolution and unit scaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFood {
    /// Catalog id of the matched record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FoodId>,
    /// Catalog name of the matched record
    pub name: String,
    /// Template quantity
    pub amount: f64,
    /// Template unit
    pub unit: String,
    /// Nutrients scaled by the unit multiplier
    pub nutrients: NutrientSet,
}

/// A template that covers at least one open deficiency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMeal {
    /// Template id
    pub id: u32,
    /// Template name
    pub name: String,
    /// Template category
    pub category: MealCategory,
    /// Resolved ingredients in template order
    pub foods: Vec<ResolvedFood>,
    /// Sum of scaled ingredient nutrients
    pub total_nutrients: NutrientSet,
    /// Sum of qualifying coverage percentages
    pub coverage_score: f64,
    /// Number of deficiencies covered by at least the threshold
    pub deficits_covered: u32,
}
