// ABOUTME: Deficiency-coverage scoring for meal templates
// ABOUTME: Unit multipliers, allergen exclusion, coverage percentages and top-N ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal scoring
//!
//! A template's ingredients arrive already resolved against the catalog. This
//! module scales each ingredient by a heuristic unit multiplier, sums the
//! meal, drops meals containing an allergen, scores coverage of the open
//! deficiencies and ranks the survivors.
//!
//! The unit table is an approximation (a `medium` unit is treated as ~50 g,
//! a `slice` as ~30 g). Units it does not list scale by 1, i.e. one 100 g
//! catalog serving.

use ate_core::constants::scoring::{
    COUNT_UNITS, COUNT_UNIT_FACTOR, COVERAGE_THRESHOLD_PERCENT, DEFAULT_GRAM_AMOUNT,
    DEFAULT_UNIT_MULTIPLIER, GRAM_UNITS, MAX_SUGGESTIONS, PIECE_UNITS, PIECE_UNIT_FACTOR,
    VOLUME_UNITS, VOLUME_UNIT_FACTOR,
};
use ate_core::constants::servings::NUTRIENT_BASIS_GRAMS;
use ate_core::models::{
    Deficiency, MealTemplate, NutrientProfile, NutrientSet, ResolvedFood, ScoredMeal,
    TemplateFood,
};
use tracing::debug;

/// Scale factor applied to per-100 g values for `amount` of `unit`
#[must_use]
pub fn unit_multiplier(amount: f64, unit: &str) -> f64 {
    let unit = unit.to_lowercase();
    let unit = unit.as_str();
    if GRAM_UNITS.contains(&unit) {
        let grams = if amount.abs() > 0.0 { amount } else { DEFAULT_GRAM_AMOUNT };
        grams / NUTRIENT_BASIS_GRAMS
    } else if COUNT_UNITS.contains(&unit) {
        amount * COUNT_UNIT_FACTOR
    } else if PIECE_UNITS.contains(&unit) {
        amount * PIECE_UNIT_FACTOR
    } else if VOLUME_UNITS.contains(&unit) {
        amount * VOLUME_UNIT_FACTOR
    } else {
        DEFAULT_UNIT_MULTIPLIER
    }
}

/// Lower-cased allergy terms parsed from a comma-separated list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllergyFilter {
    terms: Vec<String>,
}

impl AllergyFilter {
    /// Parse `"Egg, peanut ,"` into `["egg", "peanut"]`
    #[must_use]
    pub fn from_csv(csv: &str) -> Self {
        let terms = csv
            .to_lowercase()
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_owned)
            .collect();
        Self { terms }
    }

    /// Build from already separated terms
    #[must_use]
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|term| term.as_ref().trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();
        Self { terms }
    }

    /// Parsed terms
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// First term contained in `name`, case-insensitively
    #[must_use]
    pub fn matching_term(&self, name: &str) -> Option<&str> {
        if self.terms.is_empty() {
            return None;
        }
        let name = name.to_lowercase();
        self.terms
            .iter()
            .find(|term| name.contains(term.as_str()))
            .map(String::as_str)
    }
}

/// Outcome of scoring a meal against the open deficiencies
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coverage {
    /// Sum of qualifying percentages
    pub score: f64,
    /// Number of deficiencies reaching the threshold
    pub covered: u32,
}

/// Coverage of `deficiencies` by a meal's `total` nutrients
///
/// Deficits that are zero, negative or not finite are skipped. Unknown nutrient
/// keys read as zero intake.
#[must_use]
pub fn score_coverage(total: &NutrientSet, deficiencies: &[Deficiency]) -> Coverage {
    deficiencies
        .iter()
        .filter(|deficiency| deficiency.deficit.is_finite() && deficiency.deficit > 0.0)
        .fold(Coverage::default(), |mut coverage, deficiency| {
            let percent = total.get_by_key(&deficiency.nutrient) / deficiency.deficit * 100.0;
            if percent >= COVERAGE_THRESHOLD_PERCENT {
                coverage.score += percent;
                coverage.covered += 1;
            }
            coverage
        })
}

/// Sort by coverage score descending, keeping template order on ties, and keep the top entries
#[must_use]
pub fn rank_meals(mut meals: Vec<ScoredMeal>) -> Vec<ScoredMeal> {
    meals.sort_by(|a, b| b.coverage_score.total_cmp(&a.coverage_score));
    meals.truncate(MAX_SUGGESTIONS);
    meals
}

/// Scores one template against a fixed request
pub struct MealScorer<'a> {
    deficiencies: &'a [Deficiency],
    allergies: &'a AllergyFilter,
}

impl<'a> MealScorer<'a> {
    /// Scorer for one suggestion request
    #[must_use]
    pub const fn new(deficiencies: &'a [Deficiency], allergies: &'a AllergyFilter) -> Self {
        Self {
            deficiencies,
            allergies,
        }
    }

    /// Scale a resolved catalog profile by the ingredient's unit multiplier
    #[must_use]
    pub fn resolve(food: &TemplateFood, profile: &NutrientProfile) -> ResolvedFood {
        let multiplier = unit_multiplier(food.amount, &food.unit);
        ResolvedFood {
            id: profile.id.clone(),
            name: profile.name.clone(),
            amount: food.amount,
            unit: food.unit.clone(),
            nutrients: profile.nutrients.scaled(multiplier),
        }
    }

    /// Score `template` given its resolved ingredients
    ///
    /// Returns `None` when no ingredient resolved, an ingredient contains an
    /// allergen, or no deficiency reaches the coverage threshold.
    #[must_use]
    pub fn score(&self, template: &MealTemplate, foods: Vec<ResolvedFood>) -> Option<ScoredMeal> {
        if foods.is_empty() {
            debug!(template.id = template.id, "no ingredients resolved, template dropped");
            return None;
        }

        let total_nutrients: NutrientSet = foods.iter().map(|food| &food.nutrients).sum();

        if let Some((food, term)) = foods.iter().find_map(|food| {
            self.allergies
                .matching_term(&food.name)
                .map(|term| (food, term))
        }) {
            debug!(
                template.id = template.id,
                food = %food.name,
                allergen = term,
                "template excluded by allergen"
            );
            return None;
        }

        let coverage = score_coverage(&total_nutrients, self.deficiencies);
        if coverage.covered == 0 {
            return None;
        }

        Some(ScoredMeal {
            id: template.id,
            name: template.name.clone(),
            category: template.category,
            foods,
            total_nutrients,
            coverage_score: coverage.score,
            deficits_covered: coverage.covered,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp, clippy::unwrap_used)]

    use super::*;
    use ate_core::models::{MealCategory, Nutrient};

    fn template(id: u32) -> MealTemplate {
        MealTemplate {
            id,
            name: format!("Template {id}"),
            category: MealCategory::Lunch,
            foods: vec![TemplateFood::new("anything", 100.0, "g")],
        }
    }

    fn food(name: &str, protein: f64) -> ResolvedFood {
        ResolvedFood {
            id: None,
            name: name.into(),
            amount: 100.0,
            unit: "g".into(),
            nutrients: NutrientSet {
                protein,
                ..NutrientSet::default()
            },
        }
    }

    #[test]
    fn test_unit_multiplier_table() {
        assert_eq!(unit_multiplier(150.0, "g"), 1.5);
        assert_eq!(unit_multiplier(0.0, "g"), 1.0);
        assert_eq!(unit_multiplier(2.0, "large"), 1.0);
        assert_eq!(unit_multiplier(2.0, "slice"), 0.6);
        assert_eq!(unit_multiplier(1.0, "cup"), 0.5);
        assert_eq!(unit_multiplier(240.0, "ml"), 1.0);
        assert_eq!(unit_multiplier(3.0, "Medium"), 1.5);
    }

    #[test]
    fn test_allergy_csv_parsing() {
        let filter = AllergyFilter::from_csv(" Egg, PEANUT ,, ");
        assert_eq!(filter.terms(), ["egg", "peanut"]);
        assert_eq!(filter.matching_term("Egg, whole, raw"), Some("egg"));
        assert_eq!(filter.matching_term("Rice, white"), None);
        assert!(AllergyFilter::from_csv("").terms().is_empty());
    }

    #[test]
    fn test_coverage_threshold() {
        let total = NutrientSet {
            protein: 5.0,
            iron: 1.0,
            ..NutrientSet::default()
        };
        let deficiencies = vec![
            Deficiency::new(Nutrient::Protein, 0.0, 10.0),
            Deficiency::new(Nutrient::Iron, 0.0, 18.0),
        ];
        let coverage = score_coverage(&total, &deficiencies);
        assert_eq!(coverage.covered, 1);
        assert_eq!(coverage.score, 50.0);
    }

    #[test]
    fn test_zero_deficit_is_ignored() {
        let total = NutrientSet {
            protein: 5.0,
            ..NutrientSet::default()
        };
        let deficiencies = vec![Deficiency::new(Nutrient::Protein, 10.0, 10.0)];
        assert_eq!(score_coverage(&total, &deficiencies), Coverage::default());
    }

    #[test]
    fn test_allergen_excludes_whole_template() {
        let deficiencies = vec![Deficiency::new(Nutrient::Protein, 0.0, 10.0)];
        let allergies = AllergyFilter::from_csv("egg");
        let scorer = MealScorer::new(&deficiencies, &allergies);

        let foods = vec![food("Bread, whole wheat", 10.0), food("Egg, whole, raw", 12.0)];
        assert!(scorer.score(&template(1), foods).is_none());

        let foods = vec![food("Bread, whole wheat", 10.0)];
        let meal = scorer.score(&template(2), foods).unwrap();
        assert_eq!(meal.deficits_covered, 1);
        assert_eq!(meal.coverage_score, 100.0);
    }

    #[test]
    fn test_rank_is_stable_and_truncated() {
        let deficiencies = vec![Deficiency::new(Nutrient::Protein, 0.0, 10.0)];
        let allergies = AllergyFilter::default();
        let scorer = MealScorer::new(&deficiencies, &allergies);

        let meals: Vec<ScoredMeal> = [5.0, 8.0, 5.0, 2.0, 9.0, 5.0, 3.0]
            .iter()
            .enumerate()
            .filter_map(|(index, protein)| {
                scorer.score(&template(index as u32), vec![food("Tofu", *protein)])
            })
            .collect();

        let ranked = rank_meals(meals);
        let ids: Vec<u32> = ranked.iter().map(|meal| meal.id).collect();
        assert_eq!(ids, vec![4, 1, 0, 2, 5]);
    }
}
