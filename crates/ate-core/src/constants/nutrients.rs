// ABOUTME: Static nutrient code table mapping catalog codes and names onto canonical fields
// ABOUTME: Legacy SR numbers, FoodData Central ids, name predicates and flat-object aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient code table
//!
//! Each canonical field has one independent predicate: the entry's code equals
//! the legacy nutrient number or the `FoodData Central` nutrient id, or the
//! lower-cased entry name satisfies the field's name rule.

use crate::models::{Nutrient, NUTRIENT_COUNT};

/// Name-substring test applied to a lower-cased nutrient entry name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// Name contains the keyword
    Contains(&'static str),
    /// Name contains every keyword
    AllOf(&'static [&'static str]),
    /// Name contains at least one keyword
    AnyOf(&'static [&'static str]),
}

impl NameRule {
    /// Evaluate against an already lower-cased name
    #[must_use]
    pub fn matches(self, name: &str) -> bool {
        match self {
            Self::Contains(keyword) => name.contains(keyword),
            Self::AllOf(keywords) => keywords.iter().all(|keyword| name.contains(keyword)),
            Self::AnyOf(keywords) => keywords.iter().any(|keyword| name.contains(keyword)),
        }
    }
}

/// Predicate deciding whether a nutrient entry feeds a canonical field
#[derive(Debug, Clone, Copy)]
pub struct NutrientMatcher {
    /// Field this matcher writes
    pub nutrient: Nutrient,
    /// Legacy SR nutrient number (`nutrient.number`)
    pub legacy_code: &'static str,
    /// `FoodData Central` nutrient id (`nutrient.id` / `nutrientId`)
    pub fdc_id: &'static str,
    /// Fallback name test
    pub name_rule: NameRule,
}

impl NutrientMatcher {
    /// True when `code` or the lower-cased `name` identifies this nutrient
    #[must_use]
    pub fn matches(&self, code: Option<&str>, name: &str) -> bool {
        code.is_some_and(|code| code == self.legacy_code || code == self.fdc_id)
            || self.name_rule.matches(name)
    }
}

const fn matcher(
    nutrient: Nutrient,
    legacy_code: &'static str,
    fdc_id: &'static str,
    name_rule: NameRule,
) -> NutrientMatcher {
    NutrientMatcher {
        nutrient,
        legacy_code,
        fdc_id,
        name_rule,
    }
}

/// One matcher per canonical field, in canonical order
pub static NUTRIENT_MATCHERS: [NutrientMatcher; NUTRIENT_COUNT] = [
    matcher(Nutrient::Calories, "208", "1008", NameRule::AllOf(&["energy", "kcal"])),
    matcher(Nutrient::Protein, "203", "1003", NameRule::Contains("protein")),
    matcher(Nutrient::Carbs, "205", "1005", NameRule::Contains("carbohydrate")),
    matcher(Nutrient::Fat, "204", "1004", NameRule::AnyOf(&["lipid", "fat"])),
    matcher(Nutrient::Fiber, "291", "1079", NameRule::Contains("fiber")),
    matcher(Nutrient::Sugar, "269", "2000", NameRule::Contains("sugar")),
    matcher(Nutrient::Calcium, "301", "1087", NameRule::Contains("calcium")),
    matcher(Nutrient::Iron, "303", "1089", NameRule::Contains("iron")),
    matcher(Nutrient::Magnesium, "304", "1090", NameRule::Contains("magnesium")),
    matcher(Nutrient::Phosphorus, "305", "1091", NameRule::Contains("phosphorus")),
    matcher(Nutrient::Potassium, "306", "1092", NameRule::Contains("potassium")),
    matcher(Nutrient::Sodium, "307", "1093", NameRule::Contains("sodium")),
    matcher(Nutrient::Zinc, "309", "1095", NameRule::Contains("zinc")),
    matcher(Nutrient::VitaminA, "320", "1106", NameRule::AllOf(&["vitamin a", "rae"])),
    matcher(Nutrient::VitaminC, "401", "1162", NameRule::Contains("vitamin c")),
    matcher(Nutrient::VitaminD, "328", "1114", NameRule::Contains("vitamin d")),
    matcher(Nutrient::VitaminE, "323", "1109", NameRule::AllOf(&["vitamin e", "tocopherol"])),
    matcher(Nutrient::VitaminK, "430", "1185", NameRule::Contains("vitamin k")),
    matcher(Nutrient::VitaminB6, "415", "1175", NameRule::Contains("vitamin b-6")),
    matcher(Nutrient::VitaminB12, "418", "1178", NameRule::Contains("vitamin b-12")),
    matcher(Nutrient::Folate, "417", "1177", NameRule::Contains("folate")),
    matcher(Nutrient::Niacin, "406", "1167", NameRule::Contains("niacin")),
    matcher(Nutrient::Thiamin, "404", "1165", NameRule::Contains("thiamin")),
];

/// Keys tried, in order, when a record carries a flat nutrient object
pub static FLAT_KEY_ALIASES: [(Nutrient, &[&str]); NUTRIENT_COUNT] = [
    (Nutrient::Calories, &["calories", "energy", "kcal"]),
    (Nutrient::Protein, &["protein"]),
    (Nutrient::Carbs, &["carbs", "carbohydrate", "carbohydrates"]),
    (Nutrient::Fat, &["fat", "fats"]),
    (Nutrient::Fiber, &["fiber", "fibre"]),
    (Nutrient::Sugar, &["sugar"]),
    (Nutrient::Calcium, &["calcium"]),
    (Nutrient::Iron, &["iron"]),
    (Nutrient::Magnesium, &["magnesium"]),
    (Nutrient::Phosphorus, &["phosphorus"]),
    (Nutrient::Potassium, &["potassium"]),
    (Nutrient::Sodium, &["sodium"]),
    (Nutrient::Zinc, &["zinc"]),
    (Nutrient::VitaminA, &["vitamin_a", "vitaminA"]),
    (Nutrient::VitaminC, &["vitamin_c", "vitaminC"]),
    (Nutrient::VitaminD, &["vitamin_d", "vitaminD"]),
    (Nutrient::VitaminE, &["vitamin_e", "vitaminE"]),
    (Nutrient::VitaminK, &["vitamin_k", "vitaminK"]),
    (Nutrient::VitaminB6, &["vitamin_b6", "vitaminB6"]),
    (Nutrient::VitaminB12, &["vitamin_b12", "vitaminB12"]),
    (Nutrient::Folate, &["folate"]),
    (Nutrient::Niacin, &["niacin"]),
    (Nutrient::Thiamin, &["thiamin", "vitamin_b1", "vitaminB1"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_follow_canonical_order() {
        for (index, nutrient) in Nutrient::ALL.iter().enumerate() {
            assert_eq!(NUTRIENT_MATCHERS[index].nutrient, *nutrient);
            assert_eq!(FLAT_KEY_ALIASES[index].0, *nutrient);
        }
    }

    #[test]
    fn test_calories_need_both_keywords() {
        let calories = &NUTRIENT_MATCHERS[0];
        assert!(calories.matches(None, "energy (kcal)"));
        assert!(!calories.matches(None, "energy (kj)"));
        assert!(calories.matches(Some("208"), ""));
        assert!(calories.matches(Some("1008"), ""));
    }

    #[test]
    fn test_fat_matches_either_keyword() {
        let fat = &NUTRIENT_MATCHERS[3];
        assert!(fat.matches(None, "total lipid (fat)"));
        assert!(fat.matches(None, "fatty acids, total saturated"));
        assert!(!fat.matches(Some("203"), "protein"));
    }
}
