// ABOUTME: Canonical nutrient identifiers and the zero-filled 23-field nutrient set
// ABOUTME: Nutrient, NutrientCategory and NutrientSet with scaling and accumulation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Number of canonical nutrient fields
pub const NUTRIENT_COUNT: usize = 23;

/// Broad grouping of a canonical nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientCategory {
    /// Energy and macronutrients
    Macro,
    /// Minerals
    Mineral,
    /// Vitamins
    Vitamin,
}

macro_rules! canonical_nutrients {
    ($( $variant:ident, $field:ident, $key:literal, $category:ident, $doc:literal; )+) => {
        /// One of the canonical nutrient fields every profile carries
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Nutrient {
            $(
                #[doc = $doc]
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl Nutrient {
            /// Every canonical nutrient in declaration order
            pub const ALL: [Self; NUTRIENT_COUNT] = [$(Self::$variant,)+];

            /// Wire key (camelCase) used in profiles and deficiency requests
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            /// Macro, mineral or vitamin
            #[must_use]
            pub const fn category(self) -> NutrientCategory {
                match self {
                    $(Self::$variant => NutrientCategory::$category,)+
                }
            }

            /// Resolve a wire key; unknown keys yield `None`
            #[must_use]
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        /// Amounts for all canonical nutrients, zero-filled
        ///
        /// Values stored on a catalog profile are per 100 g of food.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
        pub struct NutrientSet {
            $(
                #[doc = $doc]
                #[serde(rename = $key, default)]
                pub $field: f64,
            )+
        }

        impl NutrientSet {
            /// Amount for `nutrient`
            #[must_use]
            pub const fn get(&self, nutrient: Nutrient) -> f64 {
                match nutrient {
                    $(Nutrient::$variant => self.$field,)+
                }
            }

            /// Mutable slot for `nutrient`
            pub fn get_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
                match nutrient {
                    $(Nutrient::$variant => &mut self.$field,)+
                }
            }
        }
    };
}

canonical_nutrients! {
    Calories, calories, "calories", Macro, "Energy (kcal)";
    Protein, protein, "protein", Macro, "Protein (g)";
    Carbs, carbs, "carbs", Macro, "Carbohydrate by difference (g)";
    Fat, fat, "fat", Macro, "Total lipid (g)";
    Fiber, fiber, "fiber", Macro, "Dietary fiber (g)";
    Sugar, sugar, "sugar", Macro, "Total sugars (g)";
    Calcium, calcium, "calcium", Mineral, "Calcium (mg)";
    Iron, iron, "iron", Mineral, "Iron (mg)";
    Magnesium, magnesium, "magnesium", Mineral, "Magnesium (mg)";
    Phosphorus, phosphorus, "phosphorus", Mineral, "Phosphorus (mg)";
    Potassium, potassium, "potassium", Mineral, "Potassium (mg)";
    Sodium, sodium, "sodium", Mineral, "Sodium (mg)";
    Zinc, zinc, "zinc", Mineral, "Zinc (mg)";
    VitaminA, vitamin_a, "vitaminA", Vitamin, "Vitamin A, RAE (µg)";
    VitaminC, vitamin_c, "vitaminC", Vitamin, "Vitamin C (mg)";
    VitaminD, vitamin_d, "vitaminD", Vitamin, "Vitamin D (µg)";
    VitaminE, vitamin_e, "vitaminE", Vitamin, "Vitamin E, alpha-tocopherol (mg)";
    VitaminK, vitamin_k, "vitaminK", Vitamin, "Vitamin K (µg)";
    VitaminB6, vitamin_b6, "vitaminB6", Vitamin, "Vitamin B-6 (mg)";
    VitaminB12, vitamin_b12, "vitaminB12", Vitamin, "Vitamin B-12 (µg)";
    Folate, folate, "folate", Vitamin, "Folate (µg)";
    Niacin, niacin, "niacin", Vitamin, "Niacin (mg)";
    Thiamin, thiamin, "thiamin", Vitamin, "Thiamin (mg)";
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl NutrientSet {
    /// Overwrite the amount for `nutrient`
    pub fn set(&mut self, nutrient: Nutrient, amount: f64) {
        *self.get_mut(nutrient) = amount;
    }

    /// Amount for a wire key; unknown keys read as zero
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> f64 {
        Nutrient::from_key(key).map_or(0.0, |nutrient| self.get(nutrient))
    }

    /// Every field multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let mut scaled = *self;
        for nutrient in Nutrient::ALL {
            *scaled.get_mut(nutrient) *= factor;
        }
        scaled
    }

    /// Iterate `(nutrient, amount)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL
            .into_iter()
            .map(move |nutrient| (nutrient, self.get(nutrient)))
    }
}

impl AddAssign<&Self> for NutrientSet {
    fn add_assign(&mut self, other: &Self) {
        for nutrient in Nutrient::ALL {
            *self.get_mut(nutrient) += other.get(nutrient);
        }
    }
}

impl Add for NutrientSet {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

impl<'a> std::iter::Sum<&'a Self> for NutrientSet {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, set| {
            acc += set;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp, clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_keys_round_trip_for_every_nutrient() {
        for nutrient in Nutrient::ALL {
            assert_eq!(Nutrient::from_key(nutrient.key()), Some(nutrient));
        }
        assert_eq!(Nutrient::from_key("vitaminX"), None);
    }

    #[test]
    fn test_category_split() {
        let count = |category| {
            Nutrient::ALL
                .iter()
                .filter(|n| n.category() == category)
                .count()
        };
        assert_eq!(count(NutrientCategory::Macro), 6);
        assert_eq!(count(NutrientCategory::Mineral), 7);
        assert_eq!(count(NutrientCategory::Vitamin), 10);
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let mut set = NutrientSet::default();
        set.vitamin_b12 = 2.4;
        let json = serde_json::to_value(set).unwrap();
        assert_eq!(json["vitaminB12"], 2.4);
        assert_eq!(json.as_object().unwrap().len(), NUTRIENT_COUNT);
    }

    #[test]
    fn test_scaled_and_sum() {
        let mut set = NutrientSet::default();
        set.protein = 10.0;
        set.iron = 2.0;

        let doubled = set.scaled(2.0);
        assert_eq!(doubled.protein, 20.0);
        assert_eq!(doubled.iron, 4.0);

        let total: NutrientSet = [set, doubled].iter().sum();
        assert_eq!(total.protein, 30.0);
        assert_eq!(total.get_by_key("iron"), 6.0);
        assert_eq!(total.get_by_key("unknown"), 0.0);
    }
}
