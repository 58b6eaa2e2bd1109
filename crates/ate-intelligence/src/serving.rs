// ABOUTME: Resolves a serving option to an approximate gram equivalent
// ABOUTME: Scales per-100 g catalog nutrients to one unit and to a requested quantity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ate_core::constants::servings::{NUTRIENT_BASIS_GRAMS, UNIT_FALLBACK_GRAMS};
use ate_core::errors::{AppError, AppResult};
use ate_core::models::{NutrientProfile, NutrientSet, ServingOption};
use serde::{Deserialize, Serialize};

/// Nutrients for one unit of a chosen serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortionedNutrients {
    /// Resolved gram equivalent, `None` when the unit could not be resolved
    pub grams_per_unit: Option<f64>,
    /// Multiplier applied to per-100 g values
    pub ratio: f64,
    /// Nutrients for one unit
    pub nutrients: NutrientSet,
}

impl PortionedNutrients {
    /// Nutrients for `quantity` units
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `quantity` is not a positive finite number
    pub fn for_quantity(&self, quantity: f64) -> AppResult<NutrientSet> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "serving quantity must be positive, got {quantity}"
            )));
        }
        Ok(self.nutrients.scaled(quantity))
    }
}

/// Serving label to gram conversion
pub struct ServingConverter;

impl ServingConverter {
    /// Gram equivalent of one unit of `option`
    ///
    /// Tries the option's own `grams_per_unit`, then its `gram_weight`, then the
    /// caller's override, then the unit fallback table. `None` means the unit is
    /// unknown and callers treat it as a single 100 g-equivalent unit.
    #[must_use]
    pub fn grams_per_unit(option: &ServingOption, override_grams: Option<f64>) -> Option<f64> {
        positive(option.grams_per_unit)
            .or_else(|| positive(option.gram_weight))
            .or_else(|| positive(override_grams))
            .or_else(|| Self::fallback_grams(option))
    }

    /// Multiplier for per-100 g values, 1 when grams are unknown
    #[must_use]
    pub fn ratio(grams_per_unit: Option<f64>) -> f64 {
        grams_per_unit.map_or(1.0, |grams| grams / NUTRIENT_BASIS_GRAMS)
    }

    /// Per-unit nutrients of `profile` for `option`
    #[must_use]
    pub fn per_unit(
        profile: &NutrientProfile,
        option: &ServingOption,
        override_grams: Option<f64>,
    ) -> PortionedNutrients {
        let grams_per_unit = Self::grams_per_unit(option, override_grams);
        let ratio = Self::ratio(grams_per_unit);
        PortionedNutrients {
            grams_per_unit,
            ratio,
            nutrients: profile.nutrients.scaled(ratio),
        }
    }

    /// Per-unit nutrients for the profile's default serving
    #[must_use]
    pub fn per_default_unit(profile: &NutrientProfile) -> PortionedNutrients {
        match profile.default_serving() {
            Some(option) => Self::per_unit(profile, option, None),
            None => PortionedNutrients {
                grams_per_unit: None,
                ratio: 1.0,
                nutrients: profile.nutrients,
            },
        }
    }

    fn fallback_grams(option: &ServingOption) -> Option<f64> {
        let key = option
            .unit
            .as_deref()
            .unwrap_or(option.label.as_str())
            .to_lowercase();
        UNIT_FALLBACK_GRAMS
            .iter()
            .find(|(unit, _)| *unit == key)
            .map(|(_, grams)| *grams)
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|grams| grams.is_finite() && *grams > 0.0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp, clippy::unwrap_used)]

    use super::*;
    use ate_core::models::ServingKind;

    fn profile_with(option: ServingOption) -> NutrientProfile {
        let mut nutrients = NutrientSet::default();
        nutrients.protein = 12.0;
        nutrients.calcium = 50.0;
        NutrientProfile::new(None, "Test food".into(), vec![option], nutrients)
    }

    fn unlabeled(label: &str) -> ServingOption {
        ServingOption {
            label: label.into(),
            kind: ServingKind::Portion,
            grams_per_unit: None,
            gram_weight: None,
            amount: None,
            measure_unit: None,
            unit: None,
        }
    }

    #[test]
    fn test_reference_serving_keeps_stored_values() {
        let profile = NutrientProfile::new(None, "Rice".into(), Vec::new(), NutrientSet {
            protein: 2.7,
            ..NutrientSet::default()
        });
        let portioned = ServingConverter::per_default_unit(&profile);
        assert_eq!(portioned.grams_per_unit, Some(100.0));
        assert_eq!(portioned.ratio, 1.0);
        assert_eq!(portioned.nutrients, profile.nutrients);
    }

    #[test]
    fn test_resolution_order() {
        let standard = ServingOption::standard("cup", 240.0);
        assert_eq!(ServingConverter::grams_per_unit(&standard, Some(10.0)), Some(240.0));

        let portion = ServingOption::portion("large", 50.0, 1.0, "undetermined");
        assert_eq!(ServingConverter::grams_per_unit(&portion, Some(10.0)), Some(50.0));

        let bare = unlabeled("handful");
        assert_eq!(ServingConverter::grams_per_unit(&bare, Some(30.0)), Some(30.0));
        assert_eq!(ServingConverter::grams_per_unit(&bare, Some(0.0)), None);
        assert_eq!(ServingConverter::grams_per_unit(&bare, None), None);
    }

    #[test]
    fn test_fallback_table_is_case_insensitive() {
        assert_eq!(ServingConverter::grams_per_unit(&unlabeled("Piece"), None), Some(50.0));
        assert_eq!(ServingConverter::grams_per_unit(&unlabeled("BOWL"), None), Some(300.0));
    }

    #[test]
    fn test_unknown_unit_uses_ratio_one() {
        let option = unlabeled("scoop");
        let profile = profile_with(option.clone());
        let portioned = ServingConverter::per_unit(&profile, &option, None);
        assert_eq!(portioned.grams_per_unit, None);
        assert_eq!(portioned.nutrients.protein, 12.0);
    }

    #[test]
    fn test_per_unit_and_quantity_scaling() {
        let option = ServingOption::portion("cup", 200.0, 1.0, "cup");
        let profile = profile_with(option.clone());
        let portioned = ServingConverter::per_unit(&profile, &option, None);
        assert_eq!(portioned.ratio, 2.0);
        assert_eq!(portioned.nutrients.protein, 24.0);

        let three = portioned.for_quantity(3.0).unwrap();
        assert_eq!(three.calcium, 300.0);

        assert!(portioned.for_quantity(0.0).is_err());
        assert!(portioned.for_quantity(f64::NAN).is_err());
    }
}
