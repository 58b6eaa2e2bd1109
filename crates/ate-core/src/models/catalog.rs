// ABOUTME: Canonical food profile produced by the schema normalizer
// ABOUTME: FoodId, ServingKind, ServingOption and NutrientProfile definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::nutrition::NutrientSet;
use crate::constants::servings::{
    REFERENCE_LABEL, REFERENCE_MEASURE_UNIT, REFERENCE_SERVING_GRAMS,
};

/// Opaque catalog identifier, kept in the shape the catalog used
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FoodId {
    /// Numeric id (`fdcId`, `ndbNumber`)
    Numeric(u64),
    /// Any other id rendered as text
    Text(String),
}

impl FoodId {
    /// String form used for id lookups
    #[must_use]
    pub fn as_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Where a serving option came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingKind {
    /// Extracted from the record's own portion list
    Portion,
    /// Synthetic 100 g option substituted when a record has no usable portions
    Reference,
    /// Fixed dataset-independent unit (g, oz, cup, ...)
    Standard,
}

/// A named quantity with an approximate gram equivalent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServingOption {
    /// Display label (`"cup"`, `"large"`, `"g"`)
    pub label: String,
    /// Origin of this option
    pub kind: ServingKind,
    /// Grams per one unit, set on standard options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grams_per_unit: Option<f64>,
    /// Gram weight of the portion as recorded in the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gram_weight: Option<f64>,
    /// Number of units the gram weight describes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Catalog measure unit name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure_unit: Option<String>,
    /// Short unit symbol, set on standard options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ServingOption {
    /// Option built from a catalog portion entry
    #[must_use]
    pub fn portion(
        label: impl Into<String>,
        gram_weight: f64,
        amount: f64,
        measure_unit: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            kind: ServingKind::Portion,
            grams_per_unit: None,
            gram_weight: Some(gram_weight),
            amount: Some(amount),
            measure_unit: Some(measure_unit.into()),
            unit: None,
        }
    }

    /// The synthetic 100 g option
    #[must_use]
    pub fn reference() -> Self {
        Self {
            label: REFERENCE_LABEL.to_owned(),
            kind: ServingKind::Reference,
            grams_per_unit: None,
            gram_weight: Some(REFERENCE_SERVING_GRAMS),
            amount: Some(REFERENCE_SERVING_GRAMS),
            measure_unit: Some(REFERENCE_MEASURE_UNIT.to_owned()),
            unit: None,
        }
    }

    /// A fixed standard unit with a preset gram equivalent
    #[must_use]
    pub fn standard(unit: &str, grams_per_unit: f64) -> Self {
        Self {
            label: unit.to_owned(),
            kind: ServingKind::Standard,
            grams_per_unit: Some(grams_per_unit),
            gram_weight: None,
            amount: None,
            measure_unit: None,
            unit: Some(unit.to_owned()),
        }
    }

    /// Gram equivalent carried by the option itself, if any
    #[must_use]
    pub fn grams(&self) -> Option<f64> {
        self.grams_per_unit.or(self.gram_weight)
    }
}

/// Canonical, fully-defaulted record for one catalog food
///
/// Nutrient amounts are the catalog's per-100 g values; every field is
/// present and zero when the source omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientProfile {
    /// Catalog identifier
    pub id: Option<FoodId>,
    /// Display name
    pub name: String,
    /// Label of the first (smallest) serving option
    pub default_serving_label: String,
    /// Gram weight of the first serving option
    pub default_serving_grams: f64,
    /// Serving options ascending by gram weight, never empty
    pub serving_options: Vec<ServingOption>,
    /// Nutrient amounts
    #[serde(flatten)]
    pub nutrients: NutrientSet,
}

impl NutrientProfile {
    /// Assemble a profile, substituting the reference serving when `serving_options` is empty
    #[must_use]
    pub fn new(
        id: Option<FoodId>,
        name: String,
        mut serving_options: Vec<ServingOption>,
        nutrients: NutrientSet,
    ) -> Self {
        if serving_options.is_empty() {
            serving_options.push(ServingOption::reference());
        }
        let (default_serving_label, default_serving_grams) = serving_options
            .first()
            .map_or_else(
                || (REFERENCE_LABEL.to_owned(), REFERENCE_SERVING_GRAMS),
                |option| {
                    (
                        option.label.clone(),
                        option.grams().unwrap_or(REFERENCE_SERVING_GRAMS),
                    )
                },
            );
        Self {
            id,
            name,
            default_serving_label,
            default_serving_grams,
            serving_options,
            nutrients,
        }
    }

    /// The default serving option
    #[must_use]
    pub fn default_serving(&self) -> Option<&ServingOption> {
        self.serving_options.first()
    }
}
