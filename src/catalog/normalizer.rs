// ABOUTME: Maps arbitrary raw catalog records onto the canonical nutrient profile
// ABOUTME: Alias-driven id/name/portion resolution and code/name nutrient matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Schema normalizer
//!
//! Normalization never fails. Missing or malformed fields degrade to
//! defaults: no id, the name `"Unknown"`, zero nutrients, a 100 g serving.
//!
//! Two nutrient shapes are recognised:
//!
//! 1. An array of entries, each carrying its own code, name and amount. Every
//!    entry is tested against every canonical field's matcher and a match
//!    overwrites the field, so when several entries match the same field the
//!    last one wins.
//! 2. A flat object keyed by nutrient name, read through a per-field alias list.

use std::cmp::Ordering;
use std::sync::LazyLock;

use ate_core::constants::limits::UNKNOWN_FOOD_NAME;
use ate_core::constants::servings::{STANDARD_SERVINGS, UNDETERMINED_MEASURE_UNIT};
use ate_core::constants::{FLAT_KEY_ALIASES, NUTRIENT_MATCHERS};
use ate_core::models::{FoodId, NutrientProfile, NutrientSet, ServingOption};
use serde_json::{Map, Value};

use super::fields::{
    as_number, as_text, ENTRY_CODE, ENTRY_NAME, ENTRY_VALUE, FOOD_ID, FOOD_NAME, NUTRIENTS,
    PORTIONS, PORTION_AMOUNT, PORTION_GRAMS, PORTION_LABEL, PORTION_UNIT,
};
use crate::config::ServingMode;

/// Fixed serving list, ascending by gram equivalent
static STANDARD_OPTIONS: LazyLock<Vec<ServingOption>> = LazyLock::new(|| {
    let mut options: Vec<ServingOption> = STANDARD_SERVINGS
        .iter()
        .map(|(unit, grams)| ServingOption::standard(unit, *grams))
        .collect();
    options.sort_by(compare_grams);
    options
});

/// Raw record to canonical profile mapper
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaNormalizer {
    serving_mode: ServingMode,
}

impl SchemaNormalizer {
    /// Normalizer using `serving_mode` for serving options
    #[must_use]
    pub const fn new(serving_mode: ServingMode) -> Self {
        Self { serving_mode }
    }

    /// Serving strategy in use
    #[must_use]
    pub const fn serving_mode(&self) -> ServingMode {
        self.serving_mode
    }

    /// Map one raw record to a canonical profile
    #[must_use]
    pub fn normalize(&self, record: &Value) -> NutrientProfile {
        let serving_options = match self.serving_mode {
            ServingMode::Portions => portion_options(record),
            ServingMode::Standard => STANDARD_OPTIONS.clone(),
        };
        NutrientProfile::new(
            record_id(record),
            record_name(record).unwrap_or_else(|| UNKNOWN_FOOD_NAME.to_owned()),
            serving_options,
            record_nutrients(record),
        )
    }
}

/// Resolved identifier of a raw record
#[must_use]
pub fn record_id(record: &Value) -> Option<FoodId> {
    FOOD_ID.resolve_with(record, |value| match value {
        Value::Number(number) => match number.as_u64() {
            Some(0) => None,
            Some(id) => Some(FoodId::Numeric(id)),
            None => Some(FoodId::Text(number.to_string())),
        },
        Value::String(_) => as_text(value).map(FoodId::Text),
        _ => None,
    })
}

/// Resolved display name of a raw record, if it has one
#[must_use]
pub fn record_name(record: &Value) -> Option<String> {
    FOOD_NAME.resolve_with(record, as_text)
}

/// Canonical nutrient amounts of a raw record
#[must_use]
pub fn record_nutrients(record: &Value) -> NutrientSet {
    match NUTRIENTS.first(record) {
        Some(Value::Array(entries)) => entry_nutrients(entries),
        Some(Value::Object(flat)) => flat_nutrients(flat),
        _ => NutrientSet::default(),
    }
}

fn entry_nutrients(entries: &[Value]) -> NutrientSet {
    let mut nutrients = NutrientSet::default();
    for entry in entries {
        let code = ENTRY_CODE.resolve_with(entry, as_text);
        let name = ENTRY_NAME
            .resolve_with(entry, as_text)
            .map(|name| name.to_lowercase())
            .unwrap_or_default();
        let amount = amount_of(ENTRY_VALUE.first(entry));

        for matcher in &NUTRIENT_MATCHERS {
            if matcher.matches(code.as_deref(), &name) {
                nutrients.set(matcher.nutrient, amount);
            }
        }
    }
    nutrients
}

fn flat_nutrients(flat: &Map<String, Value>) -> NutrientSet {
    let mut nutrients = NutrientSet::default();
    for (nutrient, aliases) in &FLAT_KEY_ALIASES {
        let value = aliases
            .iter()
            .find_map(|alias| flat.get(*alias).filter(|value| !value.is_null()));
        nutrients.set(*nutrient, amount_of(value));
    }
    nutrients
}

/// Non-negative finite amount, zero otherwise
fn amount_of(value: Option<&Value>) -> f64 {
    value
        .and_then(as_number)
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .unwrap_or(0.0)
}

fn portion_options(record: &Value) -> Vec<ServingOption> {
    let Some(Value::Array(portions)) = PORTIONS.first(record) else {
        return Vec::new();
    };

    let mut options: Vec<ServingOption> = portions
        .iter()
        .filter_map(|portion| {
            let grams = PORTION_GRAMS
                .first(portion)
                .and_then(as_number)
                .filter(|grams| grams.is_finite() && *grams > 0.0)?;
            let label = PORTION_LABEL.resolve_with(portion, as_text)?;
            let amount = PORTION_AMOUNT
                .first(portion)
                .and_then(as_number)
                .filter(|amount| amount.is_finite() && *amount > 0.0)
                .unwrap_or(1.0);
            let measure_unit = PORTION_UNIT
                .resolve_with(portion, as_text)
                .unwrap_or_else(|| UNDETERMINED_MEASURE_UNIT.to_owned());
            Some(ServingOption::portion(label, grams, amount, measure_unit))
        })
        .collect();

    options.sort_by(compare_grams);
    options
}

fn compare_grams(a: &ServingOption, b: &ServingOption) -> Ordering {
    let grams = |option: &ServingOption| option.grams().unwrap_or(0.0);
    grams(a).total_cmp(&grams(b))
}
