// ABOUTME: Ordered alias accessors for reading canonical fields out of raw catalog records
// ABOUTME: FieldPath, FieldAccessor and the static accessor tables for records, nutrients and portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Field accessors
//!
//! Catalog records come in several shapes. Each canonical field has a fixed,
//! ordered list of places it may live; the first one holding a non-null value
//! wins.

use serde_json::Value;

/// One place a field may live inside a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    /// Top-level key
    Key(&'static str),
    /// Key inside a nested object (`nutrient.number`)
    Nested(&'static str, &'static str),
}

impl FieldPath {
    /// Non-null value at this path
    #[must_use]
    pub fn lookup<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        let value = match *self {
            Self::Key(key) => record.get(key),
            Self::Nested(outer, inner) => record.get(outer).and_then(|nested| nested.get(inner)),
        }?;
        (!value.is_null()).then_some(value)
    }
}

/// Prioritized alias list for one canonical field
#[derive(Debug, Clone, Copy)]
pub struct FieldAccessor {
    /// Canonical field name, for diagnostics
    pub field: &'static str,
    /// Candidate paths in priority order
    pub paths: &'static [FieldPath],
}

impl FieldAccessor {
    /// Accessor for `field` trying `paths` in order
    #[must_use]
    pub const fn new(field: &'static str, paths: &'static [FieldPath]) -> Self {
        Self { field, paths }
    }

    /// First non-null value along the alias list
    #[must_use]
    pub fn first<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        self.paths.iter().find_map(|path| path.lookup(record))
    }

    /// First value along the alias list that `convert` accepts
    pub fn resolve_with<'a, T>(
        &self,
        record: &'a Value,
        convert: impl Fn(&'a Value) -> Option<T>,
    ) -> Option<T> {
        self.paths
            .iter()
            .filter_map(|path| path.lookup(record))
            .find_map(convert)
    }
}

use FieldPath::{Key, Nested};

/// Record identifier
pub const FOOD_ID: FieldAccessor = FieldAccessor::new(
    "id",
    &[
        Key("fdcId"),
        Key("ndbNumber"),
        Key("cn_code"),
        Key("id"),
        Key("code"),
        Key("food_id"),
    ],
);

/// Record display name
pub const FOOD_NAME: FieldAccessor = FieldAccessor::new(
    "name",
    &[
        Key("description"),
        Key("descriptor"),
        Key("name"),
        Key("desc"),
        Key("food_name"),
    ],
);

/// Portion or weight list
pub const PORTIONS: FieldAccessor = FieldAccessor::new(
    "portions",
    &[
        Key("foodPortions"),
        Key("weights"),
        Key("weight"),
        Key("measures"),
        Key("serving"),
    ],
);

/// Nutrient entry array or flat nutrient object
pub const NUTRIENTS: FieldAccessor = FieldAccessor::new(
    "nutrients",
    &[
        Key("foodNutrients"),
        Key("nutrients"),
        Key("nutrient"),
        Key("nutrient_values"),
        Key("nutrient_values_list"),
    ],
);

/// Code of one nutrient entry
///
/// The row-level `id` comes last so that `FoodData Central` entries lacking
/// `nutrient.number` still resolve through `nutrient.id`.
pub const ENTRY_CODE: FieldAccessor = FieldAccessor::new(
    "nutrient code",
    &[
        Nested("nutrient", "number"),
        Key("nutrient_code"),
        Key("code"),
        Key("nutrientId"),
        Key("nutrient"),
        Nested("nutrient", "id"),
        Key("id"),
    ],
);

/// Amount of one nutrient entry
pub const ENTRY_VALUE: FieldAccessor = FieldAccessor::new(
    "nutrient amount",
    &[
        Key("amount"),
        Key("value"),
        Key("nutrient_value"),
        Key("quantity"),
    ],
);

/// Name of one nutrient entry
pub const ENTRY_NAME: FieldAccessor = FieldAccessor::new(
    "nutrient name",
    &[Nested("nutrient", "name"), Key("name"), Key("nutrient_name")],
);

/// Gram weight of one portion
pub const PORTION_GRAMS: FieldAccessor = FieldAccessor::new("gram weight", &[Key("gramWeight")]);

/// Label of one portion
pub const PORTION_LABEL: FieldAccessor = FieldAccessor::new(
    "portion label",
    &[Key("modifier"), Key("portionDescription"), Key("label")],
);

/// Unit count of one portion
pub const PORTION_AMOUNT: FieldAccessor = FieldAccessor::new("portion amount", &[Key("value")]);

/// Measure unit of one portion
pub const PORTION_UNIT: FieldAccessor =
    FieldAccessor::new("measure unit", &[Nested("measureUnit", "name")]);

/// Numeric reading of a JSON value; numeric strings are accepted
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Non-empty text reading of a scalar JSON value
#[must_use]
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
