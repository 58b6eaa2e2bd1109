// ABOUTME: Serving size constants and unit-to-gram approximations
// ABOUTME: Reference 100 g serving, fixed standard serving list and unit fallback table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Catalog nutrient values are expressed per this many grams
pub const NUTRIENT_BASIS_GRAMS: f64 = 100.0;

/// Gram weight of the synthetic reference serving
pub const REFERENCE_SERVING_GRAMS: f64 = 100.0;

/// Label of the synthetic reference serving
pub const REFERENCE_LABEL: &str = "g";

/// Measure unit of the synthetic reference serving
pub const REFERENCE_MEASURE_UNIT: &str = "gram";

/// Measure unit recorded when a portion omits one
pub const UNDETERMINED_MEASURE_UNIT: &str = "undetermined";

/// Grams per gram
pub const GRAMS_PER_GRAM: f64 = 1.0;

/// Grams per ounce
pub const GRAMS_PER_OZ: f64 = 28.35;

/// Grams per cup (water-equivalent)
pub const GRAMS_PER_CUP: f64 = 240.0;

/// Grams per tablespoon (water-equivalent)
pub const GRAMS_PER_TBSP: f64 = 15.0;

/// Grams per teaspoon (water-equivalent)
pub const GRAMS_PER_TSP: f64 = 5.0;

/// Approximate grams in a bowl
pub const GRAMS_PER_BOWL: f64 = 300.0;

/// Approximate grams in a piece
pub const GRAMS_PER_PIECE: f64 = 50.0;

/// Dataset-independent serving list used by the standard serving mode
pub const STANDARD_SERVINGS: [(&str, f64); 7] = [
    ("g", GRAMS_PER_GRAM),
    ("oz", GRAMS_PER_OZ),
    ("cup", GRAMS_PER_CUP),
    ("tbsp", GRAMS_PER_TBSP),
    ("tsp", GRAMS_PER_TSP),
    ("bowl", GRAMS_PER_BOWL),
    ("piece", GRAMS_PER_PIECE),
];

/// Last-resort gram equivalents keyed by lower-cased unit label
pub const UNIT_FALLBACK_GRAMS: [(&str, f64); 2] = [("piece", GRAMS_PER_PIECE), ("bowl", GRAMS_PER_BOWL)];
