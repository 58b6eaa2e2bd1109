// ABOUTME: Shared test utilities for catalog and meal suggestion integration tests
// ABOUTME: Quiet logging init and temporary catalog fixtures in the shapes the scanner accepts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ate_engine`

use std::io::Write;
use std::sync::Once;

use ate_engine::config::CatalogConfig;
use ate_engine::NutritionEngine;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Write raw bytes to a temporary catalog file
pub fn write_catalog_bytes(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

/// Write `records` as a top-level JSON array
pub fn write_array_catalog(records: &[Value]) -> NamedTempFile {
    write_catalog_bytes(&serde_json::to_vec(records).unwrap())
}

/// Write `records` inside a `{"foods": [...]}` wrapper
pub fn write_wrapped_catalog(records: &[Value]) -> NamedTempFile {
    let document = json!({ "version": "test", "foods": records });
    write_catalog_bytes(&serde_json::to_vec(&document).unwrap())
}

/// Engine over `file` with default settings
pub fn engine_for(file: &NamedTempFile) -> NutritionEngine {
    init_test_logging();
    NutritionEngine::new(CatalogConfig::new(file.path())).unwrap()
}

/// FoodData Central style record with nutrient entries and portions
pub fn fdc_record(id: u64, description: &str, nutrients: &[(&str, &str, f64)]) -> Value {
    let entries: Vec<Value> = nutrients
        .iter()
        .map(|(number, name, amount)| {
            json!({ "nutrient": { "number": number, "name": name }, "amount": amount })
        })
        .collect();
    json!({
        "fdcId": id,
        "description": description,
        "foodNutrients": entries,
        "foodPortions": [
            { "gramWeight": 50.0, "modifier": "large", "value": 1, "measureUnit": { "name": "undetermined" } }
        ]
    })
}

/// Small mixed catalog used across suites
pub fn sample_records() -> Vec<Value> {
    vec![
        fdc_record(
            171_287,
            "Egg, whole, raw, fresh",
            &[("208", "Energy", 143.0), ("203", "Protein", 12.6), ("204", "Total lipid (fat)", 9.5)],
        ),
        fdc_record(
            171_077,
            "Chicken, broilers or fryers, breast, meat only, raw",
            &[("208", "Energy", 120.0), ("203", "Protein", 22.5)],
        ),
        fdc_record(
            172_883,
            "Soup, chicken broth, canned",
            &[("208", "Energy", 16.0), ("203", "Protein", 2.0)],
        ),
        json!({
            "id": "SP-1",
            "name": "Spinach, raw",
            "nutrients": { "calories": 23, "protein": 2.9, "iron": 2.7, "vitamin_c": 28.1, "folate": 194 }
        }),
        json!({
            "fdcId": 169_756,
            "description": "Rice, white, long-grain, cooked",
            "foodNutrients": [
                { "nutrient": { "number": "208", "name": "Energy" }, "amount": 130 },
                { "nutrient": { "number": "205", "name": "Carbohydrate, by difference" }, "amount": 28.2 }
            ]
        }),
    ]
}
