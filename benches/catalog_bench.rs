// ABOUTME: Criterion benchmarks for catalog normalization, bounded scans and meal suggestion
// ABOUTME: Runs against a generated FoodData Central style catalog written to a temp file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the catalog engine.
//!
//! Measures schema normalization throughput, early-stopping fetch and search
//! scans, and the full meal suggestion fan-out.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use std::io::Write;

use ate_engine::catalog::SchemaNormalizer;
use ate_engine::config::CatalogConfig;
use ate_engine::models::{Deficiency, Nutrient};
use ate_engine::NutritionEngine;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use tokio::runtime::Runtime;

/// Records in the generated catalog
const CATALOG_SIZE: usize = 5_000;

const FOOD_WORDS: [&str; 8] = [
    "chicken", "rice", "spinach", "lentils", "salmon", "oats", "almonds", "yogurt",
];

#[allow(clippy::cast_precision_loss)]
fn generate_record(index: usize) -> Value {
    let word = FOOD_WORDS[index % FOOD_WORDS.len()];
    let scale = (index % 17) as f64;
    json!({
        "fdcId": 100_000 + index,
        "description": format!("{word}, variety {index}, raw"),
        "foodNutrients": [
            { "nutrient": { "number": "208", "name": "Energy" }, "amount": 50.0 + scale * 10.0 },
            { "nutrient": { "number": "203", "name": "Protein" }, "amount": 2.0 + scale },
            { "nutrient": { "number": "303", "name": "Iron, Fe" }, "amount": 0.5 + scale / 10.0 },
            { "nutrient": { "number": "417", "name": "Folate, total" }, "amount": 20.0 + scale * 5.0 }
        ],
        "foodPortions": [
            { "gramWeight": 140.0, "modifier": "cup", "value": 1, "measureUnit": { "name": "cup" } },
            { "gramWeight": 28.0, "modifier": "oz", "value": 1 }
        ]
    })
}

fn write_catalog(size: usize) -> NamedTempFile {
    let records: Vec<Value> = (0..size).map(generate_record).collect();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&serde_json::to_vec(&records).unwrap())
        .unwrap();
    file
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let normalizer = SchemaNormalizer::default();
    let records: Vec<Value> = (0..1_000).map(generate_record).collect();

    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("fdc_records_1000", |b| {
        b.iter(|| {
            for record in &records {
                black_box(normalizer.normalize(black_box(record)));
            }
        });
    });

    group.finish();
}

fn bench_scans(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("catalog_scan");
    let file = write_catalog(CATALOG_SIZE);
    let engine = NutritionEngine::new(CatalogConfig::new(file.path())).unwrap();

    for limit in [10_usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("fetch", limit), &limit, |b, &limit| {
            b.iter(|| {
                rt.block_on(async {
                    black_box(engine.fetch_catalog(Some(limit)).await.unwrap());
                });
            });
        });
    }

    group.bench_function("search_early_stop", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(engine.search_catalog("salmon raw", Some(5)).await.unwrap());
            });
        });
    });

    group.bench_function("search_full_pass", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(engine.search_catalog("variety 4999", Some(50)).await.unwrap());
            });
        });
    });

    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("suggest_meals");
    group.sample_size(10);
    let file = write_catalog(CATALOG_SIZE);
    let engine = NutritionEngine::new(CatalogConfig::new(file.path())).unwrap();
    let deficiencies = vec![
        Deficiency::new(Nutrient::Protein, 60.0, 112.0),
        Deficiency::new(Nutrient::Iron, 8.0, 18.0),
        Deficiency::new(Nutrient::Folate, 150.0, 400.0),
    ];

    group.bench_function("builtin_templates", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(engine.suggest_meals(&deficiencies, "peanut").await.unwrap());
            });
        });
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_scans, bench_suggest);
criterion_main!(benches);
