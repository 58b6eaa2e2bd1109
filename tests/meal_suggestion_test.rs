// ABOUTME: Integration tests for deficiency-driven meal suggestions
// ABOUTME: Allergen exclusion, coverage filtering, ranking bounds and weekly analysis end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use ate_engine::catalog::CatalogScanner;
use ate_engine::config::CatalogConfig;
use ate_engine::errors::ErrorCode;
use ate_engine::intelligence::{AllergyFilter, IntakeEntry};
use ate_engine::meals::MealSuggester;
use ate_engine::models::{
    Deficiency, MealCategory, MealTemplate, Nutrient, NutrientSet, TemplateFood,
};
use ate_engine::NutritionEngine;
use chrono::{Duration, TimeZone, Utc};
use common::{engine_for, init_test_logging, sample_records, write_array_catalog};

fn protein_gap() -> Vec<Deficiency> {
    vec![Deficiency::new(Nutrient::Protein, 0.0, 10.0)]
}

fn egg_only_template() -> MealTemplate {
    MealTemplate {
        id: 900,
        name: "Egg Plate".to_owned(),
        category: MealCategory::Breakfast,
        foods: vec![
            TemplateFood::new("egg, whole, raw", 2.0, "large"),
            TemplateFood::new("dragon fruit", 100.0, "g"),
        ],
    }
}

#[tokio::test]
async fn test_allergen_excludes_whole_template() {
    init_test_logging();
    let file = write_array_catalog(&sample_records());
    let scanner = CatalogScanner::new(CatalogConfig::new(file.path()));
    let suggester = MealSuggester::with_templates(scanner, vec![egg_only_template()]);

    let allowed = suggester
        .suggest(&protein_gap(), &AllergyFilter::default())
        .await
        .unwrap();
    assert_eq!(allowed.len(), 1);
    assert_eq!(allowed[0].foods.len(), 1);
    assert_eq!(allowed[0].foods[0].name, "Egg, whole, raw, fresh");
    assert_eq!(allowed[0].deficits_covered, 1);

    let excluded = suggester
        .suggest(&protein_gap(), &AllergyFilter::from_csv("EGG"))
        .await
        .unwrap();
    assert!(excluded.is_empty());
}

#[tokio::test]
async fn test_builtin_templates_respect_result_bounds() {
    let file = write_array_catalog(&sample_records());
    let engine = engine_for(&file);

    let deficiencies = vec![
        Deficiency::new(Nutrient::Protein, 40.0, 112.0),
        Deficiency::new(Nutrient::Iron, 4.0, 18.0),
        Deficiency::new(Nutrient::Folate, 100.0, 400.0),
    ];
    let meals = engine.suggest_meals(&deficiencies, "peanut, shellfish").await.unwrap();

    assert!(!meals.is_empty());
    assert!(meals.len() <= 5);
    assert!(meals.iter().all(|meal| meal.deficits_covered > 0));
    assert!(meals
        .windows(2)
        .all(|pair| pair[0].coverage_score >= pair[1].coverage_score));
    for meal in &meals {
        let summed: NutrientSet = meal.foods.iter().map(|food| &food.nutrients).sum();
        assert_eq!(summed, meal.total_nutrients);
    }
}

#[tokio::test]
async fn test_suggestions_are_repeatable() {
    let file = write_array_catalog(&sample_records());
    let engine = engine_for(&file);
    let deficiencies = protein_gap();

    let first = engine.suggest_meals(&deficiencies, "").await.unwrap();
    let second = engine.suggest_meals(&deficiencies, "").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_catalog_surfaces_unavailable() {
    init_test_logging();
    let engine =
        NutritionEngine::new(CatalogConfig::new("/definitely/not/a/catalog.json")).unwrap();

    let error = engine.suggest_meals(&protein_gap(), "").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::CatalogUnavailable);

    // Nothing to cover means nothing to read
    assert!(engine.suggest_meals(&[], "").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_weekly_analysis_feeds_suggestions() {
    let file = write_array_catalog(&sample_records());
    let engine = engine_for(&file);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();

    let mut light_day = NutrientSet::default();
    light_day.calories = 900.0;
    light_day.protein = 20.0;
    let entries: Vec<IntakeEntry> = (1..=7)
        .map(|days_ago| IntakeEntry {
            date: now - Duration::days(days_ago),
            total_nutrients: light_day,
        })
        .collect();

    let (deficiencies, meals) = engine
        .analyze_week(&entries, now, 0, Some(70.0), "")
        .await
        .unwrap();

    assert!(!deficiencies.is_empty());
    assert!(deficiencies.len() <= 8);
    assert!(deficiencies
        .windows(2)
        .all(|pair| pair[0].deficit >= pair[1].deficit));
    assert!(meals.len() <= 5);

    let (none, no_meals) = engine
        .analyze_week(&entries, now, 4, None, "")
        .await
        .unwrap();
    assert!(none.is_empty());
    assert!(no_meals.is_empty());
}
