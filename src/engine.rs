// ABOUTME: NutritionEngine facade exposing catalog fetch, search, lookup and meal suggestion
// ABOUTME: Owns one catalog scanner and one meal suggester built from a CatalogConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine facade
//!
//! The three collaborator operations (`fetch_catalog`, `search_catalog`,
//! `suggest_meals`) plus the supplemented lookups live here so an HTTP layer
//! only needs one handle. The engine is cheap to clone.

use ate_core::errors::AppResult;
use ate_core::models::{Deficiency, NutrientProfile, ScoredMeal};
use ate_intelligence::{
    find_deficiencies, weekly_intake, AllergyFilter, IntakeEntry, NutrientTargets,
};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::catalog::{CatalogHealth, CatalogScanner};
use crate::config::{CatalogConfig, EngineConfig};
use crate::meals::MealSuggester;

/// Catalog and meal suggestion entry point
#[derive(Clone)]
pub struct NutritionEngine {
    scanner: CatalogScanner,
    suggester: MealSuggester,
}

impl NutritionEngine {
    /// Engine over the catalog described by `config`
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when `config` fails validation
    pub fn new(config: CatalogConfig) -> AppResult<Self> {
        config.validate()?;
        info!(
            catalog.path = %config.catalog_path.display(),
            catalog.serving_mode = %config.serving_mode,
            "Nutrition engine created"
        );
        let scanner = CatalogScanner::new(config);
        let suggester = MealSuggester::new(scanner.clone());
        Ok(Self { scanner, suggester })
    }

    /// Engine configured from environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when an environment variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        Self::new(EngineConfig::from_env()?.catalog)
    }

    /// Catalog configuration in use
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        self.scanner.config()
    }

    /// Underlying scanner
    #[must_use]
    pub const fn scanner(&self) -> &CatalogScanner {
        &self.scanner
    }

    /// First `limit` profiles in catalog order, or the configured fetch limit
    ///
    /// # Errors
    ///
    /// Returns `CatalogUnavailable` or `CatalogMalformed`
    pub async fn fetch_catalog(&self, limit: Option<usize>) -> AppResult<Vec<NutrientProfile>> {
        let limit = limit.unwrap_or(self.config().fetch_limit);
        self.scanner.fetch(limit).await
    }

    /// First `limit` profiles matching every token of `query`, or the configured search limit
    ///
    /// # Errors
    ///
    /// Returns `CatalogUnavailable` or `CatalogMalformed`
    pub async fn search_catalog(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> AppResult<Vec<NutrientProfile>> {
        let limit = limit.unwrap_or(self.config().search_limit);
        self.scanner.search(query, limit).await
    }

    /// Profile whose id renders as `id`
    ///
    /// # Errors
    ///
    /// Returns `CatalogUnavailable` or `CatalogMalformed`
    pub async fn find_food(&self, id: &str) -> AppResult<Option<NutrientProfile>> {
        self.scanner.find_by_id(id).await
    }

    /// Top meal templates for `deficiencies`, excluding any in `allergy_csv`
    ///
    /// # Errors
    ///
    /// Returns `CatalogUnavailable` when the catalog cannot be opened
    pub async fn suggest_meals(
        &self,
        deficiencies: &[Deficiency],
        allergy_csv: &str,
    ) -> AppResult<Vec<ScoredMeal>> {
        let allergies = AllergyFilter::from_csv(allergy_csv);
        self.suggester.suggest(deficiencies, &allergies).await
    }

    /// Deficiencies for the week ending `weeks_back` weeks before `now`, then suggestions for them
    ///
    /// Returns the deficiencies alongside the meals so callers can show both.
    ///
    /// # Errors
    ///
    /// Returns `CatalogUnavailable` when deficiencies exist and the catalog cannot be opened
    pub async fn analyze_week(
        &self,
        entries: &[IntakeEntry],
        now: DateTime<Utc>,
        weeks_back: u32,
        body_weight_kg: Option<f64>,
        allergy_csv: &str,
    ) -> AppResult<(Vec<Deficiency>, Vec<ScoredMeal>)> {
        let Some(week) = weekly_intake(entries, now, weeks_back) else {
            return Ok((Vec::new(), Vec::new()));
        };
        let targets = NutrientTargets::for_body_weight(body_weight_kg);
        let deficiencies = find_deficiencies(&week.nutrients, &targets);
        let meals = self.suggest_meals(&deficiencies, allergy_csv).await?;
        Ok((deficiencies, meals))
    }

    /// Catalog reachability report
    pub async fn health(&self) -> CatalogHealth {
        self.scanner.health().await
    }
}
