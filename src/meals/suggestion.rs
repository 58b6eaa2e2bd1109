// ABOUTME: Deficiency-driven meal suggestions over the template library and the food catalog
// ABOUTME: Fans out one task per template, joins its ingredient searches, then scores and ranks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use ate_core::constants::scoring::INGREDIENT_SEARCH_LIMIT;
use ate_core::errors::{AppError, AppResult};
use ate_core::models::{Deficiency, MealTemplate, ResolvedFood, ScoredMeal};
use ate_intelligence::{rank_meals, AllergyFilter, MealScorer};
use futures_util::future::join_all;
use tracing::{debug, instrument};

use super::templates::MEAL_TEMPLATES;
use crate::catalog::CatalogScanner;
use crate::logging::ScanLogger;

/// Scores meal templates against a deficiency request
#[derive(Clone)]
pub struct MealSuggester {
    scanner: CatalogScanner,
    templates: Arc<Vec<MealTemplate>>,
}

impl MealSuggester {
    /// Suggester over the built-in template library
    #[must_use]
    pub fn new(scanner: CatalogScanner) -> Self {
        Self::with_templates(scanner, MEAL_TEMPLATES.clone())
    }

    /// Suggester over a caller-supplied template list
    #[must_use]
    pub fn with_templates(scanner: CatalogScanner, templates: Vec<MealTemplate>) -> Self {
        Self {
            scanner,
            templates: Arc::new(templates),
        }
    }

    /// Templates considered by [`Self::suggest`]
    #[must_use]
    pub fn templates(&self) -> &[MealTemplate] {
        &self.templates
    }

    /// Up to five templates ranked by how much of `deficiencies` they cover
    ///
    /// Templates with an allergen ingredient, no resolvable ingredient, or no
    /// covered deficiency are left out. A template whose lookups fail is
    /// dropped without failing the batch.
    ///
    /// # Errors
    ///
    /// Returns `CatalogUnavailable` when the catalog cannot be opened
    #[instrument(
        skip(self, deficiencies, allergies),
        fields(deficiencies = deficiencies.len(), templates = self.templates.len())
    )]
    pub async fn suggest(
        &self,
        deficiencies: &[Deficiency],
        allergies: &AllergyFilter,
    ) -> AppResult<Vec<ScoredMeal>> {
        if deficiencies.is_empty() {
            return Ok(Vec::new());
        }
        self.scanner.ensure_available().await?;

        let started = Instant::now();
        let deficiencies: Arc<[Deficiency]> = deficiencies.into();
        let allergies = Arc::new(allergies.clone());

        let handles: Vec<_> = (0..self.templates.len())
            .map(|index| {
                let scanner = self.scanner.clone();
                let templates = Arc::clone(&self.templates);
                let deficiencies = Arc::clone(&deficiencies);
                let allergies = Arc::clone(&allergies);
                tokio::spawn(async move {
                    let template = &templates[index];
                    let foods = resolve_ingredients(&scanner, template).await?;
                    Ok::<_, AppError>(
                        MealScorer::new(&deficiencies, &allergies).score(template, foods),
                    )
                })
            })
            .collect();

        // Awaited in template order so ties keep declaration order after the stable sort
        let mut candidates = Vec::new();
        for (template, handle) in self.templates.iter().zip(handles) {
            let outcome = handle
                .await
                .map_err(|e| e.to_string())
                .and_then(|scored| scored.map_err(|e| e.to_string()));
            match outcome {
                Ok(Some(meal)) => candidates.push(meal),
                Ok(None) => {}
                Err(error) => ScanLogger::log_template_failure(template.id, &template.name, &error),
            }
        }

        let scored = candidates.len();
        let ranked = rank_meals(candidates);
        ScanLogger::log_suggestions(
            deficiencies.len(),
            allergies.terms().len(),
            scored,
            ranked.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(ranked)
    }
}

/// Resolve every ingredient of `template` concurrently, dropping misses
async fn resolve_ingredients(
    scanner: &CatalogScanner,
    template: &MealTemplate,
) -> AppResult<Vec<ResolvedFood>> {
    let lookups = template
        .foods
        .iter()
        .map(|food| scanner.search(&food.search_term, INGREDIENT_SEARCH_LIMIT));
    let results = join_all(lookups).await;

    let mut foods = Vec::with_capacity(template.foods.len());
    for (food, result) in template.foods.iter().zip(results) {
        match result?.first() {
            Some(profile) => foods.push(MealScorer::resolve(food, profile)),
            None => debug!(
                template.id = template.id,
                ingredient = %food.search_term,
                "ingredient unresolved"
            ),
        }
    }
    Ok(foods)
}
