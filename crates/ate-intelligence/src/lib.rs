// ABOUTME: Nutrition algorithms for the ATE engine with no I/O
// ABOUTME: Serving conversion, meal scaling and coverage scoring, weekly deficiency analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ATE Intelligence
//!
//! Pure computation over catalog profiles. Everything here is synchronous and
//! deterministic; the catalog reads that feed it live in the root crate.
//!
//! - **serving**: serving label to gram equivalent, per-unit nutrient scaling
//! - **meal_scoring**: unit multipliers, allergen exclusion, coverage score and ranking
//! - **deficiency**: body-weight targets and weekly deficiency detection

/// Serving label to gram conversion
pub mod serving;

/// Deficiency-coverage meal scoring
pub mod meal_scoring;

/// Weekly intake analysis and nutrient targets
pub mod deficiency;

pub use deficiency::{find_deficiencies, weekly_intake, IntakeEntry, NutrientTargets, WeeklyIntake};
pub use meal_scoring::{
    rank_meals, score_coverage, unit_multiplier, AllergyFilter, Coverage, MealScorer,
};
pub use serving::{PortionedNutrients, ServingConverter};
