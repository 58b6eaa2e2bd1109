// ABOUTME: Main library entry point for the ATE nutrient catalog engine
// ABOUTME: Streaming catalog normalization, token search and deficiency-driven meal suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ATE Engine
//!
//! Reads a heterogeneous JSON food catalog, maps each record onto a fixed
//! set of 23 nutrients, and answers three questions for the layers above it:
//!
//! - **Fetch**: the first N foods in catalog order
//! - **Search**: foods whose name contains every query token
//! - **Suggest**: which curated meals best cover a set of nutrient deficits
//!
//! ## Architecture
//!
//! - `ate-core`: errors, constants and data models
//! - `ate-intelligence`: serving conversion, meal scoring and deficiency math
//! - [`catalog`]: schema normalization and the streaming scanner
//! - [`meals`]: template library and the concurrent suggester
//! - [`engine`]: the [`NutritionEngine`] facade
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ate_engine::config::CatalogConfig;
//! use ate_engine::errors::AppResult;
//! use ate_engine::NutritionEngine;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let engine = NutritionEngine::new(CatalogConfig::new("foodNutrientDatabase.json"))?;
//!     let eggs = engine.search_catalog("egg, whole, raw", Some(5)).await?;
//!     println!("{} matches", eggs.len());
//!     Ok(())
//! }
//! ```

/// Food catalog normalization, search and scanning
pub mod catalog;

/// Configuration management
pub mod config;

/// Constants re-exported from `ate-core`
pub mod constants;

/// Engine facade
pub mod engine;

/// Error types re-exported from `ate-core`
pub mod errors;

/// Structured logging setup and scan log helpers
pub mod logging;

/// Meal templates and suggestions
pub mod meals;

/// Data models re-exported from `ate-core`
pub mod models;

/// Pure serving, scoring and deficiency algorithms
pub use ate_intelligence as intelligence;

pub use engine::NutritionEngine;
