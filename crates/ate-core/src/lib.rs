// ABOUTME: Core types and constants for the ATE nutrient catalog engine
// ABOUTME: Foundation crate with error handling, nutrient code table, and catalog/meal models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ATE Core
//!
//! Foundation crate providing shared types and constants for the ATE nutrient
//! catalog engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `CatalogError`
//! - **constants**: Nutrient code table, serving constants, scoring thresholds and limits
//! - **models**: Canonical nutrient profiles, serving options, meal templates and scored meals

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (nutrient profiles, servings, meals, deficiencies)
pub mod models;
