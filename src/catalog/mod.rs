// ABOUTME: Food catalog access: raw record normalization, text search and bounded scans
// ABOUTME: Re-exports the scanner handle, normalizer and query types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food catalog
//!
//! The catalog is a single JSON file of heterogeneous food records. Nothing
//! is cached between calls: each operation re-reads the file, so edits to the
//! catalog are visible on the next request.
//!
//! - [`fields`]: ordered alias lists for canonical fields
//! - [`normalizer`]: raw record to [`NutrientProfile`](ate_core::models::NutrientProfile)
//! - [`query`]: token search and the shared record filter
//! - [`reader`]: structural gate, streaming and whole-document parsing
//! - [`scanner`]: bounded scans and the async [`CatalogScanner`]

pub mod fields;
pub mod normalizer;
pub mod query;
pub mod reader;
pub mod scanner;

pub use normalizer::SchemaNormalizer;
pub use query::{normalize_text, RecordFilter, SearchQuery};
pub use scanner::{scan_catalog, CatalogHealth, CatalogScanner, ScanRequest};
