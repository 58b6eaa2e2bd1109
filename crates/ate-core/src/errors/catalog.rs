// ABOUTME: Catalog-specific error types for the streaming scanner and its fallback parser
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalog Error Types
//!
//! - `CatalogError` - failures while opening, streaming or re-parsing the catalog file
//! - Conversion to `AppError` so collaborators see one of the two surfaced codes

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::AppError;

/// Errors raised while reading the food catalog.
///
/// Only these reach the caller; lookup misses and template failures are
/// absorbed by the meal pipeline.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file missing or unreadable
    #[error("catalog file {path} is unavailable: {source}")]
    Unavailable {
        /// Configured catalog path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
    /// Catalog bytes could not be parsed by the streaming or fallback path
    #[error("catalog file {path} is malformed: {reason}")]
    Malformed {
        /// Configured catalog path
        path: PathBuf,
        /// Parser message
        reason: String,
    },
    /// Catalog parsed but holds no array of records at the top level or one level down
    #[error("catalog file {path} contains no array of food records")]
    NoRecordArray {
        /// Configured catalog path
        path: PathBuf,
    },
    /// Blocking scan task panicked or was cancelled
    #[error("catalog scan task aborted: {0}")]
    ScanAborted(String),
}

impl CatalogError {
    /// Build an `Unavailable` error for `path`
    pub fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Unavailable {
            path: path.into(),
            source,
        }
    }

    /// Build a `Malformed` error for `path`
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    fn path(&self) -> Option<String> {
        match self {
            Self::Unavailable { path, .. }
            | Self::Malformed { path, .. }
            | Self::NoRecordArray { path } => Some(path.display().to_string()),
            Self::ScanAborted(_) => None,
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let message = error.to_string();
        let path = error.path();
        let mut app_error = match error {
            CatalogError::Unavailable { .. } => Self::catalog_unavailable(message),
            CatalogError::Malformed { .. } | CatalogError::NoRecordArray { .. } => {
                Self::catalog_malformed(message)
            }
            CatalogError::ScanAborted(_) => Self::internal(message),
        };
        if let Some(path) = path {
            app_error = app_error.with_resource_id(path);
        }
        app_error.with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_unavailable_maps_to_catalog_unavailable() {
        let error = CatalogError::unavailable(
            "missing.json",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let app_error = AppError::from(error);
        assert_eq!(app_error.code, ErrorCode::CatalogUnavailable);
        assert_eq!(app_error.context.resource_id.as_deref(), Some("missing.json"));
        assert!(app_error.source.is_some());
    }

    #[test]
    fn test_missing_array_is_malformed() {
        let error = CatalogError::NoRecordArray {
            path: PathBuf::from("wrapped.json"),
        };
        assert_eq!(AppError::from(error).code, ErrorCode::CatalogMalformed);
        let aborted = AppError::from(CatalogError::ScanAborted("task panicked".into()));
        assert_eq!(aborted.code, ErrorCode::InternalError);
        assert!(aborted.context.resource_id.is_none());
    }
}
