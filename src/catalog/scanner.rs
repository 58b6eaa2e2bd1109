// ABOUTME: Bounded catalog scans over the streaming and whole-document paths
// ABOUTME: Sync scan core plus the async CatalogScanner handle used by the engine and meal suggester
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog scanner
//!
//! Every operation is a single pass over the file that applies one
//! [`RecordFilter`] to raw records, normalizes the ones it accepts, and stops
//! once `limit` profiles have been collected. The streaming path is tried
//! whenever the document is a top-level array. Other documents, and searches
//! that stream zero matches, are read whole.
//!
//! Scans run on the blocking pool. A semaphore bounds how many are in flight,
//! which keeps the meal suggester's fan-out from opening hundreds of file
//! handles at once.

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use ate_core::errors::{AppResult, CatalogError};
use ate_core::models::NutrientProfile;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Semaphore;
use tokio::task;
use tracing::instrument;

use super::normalizer::SchemaNormalizer;
use super::query::{RecordFilter, SearchQuery};
use super::reader::{self, Shape, StreamEnd};
use crate::config::{CatalogConfig, ServingMode};
use crate::logging::{ScanLogger, ScanPath};

/// One bounded scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Which raw records to collect
    pub filter: RecordFilter,
    /// Maximum number of profiles to return
    pub limit: usize,
    /// Re-read the whole document when the streaming pass finds nothing
    pub retry_when_empty: bool,
}

impl ScanRequest {
    /// First `limit` records in catalog order
    #[must_use]
    pub const fn fetch(limit: usize) -> Self {
        Self {
            filter: RecordFilter::All,
            limit,
            retry_when_empty: false,
        }
    }

    /// First `limit` records whose name matches `query`
    #[must_use]
    pub const fn search(query: SearchQuery, limit: usize) -> Self {
        Self {
            filter: RecordFilter::Query(query),
            limit,
            retry_when_empty: true,
        }
    }

    /// First record whose id renders as `id`
    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            filter: RecordFilter::Id(id.into()),
            limit: 1,
            retry_when_empty: true,
        }
    }
}

struct Collector<'a> {
    normalizer: &'a SchemaNormalizer,
    request: &'a ScanRequest,
    profiles: Vec<NutrientProfile>,
}

impl<'a> Collector<'a> {
    fn new(normalizer: &'a SchemaNormalizer, request: &'a ScanRequest) -> Self {
        Self {
            normalizer,
            request,
            profiles: Vec::new(),
        }
    }

    fn offer(&mut self, record: &Value) -> ControlFlow<()> {
        if self.request.filter.accepts(record) {
            self.profiles.push(self.normalizer.normalize(record));
        }
        if self.profiles.len() >= self.request.limit {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Run one scan synchronously
///
/// Returns the collected profiles in catalog order together with the parse
/// path that produced them.
///
/// # Errors
///
/// Returns `Unavailable` when the file cannot be read, `Malformed` when it is
/// not valid JSON, and `NoRecordArray` when a wrapping object holds no array
pub fn scan_catalog(
    path: &Path,
    normalizer: &SchemaNormalizer,
    request: &ScanRequest,
) -> Result<(Vec<NutrientProfile>, ScanPath), CatalogError> {
    if request.limit == 0 {
        return Ok((Vec::new(), ScanPath::Streaming));
    }

    let mut source = reader::open(path)?;
    match reader::peek_shape(&mut source, path)? {
        Shape::Array => {
            let mut collector = Collector::new(normalizer, request);
            let end = reader::stream_array(source, path, |record| collector.offer(&record))?;
            if collector.profiles.is_empty()
                && end == StreamEnd::Completed
                && request.retry_when_empty
            {
                ScanLogger::log_fallback(request.filter.operation(), path, "no streamed matches");
                return Ok((scan_whole(path, normalizer, request)?, ScanPath::Fallback));
            }
            Ok((collector.profiles, ScanPath::Streaming))
        }
        Shape::Other => {
            drop(source);
            ScanLogger::log_fallback(request.filter.operation(), path, "not a top-level array");
            Ok((scan_whole(path, normalizer, request)?, ScanPath::Fallback))
        }
    }
}

fn scan_whole(
    path: &Path,
    normalizer: &SchemaNormalizer,
    request: &ScanRequest,
) -> Result<Vec<NutrientProfile>, CatalogError> {
    let records = reader::read_records(path)?;
    let mut collector = Collector::new(normalizer, request);
    for record in &records {
        if collector.offer(record).is_break() {
            break;
        }
    }
    Ok(collector.profiles)
}

/// Catalog reachability report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogHealth {
    /// Configured catalog path
    pub path: PathBuf,
    /// True when the file exists and can be opened
    pub exists: bool,
    /// Serving strategy applied to scanned records
    pub serving_mode: ServingMode,
}

struct ScannerInner {
    config: CatalogConfig,
    normalizer: SchemaNormalizer,
    permits: Semaphore,
}

/// Shareable handle for scanning one catalog file
#[derive(Clone)]
pub struct CatalogScanner {
    inner: Arc<ScannerInner>,
}

impl CatalogScanner {
    /// Scanner over the catalog described by `config`
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        let normalizer = SchemaNormalizer::new(config.serving_mode);
        let permits = Semaphore::new(config.scan_concurrency.max(1));
        Self {
            inner: Arc::new(ScannerInner {
                config,
                normalizer,
                permits,
            }),
        }
    }

    /// Catalog configuration in use
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    /// Path of the catalog file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.inner.config.catalog_path
    }

    /// First `limit` profiles in catalog order
    ///
    /// # Errors
    ///
    /// Returns a catalog error when the file is missing or unparseable
    pub async fn fetch(&self, limit: usize) -> AppResult<Vec<NutrientProfile>> {
        self.run(ScanRequest::fetch(limit)).await
    }

    /// First `limit` profiles whose name contains every query token
    ///
    /// A query without tokens returns an empty list without touching the file.
    ///
    /// # Errors
    ///
    /// Returns a catalog error when the file is missing or unparseable
    pub async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<NutrientProfile>> {
        let query = SearchQuery::parse(query);
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.run(ScanRequest::search(query, limit)).await
    }

    /// Profile whose id renders as `id`
    ///
    /// # Errors
    ///
    /// Returns a catalog error when the file is missing or unparseable
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<NutrientProfile>> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(None);
        }
        Ok(self.run(ScanRequest::by_id(id)).await?.into_iter().next())
    }

    /// Confirm the catalog file can be opened
    ///
    /// # Errors
    ///
    /// Returns `CatalogUnavailable` when it cannot
    pub async fn ensure_available(&self) -> AppResult<()> {
        let path = self.path().to_path_buf();
        task::spawn_blocking(move || reader::open(&path).map(drop))
            .await
            .map_err(|e| CatalogError::ScanAborted(e.to_string()))??;
        Ok(())
    }

    /// Reachability report for the configured catalog
    pub async fn health(&self) -> CatalogHealth {
        CatalogHealth {
            path: self.path().to_path_buf(),
            exists: self.ensure_available().await.is_ok(),
            serving_mode: self.inner.config.serving_mode,
        }
    }

    #[instrument(
        skip(self, request),
        fields(operation = request.filter.operation(), limit = request.limit)
    )]
    async fn run(&self, request: ScanRequest) -> AppResult<Vec<NutrientProfile>> {
        let _permit = self
            .inner
            .permits
            .acquire()
            .await
            .map_err(|e| CatalogError::ScanAborted(e.to_string()))?;

        let started = Instant::now();
        let inner = Arc::clone(&self.inner);
        let (profiles, request) = task::spawn_blocking(move || {
            let outcome = scan_catalog(&inner.config.catalog_path, &inner.normalizer, &request);
            (outcome, request)
        })
        .await
        .map_err(|e| CatalogError::ScanAborted(e.to_string()))?;
        let (profiles, scan_path) = profiles?;

        ScanLogger::log_scan(
            request.filter.operation(),
            self.path(),
            scan_path,
            profiles.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::io::Write;

    fn catalog(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    fn names(profiles: &[NutrientProfile]) -> Vec<&str> {
        profiles.iter().map(|profile| profile.name.as_str()).collect()
    }

    #[test]
    fn test_zero_limit_skips_io() {
        let (profiles, _) = scan_catalog(
            Path::new("/definitely/not/here.json"),
            &SchemaNormalizer::default(),
            &ScanRequest::fetch(0),
        )
        .unwrap();
        assert!(profiles.is_empty());
    }

    #[test]
    fn test_streaming_stops_at_limit() {
        let file = catalog(r#"[{"name":"A"},{"name":"B"},{"name":"C"}, not json at all"#);
        let (profiles, scan_path) =
            scan_catalog(file.path(), &SchemaNormalizer::default(), &ScanRequest::fetch(2)).unwrap();
        assert_eq!(names(&profiles), vec!["A", "B"]);
        assert_eq!(scan_path, ScanPath::Streaming);
    }

    #[test]
    fn test_wrapped_document_uses_fallback() {
        let file = catalog(r#"{"meta":{"v":1},"foods":[{"name":"Oats"},{"name":"Rice"}]}"#);
        let request = ScanRequest::search(SearchQuery::parse("rice"), 10);
        let (profiles, scan_path) =
            scan_catalog(file.path(), &SchemaNormalizer::default(), &request).unwrap();
        assert_eq!(names(&profiles), vec!["Rice"]);
        assert_eq!(scan_path, ScanPath::Fallback);
    }

    #[test]
    fn test_empty_search_retries_whole_document() {
        let file = catalog(r#"[{"name":"Oats"}]"#);
        let request = ScanRequest::search(SearchQuery::parse("kale"), 10);
        let (profiles, scan_path) =
            scan_catalog(file.path(), &SchemaNormalizer::default(), &request).unwrap();
        assert!(profiles.is_empty());
        assert_eq!(scan_path, ScanPath::Fallback);
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let error = scan_catalog(
            Path::new("/definitely/not/here.json"),
            &SchemaNormalizer::default(),
            &ScanRequest::fetch(5),
        )
        .unwrap_err();
        assert!(matches!(error, CatalogError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_scanner_search_and_lookup() {
        let file = catalog(
            r#"[{"fdcId":1,"description":"Chicken, breast, raw"},{"fdcId":2,"description":"Chicken broth"}]"#,
        );
        let scanner = CatalogScanner::new(CatalogConfig::new(file.path()));

        let found = scanner.search("chicken breast", 10).await.unwrap();
        assert_eq!(names(&found), vec!["Chicken, breast, raw"]);
        assert!(scanner.search("  ", 10).await.unwrap().is_empty());

        let broth = scanner.find_by_id("2").await.unwrap().unwrap();
        assert_eq!(broth.name, "Chicken broth");
        assert!(scanner.find_by_id("3").await.unwrap().is_none());
        assert!(scanner.health().await.exists);
    }
}
