// ABOUTME: Token search query and the record predicate shared by both scan paths
// ABOUTME: Text normalization, all-tokens name matching and id matching on raw records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog search
//!
//! A query matches a record when its normalized name contains every query
//! token as a substring. Filters run against raw records, before
//! normalization, so both scan paths accept exactly the same records.

use serde_json::Value;

use super::normalizer::{record_id, record_name};

/// Lower-case, collapse non-alphanumeric runs to one space, trim
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_space && !normalized.is_empty() {
                normalized.push(' ');
            }
            pending_space = false;
            normalized.push(ch);
        } else {
            pending_space = true;
        }
    }
    normalized
}

/// Whitespace-delimited tokens of a normalized query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    tokens: Vec<String>,
}

impl SearchQuery {
    /// Parse a raw query string
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let tokens = normalize_text(query)
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        Self { tokens }
    }

    /// True when the query has no tokens and therefore matches nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Parsed tokens
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when the normalized `name` contains every token, in any order
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let name = normalize_text(name);
        self.tokens.iter().all(|token| name.contains(token.as_str()))
    }
}

/// Which raw records a scan collects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Every record, in catalog order
    All,
    /// Records whose name matches the query
    Query(SearchQuery),
    /// Records whose id renders as this string
    Id(String),
}

impl RecordFilter {
    /// Evaluate the filter against a raw record
    #[must_use]
    pub fn accepts(&self, record: &Value) -> bool {
        match self {
            Self::All => true,
            Self::Query(query) => record_name(record).is_some_and(|name| query.matches_name(&name)),
            Self::Id(id) => record_id(record).is_some_and(|found| found.as_key() == *id),
        }
    }

    /// Operation name used in logs
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::All => "fetch",
            Self::Query(_) => "search",
            Self::Id(_) => "find_by_id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Egg, whole -- RAW!! "), "egg whole raw");
        assert_eq!(normalize_text("Crème fraîche"), "crème fraîche");
        assert_eq!(normalize_text(",,,"), "");
    }

    #[test]
    fn test_blank_queries_match_nothing() {
        assert!(SearchQuery::parse("").is_empty());
        assert!(SearchQuery::parse("   ").is_empty());
        assert!(SearchQuery::parse(" ,;- ").is_empty());
        assert!(!SearchQuery::parse("").matches_name("anything"));
    }

    #[test]
    fn test_all_tokens_required_in_any_order() {
        let query = SearchQuery::parse("chicken breast");
        assert!(query.matches_name("Chicken, breast, raw"));
        assert!(query.matches_name("Breast of chicken"));
        assert!(!query.matches_name("Chicken broth"));
    }

    #[test]
    fn test_filter_on_raw_records() {
        let record = json!({ "fdcId": 42, "description": "Egg, whole, raw" });
        assert!(RecordFilter::All.accepts(&record));
        assert!(RecordFilter::Query(SearchQuery::parse("egg, whole, raw")).accepts(&record));
        assert!(RecordFilter::Id("42".into()).accepts(&record));
        assert!(!RecordFilter::Id("43".into()).accepts(&record));
        assert!(!RecordFilter::Query(SearchQuery::parse("egg")).accepts(&json!({ "fdcId": 1 })));
    }
}
