//! Lookup service layer.
//!
//! Routes typed and spoken queries into the same matcher, validates request
//! parameters, and records metrics.

use crate::catalog::Catalog;
use crate::config::MAX_RESULTS_LIMIT;
use crate::error::{LookupError, LookupResult};
use crate::matching::ProduceMatcher;
use crate::models::ProduceItem;
use crate::observability::{MetricsTracker, Timer};
use crate::repositories::CatalogLoad;
use async_trait::async_trait;
use serde::Serialize;

/// Maximum accepted query length, in characters.
pub const MAX_QUERY_LENGTH: usize = 500;

/// Query text from one of the two input modalities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryInput {
    /// Typed text entry
    Text(String),

    /// Speech-to-text alternatives, most likely first
    Spoken(Vec<String>),
}

impl QueryInput {
    /// The text to search for.
    ///
    /// Spoken input uses its first alternative. `None` means the recognizer
    /// produced nothing and no lookup should happen.
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Spoken(alternatives) => alternatives.into_iter().next(),
        }
    }
}

/// Result of a lookup, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResponse {
    /// The text that was searched
    pub query: String,

    /// Matching items, best first
    pub results: Vec<ProduceItem>,

    /// True when nothing matched; the caller should tell the user
    pub no_match: bool,

    /// Why the catalog is empty, attached to no-match responses after a failed load
    pub load_error: Option<String>,
}

/// Lookup service trait.
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Look up produce for a query.
    ///
    /// Returns `Ok(None)` when spoken input carried no transcription.
    async fn lookup(
        &self,
        input: QueryInput,
        limit: Option<usize>,
    ) -> LookupResult<Option<LookupResponse>>;

    /// Number of items in the loaded catalog.
    fn catalog_size(&self) -> usize;

    /// Result limit used when a request doesn't specify one.
    fn default_limit(&self) -> usize;

    /// Message from a failed catalog load, if any.
    fn load_error(&self) -> Option<String>;
}

/// Default implementation of LookupService over an in-memory catalog.
pub struct LookupServiceImpl {
    catalog: Catalog,
    matcher: ProduceMatcher,
    default_limit: usize,
    metrics: MetricsTracker,
    load_error: Option<String>,
}

/// Validation helper functions.
impl LookupServiceImpl {
    /// Validate the requested result limit.
    fn validate_limit(limit: usize) -> LookupResult<()> {
        if limit == 0 || limit > MAX_RESULTS_LIMIT {
            return Err(LookupError::InvalidLimit(limit));
        }
        Ok(())
    }

    /// Validate query length.
    fn validate_query(query: &str) -> LookupResult<()> {
        let len = query.chars().count();
        if len > MAX_QUERY_LENGTH {
            return Err(LookupError::QueryTooLong {
                len,
                max: MAX_QUERY_LENGTH,
            });
        }
        Ok(())
    }
}

impl LookupServiceImpl {
    /// Create a new lookup service.
    pub fn new(catalog: Catalog, default_limit: usize, metrics: MetricsTracker) -> Self {
        Self {
            catalog,
            matcher: ProduceMatcher::new(),
            default_limit,
            metrics,
            load_error: None,
        }
    }

    /// Create a lookup service from a startup load, keeping any load failure.
    pub fn from_load(load: CatalogLoad, default_limit: usize, metrics: MetricsTracker) -> Self {
        Self {
            load_error: load.error,
            ..Self::new(load.catalog, default_limit, metrics)
        }
    }
}

#[async_trait]
impl LookupService for LookupServiceImpl {
    async fn lookup(
        &self,
        input: QueryInput,
        limit: Option<usize>,
    ) -> LookupResult<Option<LookupResponse>> {
        let limit = limit.unwrap_or(self.default_limit);
        Self::validate_limit(limit)?;

        let Some(query) = input.into_text() else {
            tracing::debug!("Spoken input had no transcription, skipping lookup");
            return Ok(None);
        };
        Self::validate_query(&query)?;

        let timer = Timer::new("lookup");
        let results = self.matcher.lookup(&query, self.catalog.items(), limit);
        self.metrics.track_lookup(timer.finish(), results.len());

        if results.is_empty() {
            tracing::debug!(query = %query, "No match found");
        }

        let no_match = results.is_empty();
        Ok(Some(LookupResponse {
            query,
            results,
            no_match,
            load_error: if no_match {
                self.load_error.clone()
            } else {
                None
            },
        }))
    }

    fn catalog_size(&self) -> usize {
        self.catalog.len()
    }

    fn default_limit(&self) -> usize {
        self.default_limit
    }

    fn load_error(&self) -> Option<String> {
        self.load_error.clone()
    }
}
