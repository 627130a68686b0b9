//! PLU Search - typo-tolerant produce code lookup.
//!
//! This library finds produce PLU (Price Look-Up) codes from free-text
//! queries, typed or transcribed from speech, using per-word edit distance.
//!
//! # Architecture
//!
//! - **models**: The produce item record
//! - **catalog**: Immutable in-memory catalog and its CSV parser
//! - **matching**: Edit distance, tokenizers and the ranking matcher
//! - **repositories**: Catalog sources (bundled, file on disk)
//! - **services**: Lookup service routing both input modalities
//! - **observability**: Metrics and timers reported through `tracing`
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **server**: MCP protocol server

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, ConfigError, LookupError};
pub use matching::{levenshtein_distance, tokenize_description, tokenize_query, ProduceMatcher};
pub use models::ProduceItem;
pub use observability::{MetricsTracker, Timer};
pub use repositories::{
    load_or_empty, BundledCatalogRepository, CatalogLoad, CatalogRepository,
    CsvFileCatalogRepository,
};
pub use server::PluSearchServer;
pub use services::{LookupResponse, LookupService, LookupServiceImpl, QueryInput};
