//! Error types for the PLU search server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The matching engine itself is total and has no error type; errors only arise at the
//! boundaries (catalog loading, configuration, request validation).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading the produce catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog resource contained no usable rows
    #[error("Catalog is empty: {0}")]
    Empty(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur when validating a lookup request.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Requested result limit is outside the accepted range
    #[error("Invalid result limit: {0}")]
    InvalidLimit(usize),

    /// Query text exceeds the accepted length
    #[error("Search query too long ({len} characters, max {max})")]
    QueryTooLong { len: usize, max: usize },
}

/// Convenience type alias for Results with CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with LookupError
pub type LookupResult<T> = Result<T, LookupError>;
