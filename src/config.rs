//! Configuration management for the PLU search server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honored if present; nothing is printed to stdout, which the MCP
//! transport owns.

use crate::error::{ConfigError, ConfigResult};
use crate::matching::DEFAULT_MAX_RESULTS;
use crate::repositories::{BundledCatalogRepository, CatalogRepository, CsvFileCatalogRepository};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

/// Upper bound for `PLU_MAX_RESULTS` and per-request limits.
pub const MAX_RESULTS_LIMIT: usize = 50;

/// Configuration for the PLU search server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog CSV to load; `None` uses the catalog bundled into the binary
    pub catalog_path: Option<PathBuf>,

    /// Default number of results per lookup (default: 5)
    pub max_results: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PLU_CATALOG_PATH`: CSV file with a header row, `code,description[,...]` rows
    /// - `PLU_MAX_RESULTS`: Default result count, 1-50 (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let catalog_path = match env::var("PLU_CATALOG_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "PLU_CATALOG_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => Some(PathBuf::from(path.trim())),
            Err(_) => None,
        };

        let max_results = Self::parse_env_usize("PLU_MAX_RESULTS", DEFAULT_MAX_RESULTS)?;
        if max_results == 0 || max_results > MAX_RESULTS_LIMIT {
            return Err(ConfigError::InvalidValue {
                var: "PLU_MAX_RESULTS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_RESULTS_LIMIT),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            catalog_path,
            max_results,
            log_level,
        })
    }

    /// Build the catalog source this configuration points at.
    pub fn catalog_repository(&self) -> Arc<dyn CatalogRepository> {
        match &self.catalog_path {
            Some(path) => Arc::new(CsvFileCatalogRepository::new(path.clone())),
            None => Arc::new(BundledCatalogRepository),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_path: None,
            max_results: DEFAULT_MAX_RESULTS,
            log_level: "error".to_string(),
        }
    }
}
