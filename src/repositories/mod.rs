//! Catalog sources.
//!
//! Repositories produce a ready-made [`Catalog`]; [`load_or_empty`] applies the
//! startup policy that a failed load degrades to an empty catalog instead of
//! stopping the server, keeping the failure message for clients to see.

mod bundled_catalog_repository;
mod csv_file_catalog_repository;
mod traits;

pub use bundled_catalog_repository::BundledCatalogRepository;
pub use csv_file_catalog_repository::CsvFileCatalogRepository;
pub use traits::CatalogRepository;

use crate::catalog::Catalog;
use crate::observability::{MetricsTracker, Timer};

/// Outcome of loading the catalog at startup.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    /// The loaded catalog, empty if loading failed
    pub catalog: Catalog,

    /// User-facing failure message, e.g. "Error loading CSV: ..."
    pub error: Option<String>,
}

/// Load the catalog, falling back to an empty one on failure.
///
/// Failures are logged at error level and counted; they are never fatal.
pub async fn load_or_empty(
    repo: &dyn CatalogRepository,
    metrics: &MetricsTracker,
) -> CatalogLoad {
    let timer = Timer::new("catalog_load");
    let result = repo.load().await;
    timer.finish_with_status(result.is_ok());

    match result {
        Ok(catalog) => {
            metrics.track_catalog_load(true);
            tracing::info!(
                source = %repo.source_name(),
                items = catalog.len(),
                "Catalog loaded"
            );
            CatalogLoad {
                catalog,
                error: None,
            }
        }
        Err(e) => {
            metrics.track_catalog_load(false);
            let message = format!("Error loading CSV: {}", e);
            tracing::error!(source = %repo.source_name(), "{}", message);
            CatalogLoad {
                catalog: Catalog::empty(),
                error: Some(message),
            }
        }
    }
}
