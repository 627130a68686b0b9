use crate::catalog::Catalog;
use crate::error::CatalogResult;
use async_trait::async_trait;

/// Source of the produce catalog.
///
/// Provides abstraction over where catalog rows come from, enabling
/// different implementations (bundled resource, file on disk, mock).
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Load and parse the full catalog.
    async fn load(&self) -> CatalogResult<Catalog>;

    /// Human-readable name of the source, for logs.
    fn source_name(&self) -> String;
}
