use crate::catalog::Catalog;
use crate::error::CatalogResult;
use crate::repositories::traits::CatalogRepository;
use async_trait::async_trait;

/// Catalog repository serving the CSV compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalogRepository;

#[async_trait]
impl CatalogRepository for BundledCatalogRepository {
    async fn load(&self) -> CatalogResult<Catalog> {
        Ok(Catalog::bundled())
    }

    fn source_name(&self) -> String {
        "bundled".to_string()
    }
}
