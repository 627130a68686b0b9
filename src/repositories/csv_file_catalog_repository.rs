use crate::catalog::{parse_catalog, Catalog};
use crate::error::{CatalogError, CatalogResult};
use crate::repositories::traits::CatalogRepository;
use async_trait::async_trait;
use std::path::PathBuf;

/// Catalog repository reading a comma-delimited file from disk.
///
/// The file must start with a header row. Malformed rows are skipped and
/// undecodable bytes are replaced with U+FFFD; a file with no usable rows is
/// reported as [`CatalogError::Empty`].
#[derive(Debug, Clone)]
pub struct CsvFileCatalogRepository {
    path: PathBuf,
}

impl CsvFileCatalogRepository {
    /// Create a new CsvFileCatalogRepository for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogRepository for CsvFileCatalogRepository {
    async fn load(&self) -> CatalogResult<Catalog> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        // Invalid UTF-8 only spoils the rows it appears in
        let text = String::from_utf8_lossy(&bytes);
        let items = parse_catalog(&text);
        if items.is_empty() {
            return Err(CatalogError::Empty(format!(
                "no usable rows in {}",
                self.path.display()
            )));
        }

        Ok(Catalog::new(items))
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}
