use async_trait::async_trait;
use plu_search::catalog::Catalog;
use plu_search::error::{CatalogError, CatalogResult};
use plu_search::models::ProduceItem;
use plu_search::repositories::CatalogRepository;
use std::sync::{Arc, Mutex};

/// Mock catalog repository for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockCatalogRepository {
    items: Arc<Mutex<Vec<ProduceItem>>>,
    fail: Arc<Mutex<bool>>,
    load_count: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockCatalogRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
            fail: Arc::new(Mutex::new(false)),
            load_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_items(items: Vec<ProduceItem>) -> Self {
        let repo = Self::new();
        repo.add_items(items);
        repo
    }

    pub fn add_items(&self, items: Vec<ProduceItem>) {
        self.items.lock().unwrap().extend(items);
    }

    /// Make subsequent loads fail with an I/O error.
    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn load_count(&self) -> usize {
        *self.load_count.lock().unwrap()
    }
}

impl Default for MockCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for MockCatalogRepository {
    async fn load(&self) -> CatalogResult<Catalog> {
        *self.load_count.lock().unwrap() += 1;

        if *self.fail.lock().unwrap() {
            return Err(CatalogError::Io {
                path: "mock://catalog.csv".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "mock failure"),
            });
        }

        Ok(Catalog::new(self.items.lock().unwrap().clone()))
    }

    fn source_name(&self) -> String {
        "mock".to_string()
    }
}
