//! Integration tests for catalog sources and the load-or-empty startup policy.

use plu_search::error::CatalogError;
use plu_search::repositories::{
    load_or_empty, BundledCatalogRepository, CatalogRepository, CsvFileCatalogRepository,
};
use plu_search::{MetricsTracker, ProduceItem};
use std::io::Write;
use tempfile::NamedTempFile;

mod mocks;
use mocks::MockCatalogRepository;

fn write_catalog(contents: &str) -> NamedTempFile {
    write_catalog_bytes(contents.as_bytes())
}

fn write_catalog_bytes(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_csv_file_repository_loads_rows() {
    let file = write_catalog(
        "PLU,Description,Category\r\n4011,Banana,Fruit\r\nbroken row\r\n4093, Yellow Onion ,Vegetable\r\n",
    );
    let repo = CsvFileCatalogRepository::new(file.path());

    let catalog = repo.load().await.unwrap();
    assert_eq!(
        catalog.items(),
        &[
            ProduceItem::new("4011", "Banana"),
            ProduceItem::new("4093", "Yellow Onion"),
        ]
    );
}

#[tokio::test]
async fn test_csv_file_repository_keeps_rows_around_invalid_utf8() {
    // Latin-1 encoded "Jalapeño" is not valid UTF-8
    let file = write_catalog_bytes(
        b"PLU,Description\n4011,Banana\n4999,Jalape\xf1o\n4093,Yellow Onion\n",
    );
    let repo = CsvFileCatalogRepository::new(file.path());

    let catalog = repo.load().await.unwrap();
    let codes: Vec<&str> = catalog.items().iter().map(|i| i.code.as_str()).collect();
    assert_eq!(codes, vec!["4011", "4999", "4093"]);
    assert_eq!(catalog.items()[1].description, "Jalape\u{FFFD}o");

    let metrics = MetricsTracker::new();
    let load = load_or_empty(&repo, &metrics).await;
    assert_eq!(load.catalog.len(), 3);
    assert!(load.error.is_none());
}

#[tokio::test]
async fn test_csv_file_repository_missing_file() {
    let repo = CsvFileCatalogRepository::new("/definitely/not/here/plu.csv");

    match repo.load().await {
        Err(CatalogError::Io { path, .. }) => {
            assert_eq!(path.to_str(), Some("/definitely/not/here/plu.csv"));
        }
        other => panic!("Expected Io error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_csv_file_repository_header_only() {
    let file = write_catalog("PLU,Description\n");
    let repo = CsvFileCatalogRepository::new(file.path());

    assert!(matches!(repo.load().await, Err(CatalogError::Empty(_))));
}

#[tokio::test]
async fn test_bundled_repository() {
    let repo = BundledCatalogRepository;
    let catalog = repo.load().await.unwrap();

    assert!(!catalog.is_empty());
    assert_eq!(repo.source_name(), "bundled");
}

#[tokio::test]
async fn test_load_or_empty_success() {
    let repo = MockCatalogRepository::with_items(vec![ProduceItem::new("4011", "Banana")]);
    let metrics = MetricsTracker::new();

    let load = load_or_empty(&repo, &metrics).await;

    assert_eq!(load.catalog.len(), 1);
    assert!(load.error.is_none());
    assert_eq!(repo.load_count(), 1);
    assert_eq!(metrics.catalog_loads_total(), 1);
    assert_eq!(metrics.catalog_load_failures_total(), 0);
}

#[tokio::test]
async fn test_load_or_empty_failure_degrades_to_empty() {
    let repo = MockCatalogRepository::with_items(vec![ProduceItem::new("4011", "Banana")]);
    repo.set_failing(true);
    let metrics = MetricsTracker::new();

    let load = load_or_empty(&repo, &metrics).await;

    assert!(load.catalog.is_empty());
    assert_eq!(
        load.error.as_deref(),
        Some("Error loading CSV: Failed to read catalog mock://catalog.csv: mock failure")
    );
    assert_eq!(metrics.catalog_load_failures_total(), 1);
}

#[tokio::test]
async fn test_load_or_empty_missing_file() {
    let repo = CsvFileCatalogRepository::new("/definitely/not/here/plu.csv");
    let metrics = MetricsTracker::new();

    let load = load_or_empty(&repo, &metrics).await;
    assert!(load.catalog.is_empty());
    let error = load.error.unwrap();
    assert!(error.starts_with("Error loading CSV: "));
    assert!(error.contains("/definitely/not/here/plu.csv"));
}
