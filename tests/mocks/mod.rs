//! Test doubles for catalog sources.

pub mod mock_catalog_repository;

pub use mock_catalog_repository::MockCatalogRepository;
