//! The produce catalog.
//!
//! A [`Catalog`] is built once at startup and only read afterwards. It is
//! backed by an `Arc<[ProduceItem]>`, so clones are cheap and concurrent
//! lookups need no locking.

pub mod parser;

pub use parser::{parse_catalog, parse_line};

use crate::models::ProduceItem;
use std::sync::Arc;

/// Catalog CSV compiled into the binary.
pub const BUNDLED_CATALOG_CSV: &str = include_str!("../../data/produce_plu.csv");

/// Immutable, shareable list of produce items in catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<[ProduceItem]>,
}

impl Catalog {
    /// Create a catalog from items, preserving their order.
    pub fn new(items: Vec<ProduceItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// A catalog with no items.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parse a catalog from comma-delimited text with a header row.
    pub fn from_csv(text: &str) -> Self {
        Self::new(parse_catalog(text))
    }

    /// The catalog bundled with the binary.
    pub fn bundled() -> Self {
        Self::from_csv(BUNDLED_CATALOG_CSV)
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[ProduceItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}
