//! Produce item model representing one row of the PLU catalog.

use serde::{Deserialize, Serialize};

/// A produce entry identified by its PLU (Price Look-Up) code.
///
/// Items are compared by value; duplicate codes or descriptions are allowed
/// and an item's identity within a catalog is its position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProduceItem {
    /// PLU code, e.g. "4011"
    pub code: String,

    /// Human-readable name, e.g. "Banana"
    pub description: String,
}

impl ProduceItem {
    /// Create a new produce item.
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// Format the item the way result lists show it: `Banana (PLU: 4011)`.
    pub fn display_line(&self) -> String {
        format!("{} (PLU: {})", self.description, self.code)
    }
}
