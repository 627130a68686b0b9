//! Shared produce fixtures for integration tests.

use plu_search::models::ProduceItem;

/// A small catalog covering typos, multi-word names and score ties.
#[allow(dead_code)]
pub fn sample_items() -> Vec<ProduceItem> {
    vec![
        ProduceItem::new("4011", "Banana"),
        ProduceItem::new("4015", "Yellow Onion"),
        ProduceItem::new("4082", "Red Onion"),
        ProduceItem::new("4663", "White Onion"),
        ProduceItem::new("4131", "Apple Fuji"),
        ProduceItem::new("4135", "Apple Gala"),
        ProduceItem::new("4017", "Apple Granny Smith"),
        ProduceItem::new("3283", "Apple Honeycrisp"),
        ProduceItem::new("4016", "Apple Red Delicious"),
        ProduceItem::new("4020", "Apple Golden Delicious"),
        ProduceItem::new("4688", "Red Bell Pepper"),
        ProduceItem::new("4036", "Cantaloupe"),
    ]
}

/// Codes of the given items, in order.
#[allow(dead_code)]
pub fn codes(items: &[ProduceItem]) -> Vec<&str> {
    items.iter().map(|item| item.code.as_str()).collect()
}
