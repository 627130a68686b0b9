//! Typo-tolerant produce lookup.
//!
//! This module ranks catalog items against a free-text query:
//! - Every query keyword must be within a small edit distance of some description word
//! - Short keywords (up to 4 characters) tolerate one edit, longer ones two
//! - Items are ranked by the sum of per-keyword best distances (lower is better)
//! - Ties keep catalog order

use super::levenshtein::levenshtein_distance;
use super::tokenizer::{tokenize_description, tokenize_query};
use crate::models::ProduceItem;

/// Number of results returned when the caller does not ask for a specific limit.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Keywords up to this many characters tolerate a single edit.
const SHORT_KEYWORD_MAX_LEN: usize = 4;

/// A qualifying item paired with its total edit distance. Never leaves this module.
struct ScoredMatch<'a> {
    item: &'a ProduceItem,
    score: usize,
}

/// Maximum edit distance at which `keyword` still counts as matching a word.
pub fn keyword_threshold(keyword: &str) -> usize {
    if keyword.chars().count() <= SHORT_KEYWORD_MAX_LEN {
        1
    } else {
        2
    }
}

/// Produce matcher. Stateless: lookups only read the items they are given.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProduceMatcher;

impl ProduceMatcher {
    /// Create a new ProduceMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find the best matching items for a query.
    ///
    /// # Arguments
    /// * `query` - Free text, typed or transcribed
    /// * `items` - Catalog to search
    /// * `limit` - Maximum number of items to return
    ///
    /// # Returns
    /// At most `limit` items sorted by ascending total distance. An empty or
    /// whitespace-only query, an empty catalog, or no qualifying item all give
    /// an empty vector.
    pub fn lookup(&self, query: &str, items: &[ProduceItem], limit: usize) -> Vec<ProduceItem> {
        let keywords = tokenize_query(query);
        if keywords.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<ScoredMatch<'_>> = items
            .iter()
            .filter_map(|item| {
                self.score_item(&keywords, item)
                    .map(|score| ScoredMatch { item, score })
            })
            .collect();

        // Stable: equal scores keep catalog order
        matches.sort_by_key(|m| m.score);

        matches
            .into_iter()
            .take(limit)
            .map(|m| m.item.clone())
            .collect()
    }

    /// Same as [`lookup`](Self::lookup) with [`DEFAULT_MAX_RESULTS`].
    pub fn lookup_default(&self, query: &str, items: &[ProduceItem]) -> Vec<ProduceItem> {
        self.lookup(query, items, DEFAULT_MAX_RESULTS)
    }

    /// Total distance for an item, or `None` if any keyword goes unmatched.
    fn score_item(&self, keywords: &[String], item: &ProduceItem) -> Option<usize> {
        let words = tokenize_description(&item.description);

        keywords.iter().try_fold(0usize, |total, keyword| {
            let best = words
                .iter()
                .map(|word| levenshtein_distance(keyword, word))
                .min()?;

            if best <= keyword_threshold(keyword) {
                Some(total + best)
            } else {
                None
            }
        })
    }
}
