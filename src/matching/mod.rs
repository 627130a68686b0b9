//! Fuzzy matching for produce lookup.
//!
//! This module provides the edit-distance primitive, the query and description
//! tokenizers, and the ranking matcher built on top of them.

pub mod levenshtein;
pub mod produce_matcher;
pub mod tokenizer;

pub use levenshtein::levenshtein_distance;
pub use produce_matcher::{keyword_threshold, ProduceMatcher, DEFAULT_MAX_RESULTS};
pub use tokenizer::{tokenize_description, tokenize_query};
