//! Query and description tokenization.
//!
//! Both tokenizers lowercase their input and never yield empty tokens.
//! Queries split on whitespace; descriptions split on any run of non-word
//! characters, so punctuation and hyphens separate words too.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Split a free-text query into lowercase keywords.
pub fn tokenize_query(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Split a catalog description into lowercase words.
///
/// A word is a run of letters, digits or underscores.
pub fn tokenize_description(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD_RE
        .split(&lowered)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_query() {
        assert_eq!(tokenize_query("  Red   Apple "), vec!["red", "apple"]);
        assert_eq!(tokenize_query("Yukon\tGold\npotato"), vec!["yukon", "gold", "potato"]);
    }

    #[test]
    fn test_tokenize_query_keeps_punctuation() {
        // Only whitespace separates query keywords
        assert_eq!(tokenize_query("fuji-red"), vec!["fuji-red"]);
    }

    #[test]
    fn test_tokenize_description() {
        assert_eq!(
            tokenize_description("Apples, Fuji-Red!"),
            vec!["apples", "fuji", "red"]
        );
        assert_eq!(
            tokenize_description("Tomato On The Vine"),
            vec!["tomato", "on", "the", "vine"]
        );
    }

    #[test]
    fn test_tokenize_description_digits_and_underscores() {
        assert_eq!(
            tokenize_description("Grapes 2lb bag_large"),
            vec!["grapes", "2lb", "bag_large"]
        );
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(tokenize_query("").is_empty());
        assert!(tokenize_query("   \t ").is_empty());
        assert!(tokenize_description("").is_empty());
        assert!(tokenize_description("  -- !! ").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_are_word_characters() {
        assert_eq!(tokenize_description("Jalapeño Pepper"), vec!["jalapeño", "pepper"]);
    }
}
