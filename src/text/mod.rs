// Text normalization and tokenization shared by rules and the vectorizer

mod vectorizer;

pub use vectorizer::{TfIdfVectorizer, VectorizerConfig};

use rust_stemmers::{Algorithm, Stemmer};

/// Normalize free-form user text: lowercase, trim, collapse whitespace.
///
/// Every matcher and feature extractor in the crate operates on this form,
/// so "  PC   Slow " and "pc slow" are the same input.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tokenize normalized text into stemmed word tokens.
///
/// Punctuation is stripped per word; empty tokens are dropped.
pub fn tokenize_and_stem(text: &str) -> Vec<String> {
    let stemmer = Stemmer::create(Algorithm::English);
    text.split_whitespace()
        .map(|word| {
            let clean: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
            stemmer.stem(&clean).to_string()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  My   PC\t is  SLOW  "), "my pc is slow");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("   \t \n "), "");
    }

    #[test]
    fn test_tokenize_and_stem() {
        let tokens = tokenize_and_stem("running quickly!");
        assert!(tokens.contains(&"run".to_string()));
        assert!(tokens.contains(&"quick".to_string()));
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        let tokens = tokenize_and_stem("disk 100%");
        assert_eq!(tokens, vec!["disk".to_string(), "100".to_string()]);
    }
}
