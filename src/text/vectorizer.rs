// TF-IDF vectorizer: stemmed word n-grams plus character n-grams
//
// The character n-grams are what keep short, misspelled inputs ("pc vey
// slow") near their well-spelled neighbours. The fitted vocabulary and IDF
// vector serialize inside the model artifact so serving and training always
// share one extractor.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::tokenize_and_stem;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Word n-gram upper bound (lower bound is always 1).
    pub word_ngram_max: usize,
    pub char_ngram_min: usize,
    pub char_ngram_max: usize,
    /// Terms seen in fewer documents than this are pruned at fit time.
    pub min_df: usize,
    /// Use 1 + ln(tf) instead of raw term frequency.
    pub sublinear_tf: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            word_ngram_max: 2,
            char_ngram_min: 3,
            char_ngram_max: 5,
            min_df: 2,
            sublinear_tf: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    config: VectorizerConfig,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfIdfVectorizer {
    /// Fit vocabulary and IDF weights on normalized documents.
    ///
    /// Vocabulary indices are assigned in sorted term order, so fitting the
    /// same corpus twice yields byte-identical vectorizers.
    pub fn fit(config: VectorizerConfig, documents: &[String]) -> Self {
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let mut seen: Vec<String> = extract_terms(doc, &config);
            seen.sort();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<(String, usize)> = doc_freq
            .into_iter()
            .filter(|(_, df)| *df >= config.min_df)
            .collect();
        terms.sort_by(|a, b| a.0.cmp(&b.0));

        let n_docs = documents.len() as f32;
        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (index, (term, df)) in terms.into_iter().enumerate() {
            vocabulary.insert(term, index);
            idf.push(((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0);
        }

        Self {
            config,
            vocabulary,
            idf,
        }
    }

    /// Transform normalized text into a sparse, L2-normalized feature vector
    /// of (column, weight) pairs sorted by column.
    pub fn transform(&self, text: &str) -> Vec<(usize, f32)> {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for term in extract_terms(text, &self.config) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(index, tf)| {
                let tf = if self.config.sublinear_tf {
                    1.0 + tf.ln()
                } else {
                    tf
                };
                (index, tf * self.idf[index])
            })
            .collect();
        vector.sort_by_key(|(index, _)| *index);

        let norm: f32 = vector.iter().map(|(_, v)| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for (_, v) in &mut vector {
                *v /= norm;
            }
        }

        vector
    }

    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Extract the union of word n-gram and character n-gram terms.
///
/// Word and character terms live in disjoint prefixed namespaces so "ram"
/// the word never collides with "ram" the trigram.
fn extract_terms(text: &str, config: &VectorizerConfig) -> Vec<String> {
    let mut terms = Vec::new();

    let words = tokenize_and_stem(text);
    for n in 1..=config.word_ngram_max {
        if words.len() < n {
            break;
        }
        for window in words.windows(n) {
            terms.push(format!("w:{}", window.join(" ")));
        }
    }

    let chars: Vec<char> = text.chars().collect();
    for n in config.char_ngram_min..=config.char_ngram_max {
        if chars.len() < n {
            break;
        }
        for window in chars.windows(n) {
            terms.push(format!("c:{}", window.iter().collect::<String>()));
        }
    }

    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn test_config() -> VectorizerConfig {
        VectorizerConfig {
            min_df: 1,
            ..VectorizerConfig::default()
        }
    }

    #[test]
    fn test_transform_is_unit_norm() {
        let vectorizer = TfIdfVectorizer::fit(
            test_config(),
            &docs(&["pc is slow", "no power at all", "wifi drops out"]),
        );
        let vector = vectorizer.transform("pc is slow");
        let norm: f32 = vector.iter().map(|(_, v)| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {}", norm);
    }

    #[test]
    fn test_unknown_terms_yield_empty_vector() {
        let vectorizer = TfIdfVectorizer::fit(test_config(), &docs(&["pc is slow"]));
        assert!(vectorizer.transform("zzz qqq").is_empty());
    }

    #[test]
    fn test_min_df_prunes_rare_terms() {
        let corpus = docs(&["slow machine", "slow startup", "dead battery"]);
        let pruned = TfIdfVectorizer::fit(
            VectorizerConfig {
                min_df: 2,
                ..VectorizerConfig::default()
            },
            &corpus,
        );
        let kept = TfIdfVectorizer::fit(test_config(), &corpus);
        assert!(pruned.dimension() < kept.dimension());
    }

    #[test]
    fn test_fit_is_deterministic() {
        let corpus = docs(&["pc slow", "no display", "wifi disconnects", "pc slow boot"]);
        let a = TfIdfVectorizer::fit(test_config(), &corpus);
        let b = TfIdfVectorizer::fit(test_config(), &corpus);
        assert_eq!(a.transform("pc slow and no display"), b.transform("pc slow and no display"));
    }

    #[test]
    fn test_char_ngrams_tolerate_misspelling() {
        let vectorizer = TfIdfVectorizer::fit(
            test_config(),
            &docs(&["pc very slow", "no power", "screen flickers"]),
        );
        // "vey" shares character trigrams with the fitted corpus even though
        // the word token is unknown.
        let vector = vectorizer.transform("pc vey slow");
        assert!(!vector.is_empty());
    }
}
