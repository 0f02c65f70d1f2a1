// Training corpus loading and feedback merging

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::feedback::FeedbackRecord;
use crate::text::normalize;

#[derive(Debug, Clone, Deserialize)]
pub struct TrainingExample {
    pub user_text: String,
    pub component_label: String,
}

/// Load a labeled corpus from CSV with `user_text,component_label` columns.
/// Rows that normalize to empty text are dropped.
pub fn load_corpus(path: &Path) -> Result<Vec<TrainingExample>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open corpus: {}", path.display()))?;
    let mut examples = Vec::new();
    for row in reader.deserialize() {
        let example: TrainingExample = row.context("Failed to parse corpus row")?;
        if normalize(&example.user_text).is_empty() || example.component_label.trim().is_empty() {
            continue;
        }
        examples.push(example);
    }
    Ok(examples)
}

/// Merge feedback records into the corpus.
///
/// A record contributes its correction when present; otherwise the original
/// prediction counts as weakly confirmed. Identical (normalized text, label)
/// pairs are deduplicated, keeping the first occurrence.
pub fn merge_feedback(
    corpus: Vec<TrainingExample>,
    records: &[FeedbackRecord],
) -> Vec<TrainingExample> {
    let mut merged = corpus;
    for record in records {
        merged.push(TrainingExample {
            user_text: record.user_text.clone(),
            component_label: record.training_label().to_string(),
        });
    }

    let mut seen: HashSet<(String, String)> = HashSet::new();
    merged.retain(|example| {
        seen.insert((
            normalize(&example.user_text),
            example.component_label.clone(),
        ))
    });
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(text: &str, label: &str) -> TrainingExample {
        TrainingExample {
            user_text: text.to_string(),
            component_label: label.to_string(),
        }
    }

    #[test]
    fn test_merge_uses_correction_over_prediction() {
        let corpus = vec![example("pc freezes", "RAM Upgrade")];
        let records = vec![FeedbackRecord::new(
            "boots slowly",
            "RAM Upgrade",
            0.4,
            Some("SSD Upgrade"),
            "hierarchical_ml",
        )];
        let merged = merge_feedback(corpus, &records);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].component_label, "SSD Upgrade");
    }

    #[test]
    fn test_merge_keeps_uncorrected_prediction_as_weak_confirmation() {
        let records = vec![FeedbackRecord::new(
            "boots slowly",
            "SSD Upgrade",
            0.4,
            None,
            "flat_ml",
        )];
        let merged = merge_feedback(vec![], &records);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].component_label, "SSD Upgrade");
    }

    #[test]
    fn test_merge_dedupes_identical_text_label_pairs() {
        let corpus = vec![
            example("pc freezes", "RAM Upgrade"),
            example("PC  Freezes", "RAM Upgrade"),
        ];
        let records = vec![FeedbackRecord::new(
            "pc freezes",
            "RAM Upgrade",
            0.4,
            None,
            "rule",
        )];
        let merged = merge_feedback(corpus, &records);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_same_text_different_labels_both_kept() {
        let corpus = vec![example("pc freezes", "RAM Upgrade")];
        let records = vec![FeedbackRecord::new(
            "pc freezes",
            "RAM Upgrade",
            0.4,
            Some("SSD Upgrade"),
            "hierarchical_ml",
        )];
        let merged = merge_feedback(corpus, &records);
        assert_eq!(merged.len(), 2);
    }
}
