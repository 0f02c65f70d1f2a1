// Feedback capture for active learning
//
// Low-confidence predictions solicit corrections; every submission lands in
// an append-only log the retraining job reads back. The store trait keeps
// retraining independent of the durable medium.

mod log;

pub use log::CsvFeedbackLog;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user_text: String,
    pub predicted_label: String,
    pub confidence: f64,
    pub user_correct_label: Option<String>,
    pub source: String,
    /// True when the user supplied a correction that differs from the
    /// prediction.
    pub needs_review: bool,
}

impl FeedbackRecord {
    pub fn new(
        user_text: &str,
        predicted_label: &str,
        confidence: f64,
        user_correct_label: Option<&str>,
        source: &str,
    ) -> Self {
        let needs_review = user_correct_label
            .map(|correct| correct != predicted_label)
            .unwrap_or(false);
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            user_text: user_text.to_string(),
            predicted_label: predicted_label.to_string(),
            confidence,
            user_correct_label: user_correct_label.map(|c| c.to_string()),
            source: source.to_string(),
            needs_review,
        }
    }

    /// Label this record contributes to retraining: the correction when
    /// present, otherwise the (weakly confirmed) prediction.
    pub fn training_label(&self) -> &str {
        self.user_correct_label
            .as_deref()
            .unwrap_or(&self.predicted_label)
    }
}

/// Append-only feedback store.
///
/// Appends must be serialized by the implementation; readers see a
/// consistent prefix of fully-written records.
pub trait FeedbackStore: Send + Sync {
    /// Append one record and return the updated record count.
    fn append(&self, record: &FeedbackRecord) -> Result<usize>;

    fn read_all(&self) -> Result<Vec<FeedbackRecord>>;

    fn count(&self) -> Result<usize> {
        Ok(self.read_all()?.len())
    }

    fn pending_review_count(&self) -> Result<usize> {
        Ok(self
            .read_all()?
            .iter()
            .filter(|record| record.needs_review)
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_review_only_when_correction_differs() {
        let confirmed = FeedbackRecord::new("pc slow", "RAM Upgrade", 0.45, None, "hierarchical_ml");
        assert!(!confirmed.needs_review);
        assert_eq!(confirmed.training_label(), "RAM Upgrade");

        let agreeing = FeedbackRecord::new(
            "pc slow",
            "RAM Upgrade",
            0.45,
            Some("RAM Upgrade"),
            "hierarchical_ml",
        );
        assert!(!agreeing.needs_review);

        let corrected = FeedbackRecord::new(
            "pc slow",
            "RAM Upgrade",
            0.45,
            Some("SSD Upgrade"),
            "hierarchical_ml",
        );
        assert!(corrected.needs_review);
        assert_eq!(corrected.training_label(), "SSD Upgrade");
    }
}
