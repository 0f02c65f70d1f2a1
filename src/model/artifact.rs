// Versioned model artifact
//
// An artifact is an immutable snapshot of everything inference needs: the
// fitted vectorizer, the optional category stage, and the component stage.
// Requests hold an Arc to one artifact for their whole lifetime; activation
// of a newer version never mutates an artifact in use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SoftmaxClassifier;
use crate::text::TfIdfVectorizer;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub trained_examples: usize,
    pub vectorizer: TfIdfVectorizer,
    /// Category stage. Absent on flat artifacts; inference then skips the
    /// category filter and serves `flat_ml`.
    pub category_stage: Option<SoftmaxClassifier>,
    /// Component stage over the full label space.
    pub component_stage: SoftmaxClassifier,
}

impl ModelArtifact {
    pub fn is_hierarchical(&self) -> bool {
        self.category_stage.is_some()
    }
}
