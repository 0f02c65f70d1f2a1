// Hybrid classification engine
//
// Request flow: rule layer (short-circuits on first match) → hierarchical
// classifier → flat fallback. The fitted artifact sits behind a lock holding
// an Arc; a request clones the Arc once and keeps that snapshot for its
// whole lifetime, so retraining can activate a new version underneath
// without touching in-flight work.

mod compose;
mod hierarchical;
mod result;

pub use compose::FEEDBACK_THRESHOLD;
pub use result::{Alternative, CategoryGroup, ConfidenceTier, Recommendation, Source};

use std::sync::{Arc, RwLock};

use crate::errors::EngineError;
use crate::feedback::{FeedbackRecord, FeedbackStore};
use crate::knowledge::KnowledgeBase;
use crate::model::ModelArtifact;
use crate::rules::RuleSet;
use crate::text::normalize;

use result::RawClassification;

/// Confidence assigned to a rule's related components, as a fraction of the
/// rule's own confidence.
const RULE_RELATED_FACTOR: f64 = 0.8;

/// Rule-seeded alternatives beyond the primary.
const RULE_RELATED_LIMIT: usize = 4;

pub struct Engine {
    rules: RuleSet,
    knowledge: Arc<KnowledgeBase>,
    artifact: RwLock<Option<Arc<ModelArtifact>>>,
    feedback: Option<Arc<dyn FeedbackStore>>,
}

impl Engine {
    pub fn new(rules: RuleSet, knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            rules,
            knowledge,
            artifact: RwLock::new(None),
            feedback: None,
        }
    }

    /// Attach a feedback store so low-confidence classifications are logged
    /// for active learning.
    pub fn with_feedback(mut self, store: Arc<dyn FeedbackStore>) -> Self {
        self.feedback = Some(store);
        self
    }

    /// Swap in a new artifact. Readers holding the previous Arc keep using
    /// it; new requests see the new version.
    pub fn install_artifact(&self, artifact: Arc<ModelArtifact>) {
        let mut slot = self
            .artifact
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        tracing::info!(version = artifact.version, "activating model artifact");
        *slot = Some(artifact);
    }

    pub fn active_artifact(&self) -> Option<Arc<ModelArtifact>> {
        self.artifact
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Classify free-form problem text into a component recommendation.
    pub fn recommend(&self, text: &str) -> Result<Recommendation, EngineError> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Err(EngineError::InvalidInput);
        }

        let raw = match self.rules.matches(&normalized) {
            Some(rule) => {
                tracing::debug!(
                    component = %rule.component,
                    confidence = rule.confidence,
                    "rule matched"
                );
                rule_classification(rule)
            }
            None => {
                let artifact = self
                    .active_artifact()
                    .ok_or(EngineError::ModelUnavailable)?;
                hierarchical::classify(&artifact, &self.knowledge, &normalized)
            }
        };

        let recommendation = compose::compose(raw, &self.knowledge);
        tracing::info!(
            component = %recommendation.component,
            confidence = recommendation.confidence,
            source = recommendation.source.as_str(),
            ask_feedback = recommendation.ask_feedback,
            "classified"
        );

        if recommendation.ask_feedback {
            self.record_pending_feedback(text, &recommendation);
        }

        Ok(recommendation)
    }

    /// Log a low-confidence prediction as an uncorrected feedback record.
    /// Failures are observed, never propagated to the classification path.
    fn record_pending_feedback(&self, text: &str, recommendation: &Recommendation) {
        let Some(store) = &self.feedback else {
            return;
        };
        let record = FeedbackRecord::new(
            text,
            &recommendation.component,
            recommendation.confidence,
            None,
            recommendation.source.as_str(),
        );
        if let Err(error) = store.append(&record) {
            tracing::warn!(error = %error, "failed to record low-confidence feedback");
        }
    }
}

fn rule_classification(rule: &crate::rules::Rule) -> RawClassification {
    let mut alternatives = vec![Alternative {
        label: rule.component.clone(),
        confidence: rule.confidence,
    }];
    for related in rule.related.iter().take(RULE_RELATED_LIMIT) {
        alternatives.push(Alternative {
            label: related.clone(),
            confidence: rule.confidence * RULE_RELATED_FACTOR,
        });
    }
    RawClassification {
        component: rule.component.clone(),
        confidence: rule.confidence,
        source: Source::Rule,
        alternatives,
        rationale: Some(rule.rationale.clone()),
    }
}
