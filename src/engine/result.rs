// Classification result types shared by the engine and the HTTP surface

use serde::{Deserialize, Serialize};

/// Where a recommendation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Rule,
    HierarchicalMl,
    FlatMl,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Rule => "rule",
            Source::HierarchicalMl => "hierarchical_ml",
            Source::FlatMl => "flat_ml",
        }
    }
}

/// High/Medium/Low bucketing of a confidence score. Response metadata only;
/// never used for control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.7 {
            ConfidenceTier::High
        } else if confidence >= 0.4 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub label: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub components: Vec<Alternative>,
}

/// Final per-request recommendation. Produced fresh per request; never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub component: String,
    pub confidence: f64,
    pub source: Source,
    pub tier: ConfidenceTier,
    /// Ordered, deduplicated; the primary is always first.
    pub alternatives: Vec<Alternative>,
    pub grouped_by_category: Vec<CategoryGroup>,
    pub ask_feedback: bool,
    pub definition: String,
    pub why_useful: String,
    pub extra_explanation: String,
    pub fixing_tips: Vec<String>,
}

/// Output of the rule layer or a classifier stage, before composition.
#[derive(Debug, Clone)]
pub(crate) struct RawClassification {
    pub component: String,
    pub confidence: f64,
    pub source: Source,
    /// Primary first, then descending confidence.
    pub alternatives: Vec<Alternative>,
    /// Rule rationale, when the rule layer produced this.
    pub rationale: Option<String>,
}
