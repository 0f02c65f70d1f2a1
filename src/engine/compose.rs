// Composition: related-component augmentation, tiering, the feedback
// decision, category grouping, and knowledge-base enrichment

use crate::knowledge::KnowledgeBase;

use super::result::{
    Alternative, CategoryGroup, ConfidenceTier, RawClassification, Recommendation,
};

/// Feedback is solicited strictly below this confidence. Independent of the
/// tier boundaries.
pub const FEEDBACK_THRESHOLD: f64 = 0.5;

/// Confidence assigned to knowledge-base related components, as a fraction
/// of the primary's. Tunable, not an invariant.
const RELATED_CONFIDENCE_FACTOR: f64 = 0.7;

const MAX_ALTERNATIVES: usize = 5;

pub(crate) fn compose(raw: RawClassification, knowledge: &KnowledgeBase) -> Recommendation {
    let RawClassification {
        component,
        confidence,
        source,
        alternatives,
        rationale,
    } = raw;

    let alternatives = augment_alternatives(&component, confidence, alternatives, knowledge);

    let tier = ConfidenceTier::from_confidence(confidence);
    let ask_feedback = confidence < FEEDBACK_THRESHOLD;

    let grouped_by_category = group_by_category(&alternatives, knowledge);

    let entry = knowledge.get(&component);
    if entry.is_none() {
        // A primary outside the catalog is a configuration defect, not a
        // request error; serve the classification with empty copy.
        tracing::warn!(component = %component, "primary component missing from knowledge base");
    }
    let definition = entry.map(|e| e.definition.clone()).unwrap_or_default();
    let why_useful = entry.map(|e| e.why_useful.clone()).unwrap_or_default();
    let fixing_tips = entry.map(|e| e.fixing_tips.clone()).unwrap_or_default();

    let extra_explanation = rationale.unwrap_or_else(|| explanation_for(&component, tier));

    Recommendation {
        component,
        confidence,
        source,
        tier,
        alternatives,
        grouped_by_category,
        ask_feedback,
        definition,
        why_useful,
        extra_explanation,
        fixing_tips,
    }
}

/// Merge the primary's knowledge-base related components into the
/// alternatives. New entries get a fraction of the primary's confidence;
/// entries already present keep the maximum confidence seen. The primary
/// stays first, everything else orders by descending confidence, and the
/// list is capped.
fn augment_alternatives(
    primary: &str,
    primary_confidence: f64,
    mut alternatives: Vec<Alternative>,
    knowledge: &KnowledgeBase,
) -> Vec<Alternative> {
    if alternatives.first().map(|a| a.label.as_str()) != Some(primary) {
        alternatives.insert(
            0,
            Alternative {
                label: primary.to_string(),
                confidence: primary_confidence,
            },
        );
    }

    if let Some(entry) = knowledge.get(primary) {
        for related in &entry.related {
            let candidate = (primary_confidence * RELATED_CONFIDENCE_FACTOR)
                .min(primary_confidence);
            match alternatives.iter_mut().find(|a| &a.label == related) {
                Some(existing) => existing.confidence = existing.confidence.max(candidate),
                None => alternatives.push(Alternative {
                    label: related.clone(),
                    confidence: candidate,
                }),
            }
        }
    }

    // Dedup by label keeping the maximum confidence, preserving first-seen
    // position before the sort.
    let mut deduped: Vec<Alternative> = Vec::with_capacity(alternatives.len());
    for alternative in alternatives {
        match deduped.iter_mut().find(|a| a.label == alternative.label) {
            Some(existing) => {
                existing.confidence = existing.confidence.max(alternative.confidence)
            }
            None => deduped.push(alternative),
        }
    }

    let primary_entry = deduped.remove(0);
    deduped.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    deduped.insert(0, primary_entry);
    deduped.truncate(MAX_ALTERNATIVES);
    deduped
}

/// Partition alternatives by category, preserving relative confidence order
/// within each group. Groups appear in order of first appearance.
fn group_by_category(
    alternatives: &[Alternative],
    knowledge: &KnowledgeBase,
) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for alternative in alternatives {
        let category = knowledge.category_for(&alternative.label);
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.components.push(alternative.clone()),
            None => groups.push(CategoryGroup {
                category: category.to_string(),
                components: vec![alternative.clone()],
            }),
        }
    }
    groups
}

fn explanation_for(component: &str, tier: ConfidenceTier) -> String {
    match tier {
        ConfidenceTier::High => format!(
            "Based on your description, {} is highly recommended.",
            component
        ),
        ConfidenceTier::Medium => format!(
            "Based on your description, {} is likely what you need, but consider the alternatives below.",
            component
        ),
        ConfidenceTier::Low => format!(
            "We suggest {} as a possibility, but confidence is low. Please review the alternatives.",
            component
        ),
    }
}
