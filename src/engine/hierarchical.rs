// Two-stage inference: category argmax, then the component distribution
// filtered to that category and renormalized
//
// Renormalization is what keeps displayed confidences readable as
// "confidence within the chosen category" instead of being diluted by
// probability mass parked on irrelevant categories.

use crate::knowledge::KnowledgeBase;
use crate::model::ModelArtifact;

use super::result::{Alternative, RawClassification, Source};

/// How many alternatives a classifier result carries before composition.
const TOP_K: usize = 5;

pub(crate) fn classify(
    artifact: &ModelArtifact,
    knowledge: &KnowledgeBase,
    normalized: &str,
) -> RawClassification {
    let features = artifact.vectorizer.transform(normalized);

    match &artifact.category_stage {
        Some(category_stage) => {
            let category_probs = category_stage.predict_proba(&features);
            let category_index = crate::model::argmax_index(&category_probs);
            let category = &category_stage.classes()[category_index];

            let (labels, probs) =
                filtered_component_distribution(artifact, knowledge, &features, category);
            build_result(labels, probs, Source::HierarchicalMl)
        }
        None => {
            let probs = artifact.component_stage.predict_proba(&features);
            let labels: Vec<&str> = artifact
                .component_stage
                .classes()
                .iter()
                .map(|c| c.as_str())
                .collect();
            build_result(labels, probs, Source::FlatMl)
        }
    }
}

/// Component distribution restricted to `category` and renormalized to sum
/// to 1. Falls back to the unfiltered distribution if the category maps to
/// no trained component.
pub(crate) fn filtered_component_distribution<'a>(
    artifact: &'a ModelArtifact,
    knowledge: &KnowledgeBase,
    features: &[(usize, f32)],
    category: &str,
) -> (Vec<&'a str>, Vec<f64>) {
    let all_probs = artifact.component_stage.predict_proba(features);
    let classes = artifact.component_stage.classes();

    let mut labels = Vec::new();
    let mut probs = Vec::new();
    for (index, class) in classes.iter().enumerate() {
        if knowledge.category_for(class) == category {
            labels.push(class.as_str());
            probs.push(all_probs[index]);
        }
    }

    if labels.is_empty() {
        labels = classes.iter().map(|c| c.as_str()).collect();
        probs = all_probs;
    }

    renormalize(&mut probs);
    (labels, probs)
}

/// Rescale so the distribution sums to 1; degenerate all-zero input becomes
/// uniform.
fn renormalize(probs: &mut [f64]) {
    let total: f64 = probs.iter().sum();
    if total > 0.0 {
        for p in probs.iter_mut() {
            *p /= total;
        }
    } else if !probs.is_empty() {
        let uniform = 1.0 / probs.len() as f64;
        for p in probs.iter_mut() {
            *p = uniform;
        }
    }
}

fn build_result(labels: Vec<&str>, probs: Vec<f64>, source: Source) -> RawClassification {
    let primary_index = crate::model::argmax_index(&probs);
    let primary = labels[primary_index].to_string();
    let confidence = probs[primary_index];

    // Top-K of the distribution, primary first, stable order on ties.
    let mut order: Vec<usize> = (0..labels.len()).collect();
    order.sort_by(|&a, &b| probs[b].partial_cmp(&probs[a]).unwrap_or(std::cmp::Ordering::Equal));

    let mut alternatives = vec![Alternative {
        label: primary.clone(),
        confidence,
    }];
    for index in order {
        if index == primary_index {
            continue;
        }
        if alternatives.len() >= TOP_K {
            break;
        }
        alternatives.push(Alternative {
            label: labels[index].to_string(),
            confidence: probs[index],
        });
    }

    RawClassification {
        component: primary,
        confidence,
        source,
        alternatives,
        rationale: None,
    }
}
