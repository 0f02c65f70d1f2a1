// Fitting both classifier stages into a versioned artifact

use anyhow::{bail, Result};
use chrono::Utc;

use crate::knowledge::KnowledgeBase;
use crate::model::{ModelArtifact, SoftmaxClassifier, TrainParams};
use crate::text::{normalize, TfIdfVectorizer, VectorizerConfig};

use super::TrainingExample;

#[derive(Debug, Clone, Default)]
pub struct TrainOptions {
    pub vectorizer: VectorizerConfig,
    pub params: TrainParams,
}

impl TrainOptions {
    /// Options suited to the tiny corpora used in tests: no document
    /// frequency pruning.
    pub fn for_tests() -> Self {
        Self {
            vectorizer: VectorizerConfig {
                min_df: 1,
                ..VectorizerConfig::default()
            },
            params: TrainParams::default(),
        }
    }
}

/// Fit the vectorizer and both stages on a labeled corpus.
///
/// Examples whose label is not in the knowledge base are dropped with a
/// warning. The category stage is only fitted when the corpus spans more
/// than one category; otherwise the artifact is flat.
pub fn fit_artifact(
    knowledge: &KnowledgeBase,
    examples: &[TrainingExample],
    version: u32,
    options: &TrainOptions,
) -> Result<ModelArtifact> {
    let mut texts: Vec<String> = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    let mut dropped = 0usize;
    for example in examples {
        if knowledge.get(&example.component_label).is_none() {
            dropped += 1;
            continue;
        }
        texts.push(normalize(&example.user_text));
        labels.push(example.component_label.clone());
    }
    if dropped > 0 {
        tracing::warn!(dropped, "dropped examples with uncataloged labels");
    }
    if texts.is_empty() {
        bail!("training corpus is empty after filtering");
    }

    let vectorizer = TfIdfVectorizer::fit(options.vectorizer.clone(), &texts);
    if vectorizer.dimension() == 0 {
        bail!("vectorizer vocabulary is empty; lower min_df or grow the corpus");
    }
    let features: Vec<Vec<(usize, f32)>> = texts.iter().map(|t| vectorizer.transform(t)).collect();

    let component_stage = fit_stage(&labels, &features, vectorizer.dimension(), &options.params);

    let categories: Vec<String> = labels
        .iter()
        .map(|label| knowledge.category_for(label).to_string())
        .collect();
    let distinct: std::collections::BTreeSet<&String> = categories.iter().collect();
    let category_stage = if distinct.len() > 1 {
        Some(fit_stage(
            &categories,
            &features,
            vectorizer.dimension(),
            &options.params,
        ))
    } else {
        tracing::warn!("corpus spans a single category; producing a flat artifact");
        None
    };

    Ok(ModelArtifact {
        version,
        created_at: Utc::now(),
        trained_examples: texts.len(),
        vectorizer,
        category_stage,
        component_stage,
    })
}

/// Fit one stage over sorted-deduplicated class labels, so class ordering is
/// deterministic for a given corpus.
fn fit_stage(
    labels: &[String],
    features: &[Vec<(usize, f32)>],
    n_features: usize,
    params: &TrainParams,
) -> SoftmaxClassifier {
    let mut classes: Vec<String> = labels.to_vec();
    classes.sort();
    classes.dedup();

    let samples: Vec<(Vec<(usize, f32)>, usize)> = features
        .iter()
        .zip(labels.iter())
        .map(|(feature, label)| {
            let target = classes
                .binary_search(label)
                .expect("label came from the class list");
            (feature.clone(), target)
        })
        .collect();

    SoftmaxClassifier::fit(classes, &samples, n_features, params)
}
