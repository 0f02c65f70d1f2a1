// Offline training and feedback-driven retraining

mod corpus;
mod trainer;

pub use corpus::{load_corpus, merge_feedback, TrainingExample};
pub use trainer::{fit_artifact, TrainOptions};

use anyhow::{Context, Result};
use std::path::Path;

use crate::feedback::FeedbackStore;
use crate::knowledge::KnowledgeBase;
use crate::model::{ArtifactStore, ModelArtifact};

/// Fit a fresh artifact from a corpus file and activate it.
pub fn train_from_corpus(
    store: &ArtifactStore,
    knowledge: &KnowledgeBase,
    corpus_path: &Path,
    options: &TrainOptions,
) -> Result<ModelArtifact> {
    let examples = load_corpus(corpus_path)?;
    let artifact = fit_artifact(knowledge, &examples, store.next_version()?, options)?;
    store.save(&artifact)?;
    store.activate(artifact.version)?;
    tracing::info!(
        version = artifact.version,
        examples = artifact.trained_examples,
        "trained and activated artifact"
    );
    Ok(artifact)
}

/// Merge the feedback log into the corpus and fit the next artifact version.
///
/// The previous version stays on disk for rollback; activation is the last
/// step, so a failed fit leaves the active pointer untouched.
pub fn retrain_with_feedback(
    store: &ArtifactStore,
    knowledge: &KnowledgeBase,
    corpus_path: &Path,
    feedback: &dyn FeedbackStore,
    options: &TrainOptions,
) -> Result<ModelArtifact> {
    let examples = load_corpus(corpus_path)?;
    let records = feedback
        .read_all()
        .context("Failed to read feedback log for retraining")?;
    tracing::info!(
        corpus = examples.len(),
        feedback = records.len(),
        "merging feedback into training corpus"
    );

    let merged = merge_feedback(examples, &records);
    let artifact = fit_artifact(knowledge, &merged, store.next_version()?, options)?;
    store.save(&artifact)?;
    store.activate(artifact.version)?;
    tracing::info!(
        version = artifact.version,
        examples = artifact.trained_examples,
        "retrained and activated artifact"
    );
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{CsvFeedbackLog, FeedbackRecord};
    use std::io::Write;

    fn write_corpus(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("corpus.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "user_text,component_label").unwrap();
        for (text, label) in [
            ("computer freezes with many programs open", "RAM Upgrade"),
            ("machine freezes when many apps open", "RAM Upgrade"),
            ("boots take several minutes from the old disk", "SSD Upgrade"),
            ("boot takes minutes and folders open slowly", "SSD Upgrade"),
            ("machine dies and restarts by itself", "PSU Upgrade"),
            ("machine dies suddenly under load", "PSU Upgrade"),
            ("wireless keeps dropping every hour", "WiFi Adapter Upgrade"),
            ("wireless drops out in the evening", "WiFi Adapter Upgrade"),
        ] {
            writeln!(file, "{},{}", text, label).unwrap();
        }
        path
    }

    #[test]
    fn test_train_then_retrain_bumps_version_and_keeps_previous() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("models")).unwrap();
        let corpus = write_corpus(&dir);
        let knowledge = KnowledgeBase::builtin();
        let options = TrainOptions::for_tests();

        let first = train_from_corpus(&store, knowledge, &corpus, &options).unwrap();
        assert_eq!(first.version, 1);
        assert_eq!(store.active_version().unwrap(), Some(1));

        let log = CsvFeedbackLog::new(dir.path().join("feedback.csv")).unwrap();
        use crate::feedback::FeedbackStore as _;
        log.append(&FeedbackRecord::new(
            "folders open slowly all day",
            "RAM Upgrade",
            0.4,
            Some("SSD Upgrade"),
            "hierarchical_ml",
        ))
        .unwrap();

        let second = retrain_with_feedback(&store, knowledge, &corpus, &log, &options).unwrap();
        assert_eq!(second.version, 2);
        assert_eq!(store.active_version().unwrap(), Some(2));
        // Rollback target still present.
        assert!(store.load(1).is_ok());
        assert!(second.trained_examples > first.trained_examples);
    }
}
