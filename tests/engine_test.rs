// End-to-end scenarios for the hybrid classification engine

use std::sync::Arc;

use hwcompass::engine::{Engine, Source};
use hwcompass::errors::EngineError;
use hwcompass::feedback::{CsvFeedbackLog, FeedbackRecord, FeedbackStore};
use hwcompass::knowledge::KnowledgeBase;
use hwcompass::rules::RuleSet;
use hwcompass::training::{fit_artifact, TrainOptions, TrainingExample};

fn example(text: &str, label: &str) -> TrainingExample {
    TrainingExample {
        user_text: text.to_string(),
        component_label: label.to_string(),
    }
}

/// Corpus spanning four categories, with vocabulary overlapping the
/// rule-free scenario text ("takes long time to boot", "freezes",
/// "multiple programs").
fn training_corpus() -> Vec<TrainingExample> {
    vec![
        example("computer freezes when i open multiple programs", "RAM Upgrade"),
        example("machine freezes with many applications open", "RAM Upgrade"),
        example("everything hangs when several programs run together", "RAM Upgrade"),
        example("takes long time to boot from the old hard drive", "SSD Upgrade"),
        example("booting takes minutes and files open slowly", "SSD Upgrade"),
        example("long boot time and sluggish file copies", "SSD Upgrade"),
        example("machine dies and restarts by itself under load", "PSU Upgrade"),
        example("turns off suddenly while rendering", "PSU Upgrade"),
        example("wireless connection drops every evening", "WiFi Adapter Upgrade"),
        example("wireless keeps dropping while streaming", "WiFi Adapter Upgrade"),
    ]
}

fn trained_engine() -> Engine {
    let knowledge = Arc::new(KnowledgeBase::builtin().clone());
    let engine = Engine::new(RuleSet::builtin(), Arc::clone(&knowledge));
    let artifact = fit_artifact(
        &knowledge,
        &training_corpus(),
        1,
        &TrainOptions::for_tests(),
    )
    .unwrap();
    engine.install_artifact(Arc::new(artifact));
    engine
}

#[test]
fn test_ps_not_start_resolves_to_psu_by_rule() {
    let engine = trained_engine();
    let result = engine.recommend("my ps not start").unwrap();

    assert_eq!(result.component, "PSU Upgrade");
    assert_eq!(result.source, Source::Rule);
    assert!((result.confidence - 0.95).abs() < 1e-9);
    let labels: Vec<&str> = result.alternatives.iter().map(|a| a.label.as_str()).collect();
    assert!(labels.contains(&"Power Cable Replacement"));
}

#[test]
fn test_pc_slow_resolves_to_ram_with_ssd_alternative() {
    let engine = trained_engine();
    let result = engine.recommend("pc slow").unwrap();

    assert_eq!(result.component, "RAM Upgrade");
    assert_eq!(result.source, Source::Rule);
    let labels: Vec<&str> = result.alternatives.iter().map(|a| a.label.as_str()).collect();
    assert!(labels.contains(&"SSD Upgrade"));
}

#[test]
fn test_zoom_video_resolves_to_webcam_not_storage() {
    let engine = trained_engine();
    let result = engine.recommend("zoom application not show my video").unwrap();

    assert_eq!(result.component, "Webcam Upgrade");
    assert_eq!(result.source, Source::Rule);
    assert_ne!(result.component, "SSD Upgrade");
}

#[test]
fn test_rule_free_text_goes_through_ml() {
    let engine = trained_engine();
    let result = engine
        .recommend("my computer takes long time to boot and freezes when I open multiple programs")
        .unwrap();

    assert!(matches!(
        result.source,
        Source::HierarchicalMl | Source::FlatMl
    ));
    assert!(result.confidence >= 0.0 && result.confidence <= 1.0);
    assert_eq!(result.alternatives[0].label, result.component);
    assert_eq!(result.alternatives[0].confidence, result.confidence);
}

#[test]
fn test_alternatives_are_bounded_and_unique_across_paths() {
    let engine = trained_engine();
    for text in [
        "pc slow",
        "my ps not start",
        "wireless drops while i stream movies",
        "takes ages to boot and files crawl",
    ] {
        let result = engine.recommend(text).unwrap();
        assert!(result.alternatives.len() <= 5, "too many alternatives for {:?}", text);
        assert!(result.confidence >= 0.0 && result.confidence <= 1.0);
        let mut labels: Vec<&str> =
            result.alternatives.iter().map(|a| a.label.as_str()).collect();
        labels.sort();
        let before = labels.len();
        labels.dedup();
        assert_eq!(labels.len(), before, "duplicate alternatives for {:?}", text);
    }
}

#[test]
fn test_grouping_covers_all_alternatives() {
    let engine = trained_engine();
    let result = engine.recommend("pc slow").unwrap();
    let grouped: usize = result
        .grouped_by_category
        .iter()
        .map(|g| g.components.len())
        .sum();
    assert_eq!(grouped, result.alternatives.len());
}

#[test]
fn test_empty_input_is_invalid_not_degraded() {
    let engine = trained_engine();
    assert!(matches!(
        engine.recommend("   "),
        Err(EngineError::InvalidInput)
    ));
}

#[test]
fn test_determinism_against_one_artifact() {
    let engine = trained_engine();
    let text = "my computer takes long time to boot and freezes when I open multiple programs";
    let first = serde_json::to_string(&engine.recommend(text).unwrap()).unwrap();
    for _ in 0..3 {
        let again = serde_json::to_string(&engine.recommend(text).unwrap()).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_feedback_submission_increments_count_and_keeps_correction() {
    let dir = tempfile::tempdir().unwrap();
    let log = CsvFeedbackLog::new(dir.path().join("feedback.csv")).unwrap();

    let before = log.count().unwrap();
    let record = FeedbackRecord::new(
        "pc slow",
        "RAM Upgrade",
        0.45,
        Some("SSD Upgrade"),
        "hierarchical_ml",
    );
    let after = log.append(&record).unwrap();
    assert_eq!(after, before + 1);

    let records = log.read_all().unwrap();
    assert_eq!(records.last().unwrap().training_label(), "SSD Upgrade");
}

#[test]
fn test_low_confidence_recommendation_is_logged_for_review() {
    // A flat artifact over many classes spreads probability thin, which
    // pushes confidence under the feedback threshold for vague text.
    let dir = tempfile::tempdir().unwrap();
    let log: Arc<dyn FeedbackStore> =
        Arc::new(CsvFeedbackLog::new(dir.path().join("feedback.csv")).unwrap());

    let knowledge = Arc::new(KnowledgeBase::builtin().clone());
    let engine =
        Engine::new(RuleSet::builtin(), Arc::clone(&knowledge)).with_feedback(Arc::clone(&log));
    let artifact = fit_artifact(
        &knowledge,
        &training_corpus(),
        1,
        &TrainOptions::for_tests(),
    )
    .unwrap();
    engine.install_artifact(Arc::new(artifact));

    let result = engine.recommend("something odd is happening sometimes").unwrap();
    if result.ask_feedback {
        assert!(log.count().unwrap() >= 1);
        let records = log.read_all().unwrap();
        assert_eq!(records[0].user_correct_label, None);
        assert_eq!(records[0].predicted_label, result.component);
    } else {
        // Confident even on vague text: nothing must have been logged.
        assert_eq!(log.count().unwrap(), 0);
    }
}
