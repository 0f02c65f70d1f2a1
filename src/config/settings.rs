// Settings structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::TrainParams;
use crate::text::VectorizerConfig;
use crate::training::TrainOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root for artifacts and the feedback log.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Labeled training corpus (CSV with user_text,component_label).
    #[serde(default)]
    pub corpus_path: Option<PathBuf>,

    /// JSON overrides for the builtin rule table and component catalog.
    #[serde(default)]
    pub rules_path: Option<PathBuf>,
    #[serde(default)]
    pub knowledge_path: Option<PathBuf>,

    #[serde(default)]
    pub training: TrainingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingSettings {
    pub epochs: usize,
    pub learning_rate: f32,
    pub l2: f32,
    pub seed: u64,
    pub min_df: usize,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        let params = TrainParams::default();
        let vectorizer = VectorizerConfig::default();
        Self {
            epochs: params.epochs,
            learning_rate: params.learning_rate,
            l2: params.l2,
            seed: params.seed,
            min_df: vectorizer.min_df,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            bind_address: default_bind_address(),
            corpus_path: None,
            rules_path: None,
            knowledge_path: None,
            training: TrainingSettings::default(),
        }
    }
}

impl Settings {
    pub fn artifact_dir(&self) -> PathBuf {
        self.data_dir.join("models")
    }

    pub fn feedback_log_path(&self) -> PathBuf {
        self.data_dir.join("feedback.csv")
    }

    pub fn train_options(&self) -> TrainOptions {
        TrainOptions {
            vectorizer: VectorizerConfig {
                min_df: self.training.min_df,
                ..VectorizerConfig::default()
            },
            params: TrainParams {
                epochs: self.training.epochs,
                learning_rate: self.training.learning_rate,
                l2: self.training.l2,
                seed: self.training.seed,
            },
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hwcompass")
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}
