// Hwcompass - hybrid rule + ML hardware recommendation engine
// Main entry point

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use hwcompass::config::{load_settings, Settings};
use hwcompass::engine::Engine;
use hwcompass::feedback::{CsvFeedbackLog, FeedbackStore};
use hwcompass::knowledge::KnowledgeBase;
use hwcompass::model::ArtifactStore;
use hwcompass::rules::RuleSet;
use hwcompass::server::{serve, AppState, ServerConfig};
use hwcompass::training::{retrain_with_feedback, train_from_corpus};

#[derive(Parser)]
#[command(name = "hwcompass", about = "Map PC problem descriptions to hardware recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP classification service
    Serve {
        /// Override the configured bind address
        #[arg(long)]
        bind: Option<String>,
    },
    /// Fit both classifier stages from a labeled corpus and activate them
    Train {
        /// CSV corpus with user_text,component_label columns
        #[arg(long)]
        corpus: Option<PathBuf>,
    },
    /// Merge the feedback log into the corpus and fit a new artifact version
    Retrain {
        #[arg(long)]
        corpus: Option<PathBuf>,
    },
    /// Print feedback log statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hwcompass=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = load_settings()?;

    match cli.command {
        Command::Serve { bind } => run_serve(settings, bind).await,
        Command::Train { corpus } => run_train(settings, corpus, false),
        Command::Retrain { corpus } => run_train(settings, corpus, true),
        Command::Stats => run_stats(settings),
    }
}

fn load_rules(settings: &Settings) -> Result<RuleSet> {
    match &settings.rules_path {
        Some(path) => RuleSet::load_from_file(path),
        None => Ok(RuleSet::builtin()),
    }
}

fn load_knowledge(settings: &Settings) -> Result<Arc<KnowledgeBase>> {
    match &settings.knowledge_path {
        Some(path) => Ok(Arc::new(KnowledgeBase::load_from_file(path)?)),
        None => Ok(Arc::new(KnowledgeBase::builtin().clone())),
    }
}

async fn run_serve(settings: Settings, bind: Option<String>) -> Result<()> {
    let rules = load_rules(&settings)?;
    let knowledge = load_knowledge(&settings)?;
    let feedback: Arc<dyn FeedbackStore> =
        Arc::new(CsvFeedbackLog::new(settings.feedback_log_path())?);

    let engine = Engine::new(rules, knowledge).with_feedback(Arc::clone(&feedback));

    let store = ArtifactStore::new(settings.artifact_dir())?;
    match store.load_active()? {
        Some(artifact) => {
            tracing::info!(
                version = artifact.version,
                hierarchical = artifact.is_hierarchical(),
                "loaded active artifact"
            );
            engine.install_artifact(artifact);
        }
        None => {
            tracing::warn!(
                "no trained artifact found; only rule-covered inputs will classify. \
                 Run `hwcompass train --corpus <csv>` first."
            );
        }
    }

    let state = Arc::new(AppState {
        engine: Arc::new(engine),
        feedback,
    });
    let config = ServerConfig {
        bind_address: bind.unwrap_or(settings.bind_address.clone()),
    };
    serve(state, config).await
}

fn run_train(settings: Settings, corpus: Option<PathBuf>, with_feedback: bool) -> Result<()> {
    let Some(corpus_path) = corpus.or(settings.corpus_path.clone()) else {
        bail!("no corpus given; pass --corpus or set corpus_path in the config");
    };
    let knowledge = load_knowledge(&settings)?;
    let store = ArtifactStore::new(settings.artifact_dir())?;
    let options = settings.train_options();

    let artifact = if with_feedback {
        let log = CsvFeedbackLog::new(settings.feedback_log_path())?;
        retrain_with_feedback(&store, &knowledge, &corpus_path, &log, &options)?
    } else {
        train_from_corpus(&store, &knowledge, &corpus_path, &options)?
    };

    println!(
        "Trained artifact v{} on {} examples ({})",
        artifact.version,
        artifact.trained_examples,
        if artifact.is_hierarchical() {
            "hierarchical"
        } else {
            "flat"
        }
    );
    Ok(())
}

fn run_stats(settings: Settings) -> Result<()> {
    let log = CsvFeedbackLog::new(settings.feedback_log_path())?;
    let total = log.count().context("Failed to read feedback log")?;
    let pending = log.pending_review_count()?;
    println!("Feedback records: {}", total);
    println!("Pending review:   {}", pending);
    Ok(())
}
