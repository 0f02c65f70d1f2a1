// Settings loader
// Reads ~/.hwcompass/config.toml (or $HWCOMPASS_CONFIG), falling back to
// defaults when no file exists.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::settings::Settings;

pub fn load_settings() -> Result<Settings> {
    let path = config_path();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(apply_env_overrides(Settings::default()));
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let settings: Settings = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(apply_env_overrides(settings))
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("HWCOMPASS_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hwcompass/config.toml")
}

fn apply_env_overrides(mut settings: Settings) -> Settings {
    if let Ok(bind) = std::env::var("HWCOMPASS_BIND") {
        if !bind.is_empty() {
            settings.bind_address = bind;
        }
    }
    if let Ok(data_dir) = std::env::var("HWCOMPASS_DATA_DIR") {
        if !data_dir.is_empty() {
            settings.data_dir = PathBuf::from(data_dir);
        }
    }
    settings
}
