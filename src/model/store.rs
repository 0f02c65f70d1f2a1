// Versioned artifact store with an atomic active pointer
//
// Layout: <dir>/artifact-v0003.json plus an ACTIVE file naming the live
// version. Prior versions are never deleted, so a bad retrain rolls back by
// re-activating the previous version. Activation writes a temp file and
// renames it over ACTIVE, which is atomic on every platform we serve from.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::ModelArtifact;

const ACTIVE_FILE: &str = "ACTIVE";

pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create artifact dir: {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn artifact_path(&self, version: u32) -> PathBuf {
        self.dir.join(format!("artifact-v{:04}.json", version))
    }

    /// All stored versions, ascending.
    pub fn versions(&self) -> Result<Vec<u32>> {
        let mut versions = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read artifact dir: {}", self.dir.display()))?
        {
            let name = entry?.file_name();
            let name = name.to_string_lossy();
            if let Some(rest) = name.strip_prefix("artifact-v") {
                if let Some(digits) = rest.strip_suffix(".json") {
                    if let Ok(version) = digits.parse::<u32>() {
                        versions.push(version);
                    }
                }
            }
        }
        versions.sort_unstable();
        Ok(versions)
    }

    pub fn next_version(&self) -> Result<u32> {
        Ok(self.versions()?.last().copied().unwrap_or(0) + 1)
    }

    pub fn save(&self, artifact: &ModelArtifact) -> Result<PathBuf> {
        let path = self.artifact_path(artifact.version);
        if path.exists() {
            bail!("artifact version {} already exists", artifact.version);
        }
        let json = serde_json::to_string(artifact).context("Failed to serialize artifact")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write artifact: {}", path.display()))?;
        Ok(path)
    }

    pub fn load(&self, version: u32) -> Result<ModelArtifact> {
        let path = self.artifact_path(version);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read artifact: {}", path.display()))?;
        serde_json::from_str(&json).context("Failed to parse artifact JSON")
    }

    pub fn active_version(&self) -> Result<Option<u32>> {
        let path = self.dir.join(ACTIVE_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read active pointer: {}", path.display()))?;
        let version = contents
            .trim()
            .parse::<u32>()
            .context("Active pointer is not a version number")?;
        Ok(Some(version))
    }

    /// Flip the active pointer to an existing version.
    pub fn activate(&self, version: u32) -> Result<()> {
        if !self.artifact_path(version).exists() {
            bail!("cannot activate missing artifact version {}", version);
        }
        let tmp = self.dir.join(format!("{}.tmp", ACTIVE_FILE));
        fs::write(&tmp, format!("{}\n", version))
            .with_context(|| format!("Failed to write active pointer: {}", tmp.display()))?;
        fs::rename(&tmp, self.dir.join(ACTIVE_FILE))
            .context("Failed to swap active pointer")?;
        Ok(())
    }

    /// Load the currently active artifact, if any.
    pub fn load_active(&self) -> Result<Option<Arc<ModelArtifact>>> {
        match self.active_version()? {
            Some(version) => Ok(Some(Arc::new(self.load(version)?))),
            None => Ok(None),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
