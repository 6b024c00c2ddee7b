use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Set once at startup by main() from the --data-dir argument.
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Call this from main() before `init` runs.
pub fn set_data_dir(path: PathBuf) {
    let _ = DATA_DIR.set(path);
}

pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = DATA_DIR.get() {
        return Ok(dir.clone());
    }
    // Fallback when running tests or if set_data_dir was not called
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    Ok(cwd.join("config"))
}

pub trait Persistable: Sized + Default + Serialize + for<'de> Deserialize<'de> {
    fn filename() -> &'static str;
    fn is_json() -> bool;

    /// Load from `dir`. A missing file yields `Default`.
    fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::filename());
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loading data file");
        Self::parse(&contents).with_context(|| format!("in {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        if Self::is_json() {
            serde_json::from_str(contents).context("failed to parse JSON")
        } else {
            serde_norway::from_str(contents).context("failed to parse YAML")
        }
    }

    fn to_text(&self) -> Result<String> {
        if Self::is_json() {
            serde_json::to_string_pretty(self).context("failed to serialize JSON")
        } else {
            serde_norway::to_string(self).context("failed to serialize YAML")
        }
    }

    /// Write to an explicit directory, creating it when missing.
    fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create dir {}", dir.display()))?;
        let path = dir.join(Self::filename());
        fs::write(&path, self.to_text()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
