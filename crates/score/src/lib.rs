//! High-score persistence - a single decimal integer in a well-known file
//!
//! The public surface is total: a missing or corrupt file loads as 0 and a
//! failed write is silently skipped. Engines read once at construction and
//! write whenever the in-memory score reaches the stored value.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Handle to one game's high-score file
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    /// Create a handle for the given path. Nothing is touched on disk until
    /// `load` or `save` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score; missing or unparsable file means 0
    pub fn load(&self) -> u32 {
        self.try_load().unwrap_or(0)
    }

    /// Write the high score as plain decimal text, ignoring I/O failures
    pub fn save(&self, score: u32) {
        let _ = self.try_save(score);
    }

    fn try_load(&self) -> Result<u32> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let score = text
            .trim()
            .parse::<u32>()
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(score)
    }

    fn try_save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
