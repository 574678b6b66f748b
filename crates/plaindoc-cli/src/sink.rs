//! Artifact sinks
//!
//! Generation hands finished bytes to an [`ArtifactSink`] under a bare file
//! name such as `report.docx`. Names are passed through untouched.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Persists serialized artifacts
pub trait ArtifactSink {
    /// Save `bytes` under `name`
    fn save(&mut self, name: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes artifacts into a directory, creating it on first save
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    saved: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            saved: Vec::new(),
        }
    }

    /// Target directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in save order
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }
}

impl ArtifactSink for DirectorySink {
    fn save(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create output directory: {}", self.dir.display())
        })?;

        let path = self.dir.join(name);
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write artifact: {}", path.display()))?;

        debug!(path = %path.display(), bytes = bytes.len(), "saved artifact");
        self.saved.push(path);
        Ok(())
    }
}

/// Collects artifacts in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: BTreeMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes saved under `name`, if any
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.artifacts.get(name).map(Vec::as_slice)
    }

    /// Saved names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn save(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.artifacts.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }
}
