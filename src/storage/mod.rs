//! On-disk persistence for the progress document
//!
//! A single pretty-printed JSON file under the platform data directory.
//! `StateFile` holds the resolved path so tests can point it anywhere.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Handle to the progress snapshot on disk
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// The default location under the platform data directory
    pub fn default_location() -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from("", "", "dojo").context("Failed to determine data directory")?;
        Ok(Self { path: proj_dirs.data_dir().join("state.json") })
    }

    /// A state file at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, `None` when no file has been written yet
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read state from {:?}", self.path))?;
        Ok(Some(contents))
    }

    /// Write the snapshot, creating parent directories as needed
    pub fn save(&self, snapshot: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }
        std::fs::write(&self.path, snapshot)
            .with_context(|| format!("Failed to write state to {:?}", self.path))?;
        Ok(())
    }

    /// Remove the snapshot; succeeds when none exists
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove state file {:?}", self.path))?;
        }
        Ok(())
    }
}

/// Write an exported snapshot to a user-chosen path
pub fn write_export(path: &Path, snapshot: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create export directory {:?}", parent))?;
    }
    std::fs::write(path, snapshot).with_context(|| format!("Failed to write export to {:?}", path))
}

/// Read a snapshot to import from a user-chosen path
pub fn read_import(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read import from {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_before_first_save_is_none() {
        let dir = TempDir::new().unwrap();
        let file = StateFile::at(dir.path().join("state.json"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let file = StateFile::at(dir.path().join("nested").join("state.json"));

        file.save("{\"ok\":true}").unwrap();
        assert_eq!(file.load().unwrap().as_deref(), Some("{\"ok\":true}"));
    }

    #[test]
    fn clear_removes_the_file_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let file = StateFile::at(dir.path().join("state.json"));

        file.save("{}").unwrap();
        file.clear().unwrap();
        assert!(file.load().unwrap().is_none());
        file.clear().unwrap();
    }

    #[test]
    fn export_and_import_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup").join("export.json");

        write_export(&path, "{\"x\":1}").unwrap();
        assert_eq!(read_import(&path).unwrap(), "{\"x\":1}");
    }
}
