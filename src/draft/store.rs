//! Draft slot storage
//!
//! A single named slot in durable local storage: read once when the form
//! opens, overwritten on explicit save, removed after a successful
//! submission.

use super::JobDraft;
use anyhow::Result;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Trait for the draft slot, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait DraftStore: Send + Sync {
    /// Read the stored draft, if any
    fn load(&self) -> Result<Option<JobDraft>>;

    /// Write the draft, replacing any prior value
    fn save(&self, draft: &JobDraft) -> Result<()>;

    /// Remove the stored draft; removing an empty slot is not an error
    fn delete(&self) -> Result<()>;
}

/// File-backed draft slot under the platform data directory
pub struct FileDraftStore {
    path: Option<PathBuf>,
}

impl FileDraftStore {
    pub fn new() -> Self {
        let path = ProjectDirs::from("io", "jobboard", "jobboard-tui")
            .map(|dirs| dirs.data_dir().join("draft.json"));
        Self { path }
    }

    /// Store backed by an explicit file path
    #[allow(dead_code)]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

impl Default for FileDraftStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self) -> Result<Option<JobDraft>> {
        if let Some(path) = &self.path {
            if path.exists() {
                let content = fs::read_to_string(path)?;
                let draft: JobDraft = serde_json::from_str(&content)?;
                return Ok(Some(draft));
            }
        }
        Ok(None)
    }

    fn save(&self, draft: &JobDraft) -> Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(draft)?;
            fs::write(path, content)?;
        }
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        if let Some(path) = &self.path {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}
