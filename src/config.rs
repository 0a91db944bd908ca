//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Built-in location choices, used when the config file has no override
const DEFAULT_LOCATIONS: &[&str] = &["Remote", "Banglore", "Hyderabad", "Chennai", "Kochi"];

/// Built-in job type choices
const DEFAULT_JOB_TYPES: &[&str] = &["Full-time", "Part-time", "Internship", "Remote"];

/// Selectable option sets handed to the posting form.
///
/// Validation checks membership against the same lists the dropdowns
/// render, so hosts can vary the choices without touching the rules.
#[derive(Debug, Clone)]
pub struct FormOptions {
    pub locations: Vec<String>,
    pub job_types: Vec<String>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            locations: DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            job_types: DEFAULT_JOB_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the job API
    pub api_base_url: Option<String>,
    /// Override for the location dropdown choices
    pub locations: Option<Vec<String>>,
    /// Override for the job type dropdown choices
    pub job_types: Option<Vec<String>>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "jobboard", "jobboard-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Dropdown option sets, with config overrides applied
    pub fn form_options(&self) -> FormOptions {
        let defaults = FormOptions::default();
        FormOptions {
            locations: self.locations.clone().unwrap_or(defaults.locations),
            job_types: self.job_types.clone().unwrap_or(defaults.job_types),
        }
    }
}
