//! User configuration management
//!
//! Loaded from `<config dir>/taskdeck/config.toml`. A missing file means
//! defaults; a malformed file is logged and replaced by defaults so the app
//! always starts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// How often the reminder scan runs, in milliseconds.
    #[serde(default = "default_scan_interval_ms")]
    pub reminder_scan_interval_ms: u64,

    /// Category suggestions offered in the new-task dialog. Free text is
    /// always accepted; these are only hints.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            reminder_scan_interval_ms: default_scan_interval_ms(),
            categories: default_categories(),
        }
    }
}

fn default_scan_interval_ms() -> u64 {
    500
}

fn default_categories() -> Vec<String> {
    ["Work", "Personal", "Chores", "Shopping", "Other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Path pre-filled in the export dialog.
    #[serde(default = "default_export_path")]
    pub default_path: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_path: default_export_path(),
        }
    }
}

fn default_export_path() -> String {
    "tasks_export.csv".to_string()
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("taskdeck").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
