//! # Configuration Persistence
//!
//! User settings stored in `~/.config/launchpad/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is read from a JSON file in the user's XDG config
//! directory. It controls how commands are run and how
//! the launcher logs; the command catalog itself is compiled in and cannot be
//! changed here.
//!
//! ```json
//! {
//!   "shell": "/bin/bash",
//!   "shell_flag": "-c",
//!   "capture_stderr": true,
//!   "page_size": 20,
//!   "log_level": "debug"
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Program that interprets command text.
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Flag that tells the shell to run its next argument.
    #[serde(default = "default_shell_flag")]
    pub shell_flag: String,

    /// Show stderr after stdout in the output pane.
    #[serde(default)]
    pub capture_stderr: bool,

    /// Lines moved by PageUp / PageDown in the output pane.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Log filter used when `LAUNCHPAD_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_shell() -> String {
    "/bin/sh".to_string()
}

fn default_shell_flag() -> String {
    "-c".to_string()
}

fn default_page_size() -> usize {
    crate::ui::app::DEFAULT_PAGE_SIZE
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            shell_flag: default_shell_flag(),
            capture_stderr: false,
            page_size: default_page_size(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from the default location. Returns
    /// `Config::default()` if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Return the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = project_dirs()?;
        Ok(dirs.config_dir().join("config.json"))
    }

    /// Default location of the log file.
    pub fn log_path() -> Result<PathBuf> {
        let dirs = project_dirs()?;
        Ok(dirs.data_dir().join("launchpad.log"))
    }
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "launchpad")
        .context("Could not determine config directory")
}
