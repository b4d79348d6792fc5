//! # Configuration
//!
//! Global user configuration stored at `~/.config/vietslug/config`.
//! Supplies shell-side defaults for the length bound and suffix mode;
//! command-line flags always win. The slug pipeline itself never reads
//! configuration.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/vietslug/config
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default maximum slug length, applied when --max-len is not given
    #[serde(default)]
    pub max_len: Option<usize>,

    /// Default suffix mode name, applied when --suffix is not given
    #[serde(default)]
    pub suffix: Option<String>,
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/vietslug/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        let home = get_home_override().or_else(dirs::home_dir)?;
        Some(
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME),
        )
    }

    /// Loads the global config, falling back to defaults when the file
    /// (or the home directory itself) cannot be located. A file that
    /// exists but does not parse is an error.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Saves the config to ~/.config/vietslug/config, creating the
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}
