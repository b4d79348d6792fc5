//! # Test Harness
//!
//! Utilities for integration testing vietslug without affecting user
//! configuration. Uses thread-local storage instead of environment
//! variables to avoid any interference with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, path::PathBuf};

use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use vietslug::set_home_override;

/// Test environment that redirects the global config to a temporary
/// home directory.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/vietslug/config)
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Creates a new test environment with a temporary home directory.
    ///
    /// Uses thread-local storage to redirect global config (no env var
    /// modification), so parallel tests cannot observe each other.
    pub fn new() -> Self {
        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));
        Self { home_dir }
    }

    /// Returns the path where the global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("vietslug")
            .join("config")
    }

    /// Writes raw TOML content to the global config file.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        fs::write(&path, content).expect("Failed to write config");
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}
