//! # Constants
//!
//! Centralized constants for magic values used throughout vietslug.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "vietslug";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Recognized suffix mode names, as accepted by `--suffix` and the
/// `suffix` config key.
pub const SUFFIX_MODES: &[&str] = &["none", "random4", "random6", "date", "datetime"];
