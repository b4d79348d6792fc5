//! # vietslug
//!
//! Converts arbitrary Unicode text, Vietnamese in particular, into
//! URL-safe ASCII slugs.
//!
//! The whole library is a pure function family: every input string maps
//! deterministically to a (possibly empty) valid slug, nothing is cached
//! between calls, and no call can fail.
//!
//! ## Features
//!
//! - **Diacritic folding**: NFC/NFKD normalization with combining-mark
//!   removal; đ/Đ folded explicitly since they carry no combining mark
//! - **Dash unification**: every Unicode dash variant becomes a plain hyphen
//! - **Smart truncation**: length bounds cut at token boundaries when possible
//! - **Suffixes**: random hex or local-time stamps for disambiguation
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod config;
pub mod constants;
pub mod slug;
pub mod suffix;

pub use config::{set_home_override, GlobalConfig};
pub use slug::{slugify, slugify_with};
pub use suffix::SuffixMode;
