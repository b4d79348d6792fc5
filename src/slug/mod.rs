//! # Slugification
//!
//! Converts arbitrary Unicode text, Vietnamese in particular, into
//! URL-safe slugs: lowercase ASCII letters and digits separated by single
//! hyphens.
//!
//! ## Pipeline
//! 1. Normalize to ASCII (NFC, đ/Đ fold, dash unification, NFKD,
//!    combining-mark removal, ASCII filter)
//! 2. Collapse separator runs into single hyphens and trim the edges
//! 3. Append the optional suffix
//! 4. Bound the length, preferring to cut at a hyphen
//! 5. Re-collapse, since concatenation and cutting can leave hyphen debris
//!
//! Every input maps to a (possibly empty) valid slug; no stage can fail.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod collapse;
pub mod normalize;
pub mod truncate;

pub use self::{collapse::collapse, normalize::normalize_to_ascii, truncate::smart_cut};

use crate::suffix::{self, SuffixMode};

/// Converts text into a slug with no length bound and no suffix.
///
/// # Example
/// ```
/// use vietslug::slug::slugify;
/// assert_eq!(slugify("Tôi Thấy Hoa Vàng Trên Cỏ Xanh"), "toi-thay-hoa-vang-tren-co-xanh");
/// assert_eq!(slugify("Sài Gòn – Hà Nội"), "sai-gon-ha-noi");
/// ```
pub fn slugify(text: &str) -> String {
    compose(text, None, "")
}

/// Converts text into a slug, bounding the length and appending a freshly
/// generated suffix for the given mode.
pub fn slugify_with(text: &str, max_len: Option<usize>, mode: SuffixMode) -> String {
    compose(text, max_len, &suffix::generate(mode))
}

/// Runs the pipeline over a pre-generated suffix string.
///
/// Deterministic: all randomness and clock access happens in suffix
/// generation, which callers do up front. An empty base suppresses the
/// suffix entirely. The suffix is appended before truncation, so the
/// truncator may sacrifice it to honor the bound.
pub fn compose(text: &str, max_len: Option<usize>, suffix: &str) -> String {
    let base = collapse(&normalize_to_ascii(text));
    if base.is_empty() {
        return base;
    }

    let mut slug = base;
    if !suffix.is_empty() {
        slug.push('-');
        slug.push_str(suffix);
    }

    if let Some(limit) = max_len {
        slug = smart_cut(&slug, limit);
    }

    collapse(&slug)
}
