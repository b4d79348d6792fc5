//! # Token Collapsing
//!
//! Reduces folded ASCII text to the slug character set: lowercase letters
//! and digits separated by single hyphens, with no hyphens at the edges.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Collapses ASCII text into slug form.
///
/// Every maximal run of characters outside `[A-Za-z0-9]` (whitespace,
/// punctuation, existing hyphens) becomes one hyphen, letters are
/// lowercased, and leading/trailing hyphens are trimmed. Returns an
/// empty string when nothing alphanumeric survives.
///
/// Idempotent on its own output, which lets the pipeline reuse it as the
/// final cleanup pass after suffix concatenation and truncation.
///
/// # Example
/// ```
/// use vietslug::slug::collapse;
/// assert_eq!(collapse("  A---B__C   "), "a-b-c");
/// ```
pub fn collapse(ascii: &str) -> String {
    let mut result = String::with_capacity(ascii.len());
    let mut prev_was_hyphen = true; // Start true to trim leading hyphens

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            prev_was_hyphen = false;
        } else if !prev_was_hyphen {
            result.push('-');
            prev_was_hyphen = true;
        }
    }

    // Trim trailing hyphen
    if result.ends_with('-') {
        result.pop();
    }

    result
}
