//! # Unicode Normalization
//!
//! Folds arbitrary Unicode text down to plain ASCII: canonical composition,
//! Vietnamese đ/Đ folding, dash unification, compatibility decomposition,
//! combining-mark removal, and a lossy ASCII filter.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Unicode dash punctuation (category Pd), plus dash-like symbols outside
/// that category. All of these become ASCII hyphens before decomposition;
/// the ASCII filter would otherwise drop them and fuse the surrounding
/// tokens.
const DASHLIKE: &[char] = &[
    '\u{002D}',  // hyphen-minus
    '\u{058A}',  // armenian hyphen
    '\u{05BE}',  // hebrew punctuation maqaf
    '\u{1400}',  // canadian syllabics hyphen
    '\u{1806}',  // mongolian todo soft hyphen
    '\u{2010}',  // hyphen
    '\u{2011}',  // non-breaking hyphen
    '\u{2012}',  // figure dash
    '\u{2013}',  // en dash
    '\u{2014}',  // em dash
    '\u{2015}',  // horizontal bar
    '\u{2E17}',  // double oblique hyphen
    '\u{2E1A}',  // hyphen with diaeresis
    '\u{2E3A}',  // two-em dash
    '\u{2E3B}',  // three-em dash
    '\u{2E40}',  // double hyphen
    '\u{2E5D}',  // oblique hyphen
    '\u{301C}',  // wave dash
    '\u{3030}',  // wavy dash
    '\u{30A0}',  // katakana-hiragana double hyphen
    '\u{FE31}',  // presentation form for vertical em dash
    '\u{FE32}',  // presentation form for vertical en dash
    '\u{FE58}',  // small em dash
    '\u{FE63}',  // small hyphen-minus
    '\u{FF0D}',  // fullwidth hyphen-minus
    '\u{10EAD}', // yezidi hyphenation mark
    // Not dash punctuation, but read as dashes
    '\u{2043}',  // hyphen bullet
    '\u{2212}',  // minus sign
];

/// Vietnamese đ/Đ carry no combining mark, so decomposition cannot strip
/// the stroke. Fold them by hand.
const fn fold_d(c: char) -> char {
    match c {
        'đ' => 'd',
        'Đ' => 'D',
        _ => c,
    }
}

fn unify_dash(c: char) -> char {
    if DASHLIKE.contains(&c) {
        '-'
    } else {
        c
    }
}

/// Folds arbitrary Unicode text to ASCII.
///
/// Step order is load-bearing: dashes are unified before NFKD so dash
/// codepoints survive the ASCII filter, and combining marks are stripped
/// only after NFKD has split them off their base letters. Codepoints with
/// no ASCII representation (emoji, CJK, Cyrillic) are dropped, not
/// transliterated. An empty result is a defined outcome, not an error.
///
/// # Example
/// ```
/// use vietslug::slug::normalize_to_ascii;
/// assert_eq!(normalize_to_ascii("Đặc sản"), "Dac san");
/// ```
pub fn normalize_to_ascii(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.nfc()
        .map(fold_d)
        .map(unify_dash)
        .nfkd()
        .filter(|&c| !is_combining_mark(c))
        .filter(char::is_ascii)
        .collect()
}
