//! # Suffix Generation
//!
//! Produces the optional disambiguation token appended to a slug: random
//! lowercase hex from a CSPRNG, or a local wall-clock date/datetime stamp.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt::Write;

use chrono::{DateTime, Local};
use rand::Rng;

/// Suffix selection. Parsed leniently from user input: unknown names mean
/// no suffix, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuffixMode {
    /// No suffix (default)
    #[default]
    None,
    /// 4 lowercase hex digits (2 random bytes)
    Random4,
    /// 6 lowercase hex digits (3 random bytes)
    Random6,
    /// Local date, `YYYYMMDD`
    Date,
    /// Local date and time to the minute, `YYYYMMDDhhmm`
    DateTime,
}

impl SuffixMode {
    /// Parses a mode name, case-insensitively and ignoring surrounding
    /// whitespace. Unknown names (including the empty string) fall back
    /// to `None`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "random4" => Self::Random4,
            "random6" => Self::Random6,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            _ => Self::None,
        }
    }
}

/// Generates a suffix for the given mode.
///
/// Reads the thread-local CSPRNG and the current local wall-clock time.
/// Every call draws fresh; there is no shared counter or cache.
pub fn generate(mode: SuffixMode) -> String {
    generate_at(mode, &mut rand::rng(), Local::now())
}

/// Generates a suffix from an explicit RNG and clock reading.
///
/// This is the seam tests use to pin down the `Random*` and
/// `Date`/`DateTime` modes; [`generate`] is the production wrapper.
pub fn generate_at<R: Rng>(mode: SuffixMode, rng: &mut R, now: DateTime<Local>) -> String {
    match mode {
        SuffixMode::None => String::new(),
        SuffixMode::Random4 => random_hex(rng, 2),
        SuffixMode::Random6 => random_hex(rng, 3),
        SuffixMode::Date => now.format("%Y%m%d").to_string(),
        SuffixMode::DateTime => now.format("%Y%m%d%H%M").to_string(),
    }
}

/// Draws `count` random bytes and hex-encodes them, two digits per byte.
fn random_hex<R: Rng>(rng: &mut R, count: usize) -> String {
    let mut result = String::with_capacity(count * 2);
    for _ in 0..count {
        let byte: u8 = rng.random();
        let _ = write!(result, "{byte:02x}");
    }
    result
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::constants::SUFFIX_MODES;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 9, 8, 5, 42).unwrap()
    }

    #[test]
    fn test_parse_known_modes() {
        assert_eq!(SuffixMode::parse("random4"), SuffixMode::Random4);
        assert_eq!(SuffixMode::parse("random6"), SuffixMode::Random6);
        assert_eq!(SuffixMode::parse("date"), SuffixMode::Date);
        assert_eq!(SuffixMode::parse("datetime"), SuffixMode::DateTime);
        assert_eq!(SuffixMode::parse("none"), SuffixMode::None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(SuffixMode::parse("RANDOM4"), SuffixMode::Random4);
        assert_eq!(SuffixMode::parse("  DateTime "), SuffixMode::DateTime);
    }

    #[test]
    fn test_parse_unknown_falls_back_to_none() {
        assert_eq!(SuffixMode::parse(""), SuffixMode::None);
        assert_eq!(SuffixMode::parse("random8"), SuffixMode::None);
        assert_eq!(SuffixMode::parse("tomorrow"), SuffixMode::None);
    }

    #[test]
    fn test_all_advertised_modes_recognized() {
        for name in SUFFIX_MODES {
            let mode = SuffixMode::parse(name);
            assert!(
                *name == "none" || mode != SuffixMode::None,
                "{name} should parse to a real mode"
            );
        }
    }

    #[test]
    fn test_none_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate_at(SuffixMode::None, &mut rng, fixed_now()), "");
    }

    #[test]
    fn test_random_lengths_and_charset() {
        let mut rng = StdRng::seed_from_u64(7);
        let four = generate_at(SuffixMode::Random4, &mut rng, fixed_now());
        let six = generate_at(SuffixMode::Random6, &mut rng, fixed_now());
        assert_eq!(four.len(), 4);
        assert_eq!(six.len(), 6);
        for c in four.chars().chain(six.chars()) {
            assert!(c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
        }
    }

    #[test]
    fn test_random_is_deterministic_under_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_at(SuffixMode::Random6, &mut a, fixed_now()),
            generate_at(SuffixMode::Random6, &mut b, fixed_now())
        );
    }

    #[test]
    fn test_date_format() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate_at(SuffixMode::Date, &mut rng, fixed_now()), "20260109");
    }

    #[test]
    fn test_datetime_format() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_at(SuffixMode::DateTime, &mut rng, fixed_now()),
            "202601090805"
        );
    }

    #[test]
    fn test_production_wrapper_shapes() {
        assert_eq!(generate(SuffixMode::None), "");
        assert_eq!(generate(SuffixMode::Random4).len(), 4);
        let date = generate(SuffixMode::Date);
        assert_eq!(date.len(), 8);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
    }
}
