//! Counter target parsing.
//!
//! # Responsibility
//! - Turn a raw `data-target` attribute into a target integer.
//!
//! # Invariants
//! - Fixed targets follow base-10 `parseInt` prefix rules.
//! - Unparsable values collapse to `0`; negative values are kept.
//! - Random targets always land in `[min, max)`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Attribute value marking the counter that shows a random complaints total.
pub const RANDOM_COMPLAINTS_MARKER: &str = "random-complaints";

static LEADING_INTEGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?)([0-9]+)").expect("leading integer pattern is valid")
});

/// Where a counter's final value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTarget {
    Fixed(i64),
    /// Drawn fresh on every page load; never persisted.
    RandomComplaints,
}

impl CounterTarget {
    /// Parses the raw attribute value. A missing attribute is `Fixed(0)`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(RANDOM_COMPLAINTS_MARKER) => Self::RandomComplaints,
            Some(value) => Self::Fixed(parse_int_prefix(value)),
            None => Self::Fixed(0),
        }
    }

    /// Resolves the final integer; `unit` is a uniform sample from `[0, 1)`.
    pub fn resolve(self, min: u64, max: u64, unit: f64) -> i64 {
        match self {
            Self::Fixed(value) => value,
            Self::RandomComplaints => {
                i64::try_from(random_in_range(min, max, unit)).unwrap_or(i64::MAX)
            }
        }
    }
}

/// Reads the leading base-10 integer of `raw` the way `parseInt(raw, 10)` does.
///
/// Unparsable values yield `0`; values past the `i64` range saturate.
pub fn parse_int_prefix(raw: &str) -> i64 {
    let Some(captures) = LEADING_INTEGER.captures(raw) else {
        return 0;
    };
    let negative = &captures[1] == "-";
    captures[2].bytes().fold(0i64, |acc, digit| {
        let digit = i64::from(digit - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    })
}

/// Maps a unit sample onto `[min, max)`, flooring like the page script.
pub fn random_in_range(min: u64, max: u64, unit: f64) -> u64 {
    if max <= min {
        return min;
    }
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
    let span = (max - min) as f64;
    let value = min + (unit * span).floor() as u64;
    value.min(max - 1)
}
