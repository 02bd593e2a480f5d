// src/parsers.rs
use std::ops::RangeInclusive;

const MAX_DEPTH_ARG: usize = 65_536;

fn parse_within(s: &str, range: RangeInclusive<usize>) -> Result<usize, String> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|err| format!("'{s}' is not a count: {err}"))?;
    if range.contains(&value) {
        Ok(value)
    } else if value < *range.start() {
        Err(format!("expected {} or more, got {value}", range.start()))
    } else {
        Err(format!("expected at most {}, got {value}", range.end()))
    }
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_within(s, 1..=usize::MAX)
}

/// Parse a traversal depth constrained to the inclusive range [1, 65536].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range.
pub fn parse_depth(s: &str) -> Result<usize, String> {
    parse_within(s, 1..=MAX_DEPTH_ARG)
}
