//! Field derivations for the structured-extraction workload.

use crate::error::WorkloadError;

/// First and last components of a full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts<'a> {
    pub first: &'a str,
    pub last: &'a str,
}

/// Splits on single spaces, ignoring empty segments.
///
/// The last name is the final token, and only exists when there are at
/// least two tokens; middle names are dropped.
pub fn split_name(name: &str) -> NameParts<'_> {
    let mut tokens = name.split(' ').filter(|t| !t.is_empty());
    let first = tokens.next().unwrap_or("");
    let last = tokens.last().unwrap_or("");
    NameParts { first, last }
}

/// Text before the first `@`, or `""` when there is none.
pub fn username(email: &str) -> &str {
    email.split_once('@').map_or("", |(user, _)| user)
}

/// Reads the birth year from the first `-`-separated segment of `birthdate`.
pub fn birth_year(birthdate: &str) -> Result<i32, WorkloadError> {
    let segment = birthdate
        .split('-')
        .find(|s| !s.is_empty())
        .ok_or_else(|| WorkloadError::invalid("birthdate", "Invalid birthdate format"))?;
    parse_leading_int(segment)
        .ok_or_else(|| WorkloadError::invalid("birthdate", format!("Invalid birth year: '{segment}'")))
}

/// Whole-year age with no month/day adjustment.
pub fn age(birth_year: i32, current_year: i32) -> i64 {
    i64::from(current_year) - i64::from(birth_year)
}

/// Parses a leading decimal integer the way C's `stoi` does: optional
/// leading whitespace and sign, at least one digit, trailing junk ignored.
fn parse_leading_int(s: &str) -> Option<i32> {
    let trimmed = s.trim_start_matches(crate::algorithms::is_c_space);
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let magnitude: i64 = digits[..len].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}
