//! Numeric coercion of raw string cells.
//!
//! Both functions follow the null-and-drop policy: a cell that cannot be
//! coerced yields `None` instead of an error, and the drop step removes the
//! row later.

use std::sync::LazyLock;

use regex::Regex;

/// First decimal-or-integer token in a cell: `\d+\.\d+|\d+`.
///
/// Raw value cells carry trailing flag annotations (`"78.5 e"`, `": b"`);
/// extracting the first numeric token strips them. On cells with several
/// numeric tokens the first one wins.
static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+|\d+").expect("hard-coded pattern is valid"));

/// Parse a year cell as an integer.
///
/// Standard numeric-string parsing after trimming; integral float strings
/// (`"2021.0"`) are accepted. Header leftovers and other non-numeric strings
/// return `None`.
pub fn parse_year(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(year) = trimmed.parse::<i64>() {
        return Some(year);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Some(value as i64),
        _ => None,
    }
}

/// Extract the first numeric token from a value cell and parse it.
///
/// Returns `None` when the cell holds no digit sequence at all.
pub fn extract_value(raw: &str) -> Option<f64> {
    let token = NUMERIC_TOKEN.find(raw)?;
    token.as_str().parse::<f64>().ok()
}
