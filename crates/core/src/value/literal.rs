//! Literal values: quoted strings, booleans and decimal numbers.

use std::sync::LazyLock;

use regex::Regex;

use super::split::{PIPE_SEPARATOR, split};
use super::types::Scalar;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Optional sign, digits, at most one decimal point. No exponent.
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)$").unwrap()
});

/// Whether `text` is wrapped in a matching pair of double quotes.
///
/// Inner quotes are allowed as long as the text is not itself a pipeline,
/// so `"say "hi" now"` is quoted while `"a" / "b"` is not.
pub fn is_quoted(text: &str) -> bool {
    text.len() >= 2
        && text.starts_with('"')
        && text.ends_with('"')
        && split(text, PIPE_SEPARATOR).len() == 1
}

pub fn is_boolean(text: &str) -> bool {
    text == "true" || text == "false"
}

pub fn is_number(text: &str) -> bool {
    NUMBER_RE.is_match(text)
}

/// Detects a literal value, any of:
///
/// - a string between double quotes: `"some string"`
/// - a boolean: `true` or `false`
/// - a decimal number: `12345` or `123.45`
pub fn is_literal(text: &str) -> bool {
    is_quoted(text) || is_boolean(text) || is_number(text)
}

/// Parse literal text into a typed scalar.
///
/// Anything that is neither a boolean nor a number comes back as a string
/// with one layer of surrounding double quotes removed, so this also
/// accepts bare words inside function argument lists.
pub fn parse_literal(text: &str) -> Scalar {
    if is_boolean(text) {
        return Scalar::Bool(text == "true");
    }

    if is_number(text) {
        // `12.` has no fractional digits and reads as `12`.
        let whole = text.strip_suffix('.').unwrap_or(text);
        if !whole.contains('.') {
            if let Ok(i) = whole.parse::<i64>() {
                return Scalar::Integer(i);
            }
        }
        if let Ok(f) = text.parse::<f64>() {
            return Scalar::Float(f);
        }
    }

    let unquoted = text.strip_prefix('"').unwrap_or(text);
    let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
    Scalar::String(unquoted.to_string())
}
