//! Classification of a raw value into literal, function call or pipeline.

use super::call::{is_function_call, parse_function_call};
use super::literal::{is_literal, parse_literal};
use super::split::{PIPE_SEPARATOR, split};
use super::types::{ParsedValue, ValueKind};

/// Decide what kind of value `text` holds.
pub fn classify(text: &str) -> ValueKind {
    if is_literal(text) {
        ValueKind::Literal
    } else if is_function_call(text) {
        ValueKind::FunctionCall
    } else if is_pipeline(text) {
        ValueKind::Pipeline
    } else {
        ValueKind::Invalid
    }
}

/// Detects a piped value: literal and function parts joined by ` / `.
///
/// ```yaml
/// posts: (get-content "posts") / (limit 10) / only-published
/// posts: "posts" / get-content / (limit 10) / only-published
/// ```
pub fn is_pipeline(text: &str) -> bool {
    split(text, PIPE_SEPARATOR).iter().all(|part| is_literal(part) || is_function_call(part))
}

/// Resolve `text` into a [`ParsedValue`], or `None` when it is not a valid
/// value.
pub fn resolve(text: &str) -> Option<ParsedValue> {
    match classify(text) {
        ValueKind::Literal => Some(ParsedValue::literal(parse_literal(text))),
        ValueKind::FunctionCall => {
            parse_function_call(text).map(|step| ParsedValue::computed(vec![step]))
        }
        ValueKind::Pipeline => resolve_pipeline(text),
        ValueKind::Invalid => None,
    }
}

/// A literal first part seeds the pipeline; every other part is a step.
fn resolve_pipeline(text: &str) -> Option<ParsedValue> {
    let parts = split(text, PIPE_SEPARATOR);
    let (seed, rest) = match parts.split_first() {
        Some((first, rest)) if is_literal(first) => (Some(parse_literal(first)), rest),
        _ => (None, parts.as_slice()),
    };

    let steps = rest.iter().map(|part| parse_function_call(part)).collect::<Option<Vec<_>>>()?;
    Some(ParsedValue { seed, steps })
}
