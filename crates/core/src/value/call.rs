//! Function values: bare references and parenthesized calls.

use std::sync::LazyLock;

use regex::Regex;

use super::literal::parse_literal;
use super::split::{ARGUMENT_SEPARATOR, split};
use super::types::ComputeStep;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Whether `text` is a bare function reference such as `to-upper`.
pub fn is_reference(text: &str) -> bool {
    IDENTIFIER_RE.is_match(text)
}

/// Whether the opening parenthesis of `text` is closed by its last character.
///
/// Parentheses inside double-quoted runs are ignored, so `(f "a)")` is one
/// call while `(a) / (b)` is not.
pub fn is_parenthesized(text: &str) -> bool {
    if !(text.starts_with('(') && text.ends_with(')')) || text.len() < 2 {
        return false;
    }

    let mut depth = 0usize;
    let mut in_quotes = false;
    let last = text.len() - 1;

    for (i, b) in text.bytes().enumerate() {
        match b {
            b'"' => in_quotes = !in_quotes,
            b'(' if !in_quotes => depth += 1,
            b')' if !in_quotes => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == last;
                }
            }
            _ => {}
        }
    }

    false
}

/// Detects a function value, either of:
///
/// - a call with arguments: `(function-name arg1 arg2)`
/// - a call by reference: `function-name`
pub fn is_function_call(text: &str) -> bool {
    if is_parenthesized(text) {
        return call_parts(text).is_some();
    }
    is_reference(text)
}

/// Parse a function value into a [`ComputeStep`].
///
/// Text that is not parenthesized becomes a bare reference as-is. Returns
/// `None` for empty text or a call without a function name.
pub fn parse_function_call(text: &str) -> Option<ComputeStep> {
    if is_parenthesized(text) {
        let (name, args) = call_parts(text)?;
        return Some(ComputeStep::call(name, args.into_iter().map(parse_literal).collect()));
    }

    if text.is_empty() {
        return None;
    }
    Some(ComputeStep::reference(text))
}

/// Name and raw argument tokens of a parenthesized call.
fn call_parts(text: &str) -> Option<(&str, Vec<&str>)> {
    let inner = &text[1..text.len() - 1];
    // Repeated spaces produce empty tokens; they carry no argument.
    let mut tokens = split(inner, ARGUMENT_SEPARATOR).into_iter().filter(|t| !t.is_empty());
    let name = tokens.next()?;
    Some((name, tokens.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::types::Scalar;
    use rstest::rstest;

    #[rstest]
    #[case("to-upper", true)]
    #[case("snake_case_9", true)]
    #[case(r#"(to-upper "value")"#, true)]
    #[case("(now)", true)]
    #[case(r#"(f "a)")"#, true)]
    #[case("()", false)]
    #[case("(  )", false)]
    #[case("(a) / (b)", false)]
    #[case("has space", false)]
    #[case(r#""quoted""#, false)]
    #[case("", false)]
    fn detects_function_calls(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_function_call(text), expected, "{text}");
    }

    #[test]
    fn parses_bare_reference() {
        assert_eq!(parse_function_call("to-upper"), Some(ComputeStep::reference("to-upper")));
    }

    #[test]
    fn parses_call_with_typed_arguments() {
        let step = parse_function_call(r#"(limit 10 "posts" true 1.5)"#).unwrap();
        assert_eq!(step.identifier, "limit");
        assert_eq!(
            step.args,
            vec![
                Scalar::Integer(10),
                Scalar::String("posts".into()),
                Scalar::Bool(true),
                Scalar::Float(1.5),
            ]
        );
    }

    #[test]
    fn quoted_arguments_keep_their_spaces() {
        let step = parse_function_call(r#"(to-upper "value goes here" "and here")"#).unwrap();
        assert_eq!(
            step.args,
            vec![Scalar::String("value goes here".into()), Scalar::String("and here".into())]
        );
    }

    #[test]
    fn zero_argument_call() {
        assert_eq!(parse_function_call("(now)"), Some(ComputeStep::call("now", vec![])));
    }

    #[test]
    fn extra_spaces_are_ignored() {
        let step = parse_function_call("(add  1   2)").unwrap();
        assert_eq!(step.args, vec![Scalar::Integer(1), Scalar::Integer(2)]);
    }

    #[test]
    fn empty_call_has_no_step() {
        assert_eq!(parse_function_call("()"), None);
        assert_eq!(parse_function_call(""), None);
    }
}
