//! Quote-aware splitting.

/// Separator between the key and the value of a line.
pub const KEY_VALUE_SEPARATOR: &str = ":";

/// Separator between the parts of a pipeline.
pub const PIPE_SEPARATOR: &str = " / ";

/// Separator between the name and arguments of a function call.
pub const ARGUMENT_SEPARATOR: &str = " ";

/// Split `text` on `separator`, keeping double-quoted runs intact.
///
/// An occurrence of the separator only splits when an even number of `"`
/// characters precedes it. Unbalanced quotes make the last part absorb the
/// rest of the text.
///
/// ```
/// use flatmatter_core::value::split::split;
///
/// assert_eq!(split(r#"a "b c" d"#, " "), vec!["a", r#""b c""#, "d"]);
/// ```
pub fn split<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return vec![text];
    }

    let bytes = text.as_bytes();
    let sep = separator.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i..].starts_with(sep) {
            // Matches are consumed whole even when quoted, so overlapping
            // separators pair up the same way inside and outside quotes.
            if !in_quotes {
                parts.push(&text[start..i]);
                start = i + sep.len();
            }
            i += sep.len();
            continue;
        }

        if bytes[i] == b'"' {
            in_quotes = !in_quotes;
        }
        i += 1;
    }

    parts.push(&text[start..]);
    parts
}
