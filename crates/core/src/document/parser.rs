//! Parsing FlatMatter documents into a [`Matter`] tree.

use serde_json::Value;

use super::scanner::{HeaderLine, RawLine, scan};
use super::tree::{KeyPath, merge};
use super::types::{
    CONTENT_KEY, DropReason, LineOutcome, LineReport, Matter, ParseError, ParseOptions,
};
use crate::functions::FunctionRegistry;
use crate::pipeline::evaluate;
use crate::serializer::{SerializeError, Serializer};
use crate::value::resolve;
use crate::value::split::{KEY_VALUE_SEPARATOR, split};

/// A parsed FlatMatter document.
///
/// ```
/// use flatmatter_core::FlatMatter;
/// use serde_json::json;
///
/// let doc = FlatMatter::parse("---\ntitle: \"Hello\"\n---\n\nBody.").unwrap();
/// assert_eq!(doc.matter()["title"], json!("Hello"));
/// assert_eq!(doc.content(), Some("Body."));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FlatMatter {
    matter: Matter,
    content: Option<String>,
    lines: Vec<LineReport>,
}

impl FlatMatter {
    /// Parse `content` without any registered functions.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        Self::parse_with(content, &FunctionRegistry::new(), ParseOptions::default())
    }

    /// Parse `content`, resolving function values against `functions`.
    pub fn parse_with(
        content: &str,
        functions: &FunctionRegistry,
        options: ParseOptions,
    ) -> Result<Self, ParseError> {
        let scanned = scan(content);

        let (matter, lines) = scanned.header.into_iter().try_fold(
            (Matter::new(), Vec::new()),
            |(matter, mut lines), line| {
                let (matter, report) = match line {
                    HeaderLine::Boundary { index } => {
                        (matter, LineReport { index, outcome: LineOutcome::Boundary })
                    }
                    HeaderLine::Config(raw) => parse_line(matter, raw, functions, options)?,
                };
                lines.push(report);
                Ok::<_, ParseError>((matter, lines))
            },
        )?;

        let matter = match &scanned.body {
            Some(body) => merge(
                matter,
                CONTENT_KEY.to_string(),
                Value::String(body.clone()),
                options.merge,
            ),
            None => matter,
        };

        Ok(Self { matter, content: scanned.body, lines })
    }

    /// The parsed tree, including the `content` key when there is a body.
    pub fn matter(&self) -> &Matter {
        &self.matter
    }

    pub fn into_matter(self) -> Matter {
        self.matter
    }

    /// Body text after the closing boundary marker.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// What happened to each header line, in document order.
    pub fn lines(&self) -> &[LineReport] {
        &self.lines
    }

    /// Hand the parsed tree to `serializer`.
    pub fn serialize<S: Serializer>(&self, serializer: &S) -> Result<S::Output, SerializeError> {
        serializer.serialize(&self.matter)
    }
}

/// Parse `content` into a [`Matter`] tree with the default options.
pub fn parse(content: &str, functions: &FunctionRegistry) -> Result<Matter, ParseError> {
    FlatMatter::parse_with(content, functions, ParseOptions::default()).map(FlatMatter::into_matter)
}

/// Parse one config line and fold its value into `matter`.
fn parse_line(
    matter: Matter,
    raw: RawLine<'_>,
    functions: &FunctionRegistry,
    options: ParseOptions,
) -> Result<(Matter, LineReport), ParseError> {
    let RawLine { index, text } = raw;
    let report = |outcome| LineReport { index, outcome };

    if text.trim().is_empty() {
        return Ok((matter, report(LineOutcome::Blank)));
    }

    let parts = split(text, KEY_VALUE_SEPARATOR);
    if parts.len() < 2 {
        if options.strict {
            return Err(ParseError::MissingSeparator { line: index });
        }
        tracing::debug!(line = index, "dropping line without a value separator");
        return Ok((matter, report(LineOutcome::Dropped { reason: DropReason::MissingSeparator })));
    }
    if parts.len() > 2 && options.strict {
        return Err(ParseError::MultipleSeparators { line: index });
    }

    let key = parts[0].trim();
    let value = text[parts[0].len() + KEY_VALUE_SEPARATOR.len()..].trim();

    let Some(path) = KeyPath::parse(key) else {
        if options.strict {
            return Err(ParseError::InvalidKey { line: index, key: key.to_string() });
        }
        tracing::debug!(line = index, key, "dropping line with an invalid key");
        return Ok((matter, report(LineOutcome::Dropped { reason: DropReason::InvalidKey })));
    };

    let Some(parsed) = resolve(value) else {
        if options.strict {
            return Err(ParseError::InvalidValue { line: index, value: value.to_string() });
        }
        tracing::debug!(line = index, value, "dropping line with an unresolvable value");
        return Ok((matter, report(LineOutcome::Dropped { reason: DropReason::UnresolvedValue })));
    };

    let evaluation =
        evaluate(parsed, functions).map_err(|source| ParseError::Function { line: index, source })?;

    tracing::trace!(line = index, key = %path, value = %evaluation.value, "recorded");
    let key = path.to_string();
    let (root, nested) = path.into_entry(evaluation.value);
    let matter = merge(matter, root, nested, options.merge);

    Ok((matter, report(LineOutcome::Recorded { key, steps: evaluation.steps })))
}
