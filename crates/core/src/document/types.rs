//! Types shared by the document parser.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::pipeline::{EvaluationError, StepOutcome};

/// Parsed configuration tree.
///
/// Keys keep their first-insertion order.
pub type Matter = Map<String, Value>;

/// Reserved key holding the body text after the second boundary marker.
pub const CONTENT_KEY: &str = "content";

/// Line that opens and closes the configuration header.
pub const BOUNDARY_MARKER: &str = "---";

/// How a line's key path is merged into the tree built so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Replace the whole top-level entry: after `a.x: 1` and `a.y: 2` only
    /// `a.y` remains.
    #[default]
    Shallow,
    /// Merge nested maps recursively; leaves are overwritten.
    Deep,
}

/// Options controlling a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Reject malformed lines instead of silently dropping them.
    pub strict: bool,
    pub merge: MergeStrategy,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true, ..Self::default() }
    }

    #[must_use]
    pub fn with_merge(mut self, merge: MergeStrategy) -> Self {
        self.merge = merge;
        self
    }
}

/// Errors that can occur while parsing a document.
///
/// Only function failures are raised in the default lenient mode; the other
/// variants require [`ParseOptions::strict`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: {source}")]
    Function {
        line: usize,
        #[source]
        source: EvaluationError,
    },

    #[error("line {line} doesn't have a value separator")]
    MissingSeparator { line: usize },

    #[error("line {line} has multiple value separators")]
    MultipleSeparators { line: usize },

    #[error("line {line}: invalid key '{key}'")]
    InvalidKey { line: usize, key: String },

    #[error("line {line}: invalid value '{value}'")]
    InvalidValue { line: usize, value: String },
}

impl ParseError {
    /// Zero-based index of the offending line.
    pub fn line(&self) -> usize {
        match self {
            Self::Function { line, .. }
            | Self::MissingSeparator { line }
            | Self::MultipleSeparators { line }
            | Self::InvalidKey { line, .. }
            | Self::InvalidValue { line, .. } => *line,
        }
    }
}

/// Why a line did not contribute to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropReason {
    MissingSeparator,
    InvalidKey,
    UnresolvedValue,
}

/// What the parser did with one line of the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LineOutcome {
    /// A value was computed and stored under `key`.
    Recorded { key: String, steps: Vec<StepOutcome> },
    Dropped { reason: DropReason },
    Blank,
    Boundary,
}

/// Outcome of one header line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineReport {
    /// Zero-based line index.
    pub index: usize,
    #[serde(flatten)]
    pub outcome: LineOutcome,
}
