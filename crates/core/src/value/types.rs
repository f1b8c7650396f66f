//! Intermediate forms produced by the value grammar.

use serde::Serialize;
use serde_json::{Number, Value};

/// A literal value as written in the source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::String(s) => Value::String(s),
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Integer(i) => Value::Number(i.into()),
            // Non-finite floats have no JSON form.
            Scalar::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        }
    }
}

/// One function invocation inside a value.
///
/// A bare reference such as `to-upper` has no arguments; a call such as
/// `(limit 10)` carries its parsed argument list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputeStep {
    pub identifier: String,
    pub args: Vec<Scalar>,
}

impl ComputeStep {
    /// A step referring to a function by name, without arguments.
    pub fn reference(identifier: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), args: Vec::new() }
    }

    pub fn call(identifier: impl Into<String>, args: Vec<Scalar>) -> Self {
        Self { identifier: identifier.into(), args }
    }
}

/// The right-hand side of a line, before evaluation.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParsedValue {
    /// Initial value; absent when the value starts with a function.
    pub seed: Option<Scalar>,
    /// Functions applied left to right.
    pub steps: Vec<ComputeStep>,
}

impl ParsedValue {
    pub fn literal(seed: Scalar) -> Self {
        Self { seed: Some(seed), steps: Vec::new() }
    }

    pub fn computed(steps: Vec<ComputeStep>) -> Self {
        Self { seed: None, steps }
    }
}

/// What kind of value a piece of text holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Literal,
    FunctionCall,
    Pipeline,
    Invalid,
}
