//! Errors raised by registered functions.

use serde_json::Value;
use thiserror::Error;

/// Failure reported by a function while computing a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    /// Wrong number of arguments.
    #[error("expected {expected} argument(s), got {found}")]
    Arity { expected: usize, found: usize },

    /// An argument has the wrong type.
    #[error("argument {index} must be {expected}, got {found}")]
    InvalidArgument { index: usize, expected: &'static str, found: String },

    /// Any other failure, described by the function itself.
    #[error("{0}")]
    Message(String),
}

impl FunctionError {
    pub fn message(msg: impl Into<String>) -> Self {
        Self::Message(msg.into())
    }
}

/// Name of the JSON type of `value`, for error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Fetch argument `index` as a string.
pub fn str_arg(args: &[Value], index: usize) -> Result<&str, FunctionError> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(FunctionError::InvalidArgument {
            index,
            expected: "a string",
            found: type_name(other).to_string(),
        }),
        None => Err(FunctionError::Arity { expected: index + 1, found: args.len() }),
    }
}
