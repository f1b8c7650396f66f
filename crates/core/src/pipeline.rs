//! Evaluation of parsed values against a function registry.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::functions::{FunctionError, FunctionRegistry};
use crate::value::ParsedValue;

/// A registered function failed while a value was being computed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("function '{name}' failed: {source}")]
pub struct EvaluationError {
    pub name: String,
    #[source]
    pub source: FunctionError,
}

/// What happened to one step of a pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum StepOutcome {
    /// The function ran and produced `value`.
    Resolved { identifier: String, value: Value },
    /// No function is registered under `identifier`; the running value
    /// passed through unchanged.
    Skipped { identifier: String },
}

impl StepOutcome {
    pub fn identifier(&self) -> &str {
        match self {
            Self::Resolved { identifier, .. } | Self::Skipped { identifier } => identifier,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Final value of a line plus the outcome of each step.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: Value,
    pub steps: Vec<StepOutcome>,
}

/// Run the steps of `parsed` left to right.
///
/// The running value starts as the seed (null when absent). Each function
/// receives the running value as its first argument unless it is null,
/// followed by the step's own arguments, and its result becomes the new
/// running value.
pub fn evaluate(
    parsed: ParsedValue,
    registry: &FunctionRegistry,
) -> Result<Evaluation, EvaluationError> {
    let mut current = parsed.seed.map_or(Value::Null, Value::from);
    let mut outcomes = Vec::with_capacity(parsed.steps.len());

    for step in parsed.steps {
        let Some(function) = registry.get(&step.identifier) else {
            tracing::debug!(identifier = %step.identifier, "skipping unknown function");
            outcomes.push(StepOutcome::Skipped { identifier: step.identifier });
            continue;
        };

        let mut args = Vec::with_capacity(step.args.len() + 1);
        if !current.is_null() {
            args.push(std::mem::take(&mut current));
        }
        args.extend(step.args.into_iter().map(Value::from));

        current = function
            .compute(&args)
            .map_err(|source| EvaluationError { name: step.identifier.clone(), source })?;

        tracing::trace!(identifier = %step.identifier, value = %current, "step resolved");
        outcomes.push(StepOutcome::Resolved { identifier: step.identifier, value: current.clone() });
    }

    Ok(Evaluation { value: current, steps: outcomes })
}
