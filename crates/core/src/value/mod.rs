//! The FlatMatter value grammar.
//!
//! A value is one of:
//! - a literal: `"a string"`, `true`, `false`, `12345`, `123.45`
//! - a function call: `to-upper` or `(limit 10)`
//! - a pipeline of the above joined by ` / `, where each function receives
//!   the previous result as its first argument
//!
//! [`resolve`] turns the raw text into a [`ParsedValue`] that the
//! [`pipeline`](crate::pipeline) evaluator consumes.

pub mod call;
pub mod grammar;
pub mod literal;
pub mod split;
pub mod types;

pub use call::{is_function_call, parse_function_call};
pub use grammar::{classify, is_pipeline, resolve};
pub use literal::{is_literal, parse_literal};
pub use split::split;
pub use types::{ComputeStep, ParsedValue, Scalar, ValueKind};
