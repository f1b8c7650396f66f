//! FlatMatter: a flat, line-oriented front-matter dialect.
//!
//! Each header line maps a dotted key to a value. Values are literals,
//! calls to host-supplied functions, or ` / `-separated pipelines where each
//! function receives the previous result as its first argument.
//!
//! ```
//! use flatmatter_core::functions::{FnEntry, FunctionRegistry, str_arg};
//! use serde_json::{Value, json};
//!
//! let functions = FunctionRegistry::new().with(FnEntry::new("to-upper", |args: &[Value]| {
//!     Ok(Value::String(str_arg(args, 0)?.to_uppercase()))
//! }));
//!
//! let matter = flatmatter_core::parse("site.title: \"blog\" / to-upper", &functions).unwrap();
//! assert_eq!(Value::Object(matter), json!({"site": {"title": "BLOG"}}));
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod document;
pub mod functions;
pub mod pipeline;
pub mod serializer;
pub mod value;

pub use document::{FlatMatter, Matter, MergeStrategy, ParseError, ParseOptions, parse};
pub use functions::{FlatMatterFn, FnEntry, FunctionError, FunctionRegistry};
pub use serializer::{SerializeError, Serializer, ToJson, ToObject, ToYaml};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
