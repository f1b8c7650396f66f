//! FlatMatter documents: boundary scanning, line parsing and tree building.
//!
//! A document looks like:
//!
//! ```text
//! ---
//! title: "Hello"
//! site.posts: "posts" / get-content / (limit 10)
//! ---
//!
//! Body text.
//! ```
//!
//! Header lines map a dotted key to a value (see [`crate::value`]). Text after
//! the second `---` is stored under the reserved `content` key.

pub mod parser;
pub mod scanner;
pub mod tree;
pub mod types;

pub use parser::{FlatMatter, parse};
pub use scanner::{HeaderLine, RawLine, Scan, scan};
pub use tree::{KeyPath, merge};
pub use types::{
    BOUNDARY_MARKER, CONTENT_KEY, DropReason, LineOutcome, LineReport, Matter, MergeStrategy,
    ParseError, ParseOptions,
};
