//! Functions supplied by the host application.

pub mod errors;
pub mod registry;

pub use errors::{FunctionError, str_arg, type_name};
pub use registry::{FlatMatterFn, FnEntry, FunctionRegistry};
