//! Registry of host-supplied functions.

use std::fmt;

use serde_json::Value;

use super::errors::FunctionError;

/// A function that FlatMatter values can invoke by name.
///
/// In a pipeline the previous result is passed as the first argument,
/// followed by the arguments written in the call.
pub trait FlatMatterFn {
    /// Name used to reference the function, e.g. `to-upper`.
    fn name(&self) -> &str;

    fn compute(&self, args: &[Value]) -> Result<Value, FunctionError>;
}

/// A [`FlatMatterFn`] backed by a closure.
pub struct FnEntry<F> {
    name: String,
    compute: F,
}

impl<F> FnEntry<F>
where
    F: Fn(&[Value]) -> Result<Value, FunctionError>,
{
    pub fn new(name: impl Into<String>, compute: F) -> Self {
        Self { name: name.into(), compute }
    }
}

impl<F> FlatMatterFn for FnEntry<F>
where
    F: Fn(&[Value]) -> Result<Value, FunctionError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, args: &[Value]) -> Result<Value, FunctionError> {
        (self.compute)(args)
    }
}

impl<F> fmt::Debug for FnEntry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEntry").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Ordered collection of functions available to a parse.
///
/// Lookup is linear and the first function registered under a name wins.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: Vec<Box<dyn FlatMatterFn>>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a function. A later function with a duplicate name is shadowed.
    pub fn register(&mut self, function: impl FlatMatterFn + 'static) {
        if self.get(function.name()).is_some() {
            tracing::debug!(name = function.name(), "function shadowed by earlier registration");
        }
        self.functions.push(Box::new(function));
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, function: impl FlatMatterFn + 'static) -> Self {
        self.register(function);
        self
    }

    /// Get the first function registered under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn FlatMatterFn> {
        self.functions.iter().find(|f| f.name() == name).map(|f| f.as_ref())
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.functions.iter().map(|f| f.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry").field("functions", &self.names()).finish()
    }
}

impl FromIterator<Box<dyn FlatMatterFn>> for FunctionRegistry {
    fn from_iter<I: IntoIterator<Item = Box<dyn FlatMatterFn>>>(iter: I) -> Self {
        Self { functions: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn constant(name: &str, value: Value) -> FnEntry<impl Fn(&[Value]) -> Result<Value, FunctionError>> {
        FnEntry::new(name, move |_: &[Value]| Ok(value.clone()))
    }

    #[test]
    fn empty_registry() {
        let registry = FunctionRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("anything").is_none());
    }

    #[test]
    fn lookup_by_exact_name() {
        let registry = FunctionRegistry::new().with(constant("one", json!(1)));
        assert_eq!(registry.get("one").unwrap().compute(&[]), Ok(json!(1)));
        assert!(registry.get("One").is_none());
        assert!(registry.get("on").is_none());
    }

    #[test]
    fn first_registration_wins() {
        let registry = FunctionRegistry::new()
            .with(constant("dup", json!("first")))
            .with(constant("dup", json!("second")));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("dup").unwrap().compute(&[]), Ok(json!("first")));
    }

    #[test]
    fn names_keep_registration_order() {
        let registry = FunctionRegistry::new()
            .with(constant("b", Value::Null))
            .with(constant("a", Value::Null));
        assert_eq!(registry.names(), vec!["b", "a"]);
    }

    #[test]
    fn collects_from_boxed_functions() {
        let boxed: Vec<Box<dyn FlatMatterFn>> =
            vec![Box::new(constant("x", Value::Null)), Box::new(constant("y", Value::Null))];
        let registry: FunctionRegistry = boxed.into_iter().collect();
        assert_eq!(format!("{registry:?}"), r#"FunctionRegistry { functions: ["x", "y"] }"#);
    }
}
