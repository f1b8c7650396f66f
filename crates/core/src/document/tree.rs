//! Key paths and merging them into the configuration tree.

use std::fmt;

use serde_json::{Map, Value};

use super::types::{Matter, MergeStrategy};

/// Dotted key such as `site.meta.title`, split into its segments.
///
/// Always has at least one segment and no segment is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Parse a dotted key. Returns `None` if any segment is empty.
    pub fn parse(key: &str) -> Option<Self> {
        let segments: Vec<String> = key.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return None;
        }
        Some(Self(segments))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Wrap `value` in nested single-key maps, innermost key first.
    ///
    /// `a.b.c` with `1` gives the entry `("a", {"b": {"c": 1}})`.
    pub fn into_entry(self, value: Value) -> (String, Value) {
        let mut segments = self.0.into_iter();
        // parse() guarantees a first segment.
        let root = segments.next().unwrap_or_default();
        let nested = segments.rev().fold(value, |inner, key| {
            let mut map = Map::new();
            map.insert(key, inner);
            Value::Object(map)
        });
        (root, nested)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Merge one entry into `matter`, returning the updated tree.
pub fn merge(mut matter: Matter, key: String, value: Value, strategy: MergeStrategy) -> Matter {
    if strategy == MergeStrategy::Deep {
        if let Some(existing) = matter.get_mut(&key) {
            deep_merge(existing, value);
            return matter;
        }
    }
    matter.insert(key, value);
    matter
}

fn deep_merge(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(target), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, incoming) => *target = incoming,
    }
}
