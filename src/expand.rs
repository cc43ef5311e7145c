//! Expansion of flat, separator-delimited keys into nested mappings.
//!
//! A flat mapping such as `{"db.host": "localhost", "db.port": 5432}` becomes
//! `{"db": {"host": "localhost", "port": 5432}}`. Keys sharing a prefix share a
//! single nested node.

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::Error;

/// Separator used by [`array_expand`] and [`Expander::default`].
pub const DEFAULT_SEPARATOR: &str = ".";

/// Expands flat key paths into nested mappings and flattens them back.
///
/// ## Merge policy
///
/// When a key path is assigned more than once, the value already stored at the
/// final segment decides what happens:
///
/// - a sequence has the new value appended (sequences are appended element-wise);
/// - a mapping has a new mapping deep-merged into it, and any other value
///   appended under the next free integer key;
/// - anything else is overwritten, so later scalars win.
///
/// Along the way, an intermediate segment holding a sequence is turned into a
/// mapping keyed by element index, and one holding a scalar is replaced by an
/// empty mapping.
///
/// ## Example
///
/// ```
/// use dragon_helpers::Expander;
/// use serde_json::{json, Value};
///
/// let expanded = Expander::default().expand([
///     ("a.b", json!(1)),
///     ("a.c", json!(2)),
/// ]);
/// assert_eq!(Value::Object(expanded), json!({"a": {"b": 1, "c": 2}}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expander {
    separator: String,
}

impl Default for Expander {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Expander {
    /// Creates an expander splitting keys on `separator`.
    ///
    /// Returns [`Error::EmptySeparator`] for an empty separator.
    pub fn with_separator(separator: impl Into<String>) -> Result<Self, Error> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(Error::EmptySeparator);
        }
        Ok(Self { separator })
    }

    /// Returns the separator used to split and join key paths.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Expands `(key, value)` pairs, in iteration order, into a nested mapping.
    ///
    /// Keys may repeat. The operation never fails: keys are treated
    /// structurally and values opaquely.
    pub fn expand<I, K>(&self, pairs: I) -> Map<String, Value>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut expanded = Map::new();
        let mut assigned = 0usize;

        for (key, value) in pairs {
            self.set_path(&mut expanded, key.as_ref(), value);
            assigned += 1;
        }

        debug!(
            assigned,
            top_level = expanded.len(),
            separator = %self.separator,
            "expanded flat mapping"
        );
        expanded
    }

    /// Assigns `value` at the key path `key` inside an existing nested mapping.
    ///
    /// Empty segments (from an empty key, or leading, trailing or doubled
    /// separators) are kept as empty-string keys.
    pub fn set_path(&self, map: &mut Map<String, Value>, key: &str, value: Value) {
        trace!(key, "assigning key path");
        let segments: Vec<&str> = key.split(self.separator.as_str()).collect();
        assign(map, &segments, value);
    }

    /// Joins nested mapping keys back into flat key paths.
    ///
    /// Sequences, scalars, null and empty mappings are kept as leaf values.
    pub fn flatten(&self, map: &Map<String, Value>) -> Map<String, Value> {
        let mut flat = Map::new();
        flatten_into(&mut flat, None, map, &self.separator);
        flat
    }
}

/// Expands a flat dotted mapping using the default `.` separator.
///
/// ```
/// use dragon_helpers::array_expand;
/// use serde_json::{json, Value};
///
/// let expanded = array_expand([("app.name", json!("demo")), ("debug", json!(true))]);
/// assert_eq!(
///     Value::Object(expanded),
///     json!({"app": {"name": "demo"}, "debug": true})
/// );
/// ```
pub fn array_expand<I, K>(pairs: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, Value)>,
    K: AsRef<str>,
{
    Expander::default().expand(pairs)
}

/// Flattens a nested mapping into dotted keys using the default `.` separator.
pub fn array_flatten(map: &Map<String, Value>) -> Map<String, Value> {
    Expander::default().flatten(map)
}

fn assign(map: &mut Map<String, Value>, path: &[&str], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        match map.get_mut(*first) {
            Some(Value::Array(items)) => append_to_sequence(items, value),
            Some(Value::Object(entries)) => merge_into_mapping(entries, value),
            _ => {
                map.insert((*first).to_string(), value);
            }
        }
        return;
    }

    let node = map
        .entry(*first)
        .or_insert_with(|| Value::Object(Map::new()));

    let replacement = match node {
        Value::Object(_) => None,
        Value::Array(items) => Some(Value::Object(index_keyed(std::mem::take(items)))),
        _ => Some(Value::Object(Map::new())),
    };
    if let Some(replacement) = replacement {
        *node = replacement;
    }

    if let Value::Object(nested) = node {
        assign(nested, rest, value);
    }
}

fn append_to_sequence(items: &mut Vec<Value>, value: Value) {
    match value {
        Value::Array(more) => items.extend(more),
        other => items.push(other),
    }
}

fn merge_into_mapping(entries: &mut Map<String, Value>, value: Value) {
    match value {
        Value::Object(overlay) => deep_merge(entries, overlay),
        Value::Array(more) => {
            for item in more {
                push_indexed(entries, item);
            }
        }
        other => push_indexed(entries, other),
    }
}

/// Stores `value` under the key one past the largest integer key.
///
/// If the largest key is `u64::MAX`, the lowest unused integer key is taken
/// instead, so an existing entry is never overwritten.
fn push_indexed(entries: &mut Map<String, Value>, value: Value) {
    let used: BTreeSet<u64> = entries
        .keys()
        .filter_map(|key| key.parse::<u64>().ok().filter(|n| n.to_string() == *key))
        .collect();

    let next = match used.last() {
        None => 0,
        Some(max) => max.checked_add(1).unwrap_or_else(|| {
            // At most `used.len()` keys are taken, so one of 0..=len is free.
            (0..=used.len() as u64)
                .find(|n| !used.contains(n))
                .unwrap_or_default()
        }),
    };
    entries.insert(next.to_string(), value);
}

fn index_keyed(items: Vec<Value>) -> Map<String, Value> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}

/// Merges `overlay` into `base`: mappings recursively, everything else replaced.
pub(crate) fn deep_merge(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Object(base_map)), Value::Object(overlay_map)) => {
                deep_merge(base_map, overlay_map);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn flatten_into(
    flat: &mut Map<String, Value>,
    prefix: Option<&str>,
    map: &Map<String, Value>,
    separator: &str,
) {
    for (key, value) in map {
        let path = match prefix {
            Some(prefix) => format!("{prefix}{separator}{key}"),
            None => key.clone(),
        };

        match value {
            Value::Object(nested) if !nested.is_empty() => {
                flatten_into(flat, Some(&path), nested, separator);
            }
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }
}
