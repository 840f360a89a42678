//! Enumerate the nested property paths found in the items of a JSON array.
//!
//! This is what a table view uses to derive its columns: every item is
//! walked, every leaf location is recorded, and the union is returned as a
//! sorted, de-duplicated list of [`Path`]s.
//!
//! # Walk rules
//!
//! - Scalars (`null`, booleans, numbers, strings) always report their path.
//!   A scalar item at the top level reports the empty path.
//! - Objects are descended into, one segment per key.
//! - Arrays inside an item are opaque: they are never descended into.
//! - With [`NestedPathsOptions::include_objects`], every object and array
//!   below the item root also reports its own path.
//!
//! Only the first [`NestedPathsOptions::max_items`] items are inspected.

use crate::error::value_type_name;
use crate::{ArrayError, ArrayResult, Path};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Default number of items inspected by [`get_nested_paths`].
pub const MAX_ITEM_PATHS_COLLECTION: usize = 10_000;

/// Options for nested path enumeration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedPathsOptions {
    /// Also report the paths of nested objects and arrays, not only leaves.
    pub include_objects: bool,
    /// Items beyond this count are ignored.
    pub max_items: usize,
}

impl Default for NestedPathsOptions {
    fn default() -> Self {
        Self {
            include_objects: false,
            max_items: MAX_ITEM_PATHS_COLLECTION,
        }
    }
}

impl NestedPathsOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether object and array paths are reported.
    #[must_use]
    pub fn with_include_objects(mut self, include_objects: bool) -> Self {
        self.include_objects = include_objects;
        self
    }

    /// Set the maximum number of items to inspect.
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }
}

/// Get the paths of all nested properties in the items of a JSON array.
///
/// Fails with [`ArrayError::InvalidArgument`] when `array` is not a JSON
/// array.
///
/// ```
/// use serde_json::json;
/// use tirea_array::{get_nested_paths, path};
///
/// let items = json!([{"a": 1, "b": {"c": 2}}]);
/// assert_eq!(
///     get_nested_paths(&items, false).unwrap(),
///     vec![path!("a"), path!("b", "c")]
/// );
/// assert_eq!(
///     get_nested_paths(&items, true).unwrap(),
///     vec![path!("a"), path!("b"), path!("b", "c")]
/// );
/// ```
pub fn get_nested_paths(array: &Value, include_objects: bool) -> ArrayResult<Vec<Path>> {
    get_nested_paths_with(
        array,
        &NestedPathsOptions::default().with_include_objects(include_objects),
    )
}

/// Like [`get_nested_paths`], with explicit options.
pub fn get_nested_paths_with(
    array: &Value,
    options: &NestedPathsOptions,
) -> ArrayResult<Vec<Path>> {
    match array {
        Value::Array(items) => Ok(collect_nested_paths(items, options)),
        other => Err(ArrayError::invalid_argument(format!(
            "array expected, found {}",
            value_type_name(other)
        ))),
    }
}

/// Collect nested paths from a slice of items.
///
/// The result is sorted by pointer string, comparing UTF-16 code units,
/// and contains no duplicates.
pub fn collect_nested_paths(items: &[Value], options: &NestedPathsOptions) -> Vec<Path> {
    if items.len() > options.max_items {
        tracing::debug!(
            total = items.len(),
            max_items = options.max_items,
            "nested path collection truncated"
        );
    }

    // Keyed by pointer string for dedup.
    let mut found: BTreeMap<String, Path> = BTreeMap::new();
    let mut path = Path::root();
    for item in items.iter().take(options.max_items) {
        walk(item, &mut path, options.include_objects, &mut found);
    }

    tracing::trace!(paths = found.len(), "nested paths collected");

    // Pointers are ordered by UTF-16 code units, not UTF-8 bytes. The two
    // disagree once keys mix astral characters with U+E000..=U+FFFF.
    let mut sorted: Vec<(String, Path)> = found.into_iter().collect();
    sorted.sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
    sorted.into_iter().map(|(_, path)| path).collect()
}

fn walk(
    node: &Value,
    path: &mut Path,
    include_objects: bool,
    found: &mut BTreeMap<String, Path>,
) {
    let is_leaf = !matches!(node, Value::Array(_) | Value::Object(_));
    if is_leaf || (include_objects && !path.is_empty()) {
        found
            .entry(path.to_pointer())
            .or_insert_with(|| path.clone());
    }

    if let Value::Object(map) = node {
        for (key, child) in map {
            path.push(key.as_str());
            walk(child, path, include_objects, found);
            path.pop();
        }
    }
}
