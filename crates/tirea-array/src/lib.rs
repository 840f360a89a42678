//! Array helpers for JSON-shaped data.
//!
//! `tirea-array` collects the small, pure utilities used when presenting and
//! editing arrays of JSON items: comparators, shallow equality, nested path
//! discovery, array/object conversion, prefix matching and block moves.
//!
//! # Nested paths
//!
//! The one non-trivial helper walks every item of an array and reports the
//! locations of its properties, sorted by their JSON pointer:
//!
//! ```
//! use serde_json::json;
//! use tirea_array::{get_nested_paths, path};
//!
//! let rows = json!([
//!     {"name": "Alice", "address": {"city": "Rotterdam"}},
//!     {"name": "Bob", "email": "bob@example.com"}
//! ]);
//!
//! let columns = get_nested_paths(&rows, false).unwrap();
//! assert_eq!(
//!     columns,
//!     vec![path!("address", "city"), path!("email"), path!("name")]
//! );
//! ```
//!
//! # Paths and pointers
//!
//! A [`Path`] is a sequence of string segments. Its canonical text form is an
//! RFC 6901 JSON pointer:
//!
//! ```
//! use tirea_array::{compile_pointer, parse_pointer, path};
//!
//! let p = path!("a/b", 0);
//! assert_eq!(compile_pointer(&p), "/a~1b/0");
//! assert_eq!(parse_pointer("/a~1b/0").unwrap(), p);
//! ```
//!
//! # Moving items
//!
//! ```
//! use tirea_array::{move_items, try_move_items};
//!
//! assert_eq!(move_items(&[1, 2, 3, 4, 5], 1, 2, 1), vec![1, 4, 2, 3, 5]);
//! assert!(try_move_items(&[1, 2, 3], 2, 2, 0).is_err());
//! ```

mod compare;
mod convert;
mod error;
mod nested;
mod ops;
mod path;
mod pointer;

pub use compare::{
    compare_arrays, compare_asc, compare_desc, ref_shallow_equal, strict_shallow_equal,
};
pub use convert::{array_to_object, object_to_array, value_array_to_object, value_object_to_array};
pub use error::{value_type_name, ArrayError, ArrayResult};
pub use nested::{
    collect_nested_paths, get_nested_paths, get_nested_paths_with, NestedPathsOptions,
    MAX_ITEM_PATHS_COLLECTION,
};
pub use ops::{
    array_starts_with, array_starts_with_by, for_each_index, limit, move_items, try_move_items,
};
pub use path::Path;
pub use pointer::{compile_pointer, escape_token, parse_pointer, unescape_token};

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
