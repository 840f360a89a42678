//! Path representation for locating values inside nested JSON items.
//!
//! A path is an ordered sequence of string segments. Object keys are used
//! verbatim; array positions are stored as their decimal string form, so
//! `["items", "0", "name"]` addresses `items[0].name`.

use crate::pointer::compile_pointer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A location inside a JSON value, as a sequence of string segments.
///
/// Paths are compared and ordered segment by segment. The canonical string
/// form is the JSON pointer produced by [`compile_pointer`], which is also
/// what [`fmt::Display`] writes.
///
/// # Examples
///
/// ```
/// use tirea_array::Path;
///
/// let path = Path::root().key("users").index(0).key("name");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "/users/0/name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<String>);

impl Path {
    /// Create an empty path (root).
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty path (alias for `new`).
    #[inline]
    pub fn root() -> Self {
        Self::new()
    }

    /// Create a path from a vector of segments.
    #[inline]
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Append a key segment and return self (builder pattern).
    #[inline]
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(k.into());
        self
    }

    /// Append an array position and return self (builder pattern).
    #[inline]
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(i.to_string());
        self
    }

    /// Push a segment onto the path (mutating).
    #[inline]
    pub fn push(&mut self, seg: impl Into<String>) {
        self.0.push(seg.into());
    }

    /// Pop the last segment from the path.
    #[inline]
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Consume the path and return its segments.
    #[inline]
    pub fn into_segments(self) -> Vec<String> {
        self.0
    }

    /// Check if this path is empty (root).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of segments in this path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the last segment.
    #[inline]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Append a segment and return a new path (non-mutating builder).
    #[inline]
    pub fn with_segment(&self, seg: impl Into<String>) -> Path {
        let mut result = self.clone();
        result.0.push(seg.into());
        result
    }

    /// Get the parent path (path without the last segment).
    #[inline]
    pub fn parent(&self) -> Option<Path> {
        if self.0.is_empty() {
            None
        } else {
            let mut p = self.clone();
            p.pop();
            Some(p)
        }
    }

    /// Check if this path starts with another path.
    ///
    /// ```
    /// use tirea_array::path;
    ///
    /// let parent = path!("user");
    /// let child = path!("user", "name");
    ///
    /// assert!(child.starts_with(&parent));
    /// assert!(!parent.starts_with(&child));
    /// assert!(parent.starts_with(&parent));
    /// ```
    #[inline]
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Compile this path into its JSON pointer string.
    #[inline]
    pub fn to_pointer(&self) -> String {
        compile_pointer(self)
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&compile_pointer(self))
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Path {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Path(segments)
    }
}

/// Construct a `Path` from a sequence of segments.
///
/// Every segment is converted with `ToString`, so numbers become their
/// decimal form.
///
/// # Examples
///
/// ```
/// use tirea_array::path;
///
/// let p = path!("items", 0, "name");
/// assert_eq!(p.segments(), ["items", "0", "name"]);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push(::std::string::ToString::to_string(&$seg));
        )+
        p
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_construction() {
        let path = Path::root().key("users").index(0).key("name");
        assert_eq!(path.len(), 3);
        assert_eq!(&path[0], "users");
        assert_eq!(&path[1], "0");
        assert_eq!(&path[2], "name");
    }

    #[test]
    fn test_path_display_is_pointer() {
        let path = Path::root().key("a/b").key("c~d");
        assert_eq!(format!("{}", path), "/a~1b/c~0d");
        assert_eq!(Path::root().to_string(), "");
    }

    #[test]
    fn test_path_macro() {
        let p = path!("users", 0, "name");
        assert_eq!(p, Path::root().key("users").index(0).key("name"));
        assert!(path!().is_empty());
    }

    #[test]
    fn test_path_parent() {
        let path = path!("a", "b");
        assert_eq!(path.parent(), Some(path!("a")));
        assert_eq!(Path::root().parent(), None);
    }

    #[test]
    fn test_path_serde() {
        let path = path!("users", 0);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["users","0"]"#);
        let parsed: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, parsed);
    }

    #[test]
    fn test_path_collect() {
        let p: Path = ["x", "y"].into_iter().collect();
        assert_eq!(p.iter().collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
