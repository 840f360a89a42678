//! JSON pointer (RFC 6901) encoding for [`Path`].
//!
//! A pointer is either the empty string (the root) or a sequence of
//! `/`-prefixed tokens, where `~` is written as `~0` and `/` as `~1`.
//! [`compile_pointer`] and [`parse_pointer`] are inverses of each other.

use crate::{ArrayError, ArrayResult, Path};
use jsonptr::{Pointer, PointerBuf, Token};

/// Escape a single path segment for use as a pointer token.
pub fn escape_token(segment: &str) -> String {
    Token::new(segment).encoded().to_owned()
}

/// Decode a single pointer token back into a path segment.
///
/// Returns `None` when the token contains a `~` that is not followed by
/// `0` or `1`.
pub fn unescape_token(token: &str) -> Option<String> {
    Token::from_encoded(token)
        .ok()
        .map(|t| t.decoded().into_owned())
}

/// Compile a path into its pointer string.
///
/// ```
/// use tirea_array::{compile_pointer, path};
///
/// assert_eq!(compile_pointer(&path!("a", "b/c", 0)), "/a/b~1c/0");
/// assert_eq!(compile_pointer(&path!()), "");
/// ```
pub fn compile_pointer(path: &Path) -> String {
    PointerBuf::from_tokens(path.iter()).as_str().to_owned()
}

/// Parse a pointer string into a path.
///
/// ```
/// use tirea_array::{parse_pointer, path};
///
/// assert_eq!(parse_pointer("/a/b~1c/0").unwrap(), path!("a", "b/c", 0));
/// assert!(parse_pointer("a").is_err());
/// ```
pub fn parse_pointer(pointer: &str) -> ArrayResult<Path> {
    let parsed = Pointer::parse(pointer)
        .map_err(|err| ArrayError::invalid_pointer(pointer, err.to_string()))?;
    Ok(parsed
        .tokens()
        .map(|token| token.decoded().into_owned())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn test_escape_token() {
        assert_eq!(escape_token("plain"), "plain");
        assert_eq!(escape_token("a/b"), "a~1b");
        assert_eq!(escape_token("a~b"), "a~0b");
        // "~1" literal must not decode as "/"
        assert_eq!(escape_token("~1"), "~01");
    }

    #[test]
    fn test_unescape_token() {
        assert_eq!(unescape_token("a~1b").unwrap(), "a/b");
        assert_eq!(unescape_token("a~0b").unwrap(), "a~b");
        assert_eq!(unescape_token("~01").unwrap(), "~1");
        assert!(unescape_token("a~2").is_none());
        assert!(unescape_token("trailing~").is_none());
    }

    #[test]
    fn test_compile_pointer() {
        assert_eq!(compile_pointer(&Path::root()), "");
        assert_eq!(compile_pointer(&path!("")), "/");
        assert_eq!(compile_pointer(&path!("a", "", "b")), "/a//b");
        assert_eq!(compile_pointer(&path!("m~n", "x/y")), "/m~0n/x~1y");
    }

    #[test]
    fn test_parse_pointer() {
        assert_eq!(parse_pointer("").unwrap(), Path::root());
        assert_eq!(parse_pointer("/").unwrap(), path!(""));
        assert_eq!(parse_pointer("/a//b").unwrap(), path!("a", "", "b"));
        assert_eq!(parse_pointer("/m~0n/x~1y").unwrap(), path!("m~n", "x/y"));
    }

    #[test]
    fn test_parse_pointer_errors() {
        let err = parse_pointer("no-slash").unwrap_err();
        assert!(matches!(
            &err,
            ArrayError::InvalidPointer { pointer, .. } if pointer == "no-slash"
        ));
        assert!(matches!(
            parse_pointer("/bad~escape"),
            Err(ArrayError::InvalidPointer { .. })
        ));
    }

    #[test]
    fn test_round_trip_awkward_segments() {
        let original = path!("~", "/", "~0", "~1", "", "0");
        let pointer = compile_pointer(&original);
        assert_eq!(pointer, "/~0/~1/~00/~01//0");
        assert_eq!(parse_pointer(&pointer).unwrap(), original);
    }
}
