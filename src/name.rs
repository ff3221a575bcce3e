//! Name validation and `Section/Key` path expressions.
//!
//! [`is_valid_name`] is the public predicate. The crate-private `validate_*` helpers
//! add what the line format needs on top of it, so that everything stored in a
//! document renders back to the same document.

use crate::{Error, Result};

/// Characters that may never appear in a section or key name.
const RESERVED: [char; 3] = ['[', ']', '/'];
const LINE_BREAKS: [char; 2] = ['\r', '\n'];
const COMMENT_MARKERS: [char; 2] = [';', '#'];

/// Returns `true` if `name` can be used as a section or key name.
///
/// A valid name is not empty, not whitespace-only, and contains none of `[`, `]` or `/`.
///
/// # Examples
///
/// ```rust
/// use ini_document::is_valid_name;
///
/// assert!(is_valid_name("Server"));
/// assert!(is_valid_name("max connections"));
/// assert!(!is_valid_name("   "));
/// assert!(!is_valid_name("a/b"));
/// assert!(!is_valid_name("[x]"));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains(RESERVED)
}

/// Fails with [`Error::InvalidName`] unless [`is_valid_name`] accepts `name`.
pub(crate) fn validate(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(Error::InvalidName(name.to_string()))
    }
}

/// A section name must also fit on its `[name]` header line.
pub(crate) fn validate_section_name(name: &str) -> Result<()> {
    validate(name)?;
    if name.contains(LINE_BREAKS) {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

/// A key must come back unchanged from the left side of a `key=value` line.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    validate(key)?;
    if key.contains(LINE_BREAKS)
        || key.contains('=')
        || key.starts_with(COMMENT_MARKERS)
        || key.trim() != key
    {
        return Err(Error::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Values are single-line and trimmed, as the parser would produce them.
pub(crate) fn validate_value(value: &str) -> Result<()> {
    if value.contains(LINE_BREAKS) || value.trim() != value {
        return Err(Error::InvalidValue(value.to_string()));
    }
    Ok(())
}

/// Comments are stored with their marker, one line each.
pub(crate) fn validate_comment(comment: &str) -> Result<()> {
    if !comment.starts_with(COMMENT_MARKERS)
        || comment.contains(LINE_BREAKS)
        || comment.trim() != comment
    {
        return Err(Error::InvalidComment(comment.to_string()));
    }
    Ok(())
}

/// A parsed `Section/Key` path expression.
///
/// # Examples
///
/// ```rust
/// use ini_document::KeyPath;
///
/// let path = KeyPath::parse("Server/Port").unwrap();
/// assert_eq!(path.section, "Server");
/// assert_eq!(path.key, "Port");
///
/// assert!(KeyPath::parse("Server").is_err());
/// assert!(KeyPath::parse("a/b/c").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPath<'a> {
    pub section: &'a str,
    pub key: &'a str,
}

impl<'a> KeyPath<'a> {
    /// Splits `path` on `/` into exactly two valid names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the expression does not have exactly two
    /// segments or either segment is not a valid name.
    pub fn parse(path: &'a str) -> Result<Self> {
        let mut parts = path.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(section), Some(key), None) if is_valid_name(section) && is_valid_name(key) => {
                Ok(KeyPath { section, key })
            }
            _ => Err(Error::InvalidPath(path.to_string())),
        }
    }
}
