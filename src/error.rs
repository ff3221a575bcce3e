//! Error types for INI parsing, validation and typed access.
//!
//! Every fallible operation in this crate returns [`Result`], whose error side is the
//! single tagged [`Error`] enum. Callers can match on the variant instead of guessing
//! from a message.
//!
//! ## Error Categories
//!
//! - **Format errors**: the text being parsed violates the INI grammar ([`Error::Format`])
//! - **Validation errors**: a name, path, key, value or comment handed to the mutation API
//!   is unusable ([`Error::InvalidName`], [`Error::InvalidPath`], [`Error::SectionExists`],
//!   [`Error::InvalidKey`], [`Error::InvalidValue`], [`Error::InvalidComment`])
//! - **Conversion errors**: a stored value cannot be read as the requested type
//!   ([`Error::Conversion`])
//! - **I/O errors**: the load/save wrappers could not reach the file or stream ([`Error::Io`])
//!
//! A missing section or key is never an error. Lookups return `Option` and typed
//! getters fall back to the caller's default.
//!
//! ## Examples
//!
//! ```rust
//! use ini_document::{from_str, Error, FormatError};
//!
//! let err = from_str("[A]\nx=1\nx=2").unwrap_err();
//! match err {
//!     Error::Format { line, kind: FormatError::DuplicateKey { .. } } => assert_eq!(line, 3),
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// The ways a line of INI text can violate the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A line starts with `=`.
    #[error("key is empty")]
    EmptyKey,

    /// A `[...]` header has nothing (or only whitespace) between the brackets.
    #[error("section name is empty")]
    EmptySectionName,

    /// A section header repeats an earlier one (names compare case-insensitively).
    #[error("section [{0}] is defined more than once")]
    DuplicateSection(String),

    /// A key is assigned twice within one section.
    #[error("key `{key}` is defined more than once in section [{section}]")]
    DuplicateKey { section: String, key: String },

    /// A key/value line appears before the first section header.
    #[error("key/value pair does not belong to any section")]
    KeyOutsideSection,

    /// A line that is neither a comment, a header nor a `key=value` pair.
    #[error("invalid line `{0}`")]
    InvalidLine(String),

    /// A section or key name contains `[`, `]` or `/`.
    #[error("invalid section or key name `{0}`")]
    InvalidName(String),
}

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Parse-time violation of the INI grammar. Fatal to the whole parse.
    #[error("Invalid INI format at line {line}: {kind}")]
    Format { line: usize, kind: FormatError },

    /// A section or key name is empty, whitespace-only or contains `[`, `]` or `/`.
    #[error("Invalid section or key name: {0:?}")]
    InvalidName(String),

    /// A path expression is not of the form `Section/Key` with two valid names.
    #[error("Invalid path expression: {0:?} (expected `Section/Key`)")]
    InvalidPath(String),

    /// A rename target is already used by a different section.
    #[error("Section {0:?} already exists")]
    SectionExists(String),

    /// A key that would not read back from a `key=value` line as itself: it contains `=`
    /// or a line break, starts with `;` or `#`, or has surrounding whitespace.
    #[error("Key {0:?} cannot be written as `key=value`")]
    InvalidKey(String),

    /// A value with a line break or surrounding whitespace.
    #[error("Value {0:?} cannot be written on a single line")]
    InvalidValue(String),

    /// A comment that does not start with `;` or `#`, spans lines or has surrounding
    /// whitespace.
    #[error("Invalid comment line: {0:?}")]
    InvalidComment(String),

    /// A stored value could not be converted to the requested type.
    #[error("Cannot convert {value:?} to {target}: {msg}")]
    Conversion {
        value: String,
        target: &'static str,
        msg: String,
    },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a format error for the given 1-based line number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_document::{Error, FormatError};
    ///
    /// let err = Error::format(4, FormatError::EmptyKey);
    /// assert!(err.to_string().contains("line 4"));
    /// ```
    pub fn format(line: usize, kind: FormatError) -> Self {
        Error::Format { line, kind }
    }

    /// Creates a conversion error for a value that could not be read as `target`.
    pub fn conversion<T: fmt::Display>(value: &str, target: &'static str, msg: T) -> Self {
        Error::Conversion {
            value: value.to_string(),
            target,
            msg: msg.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the grammar violation if this is a format error.
    #[must_use]
    pub fn format_kind(&self) -> Option<&FormatError> {
        match self {
            Error::Format { kind, .. } => Some(kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }

    /// Returns `true` for errors caused by a write the document refused.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidName(_)
                | Error::InvalidPath(_)
                | Error::SectionExists(_)
                | Error::InvalidKey(_)
                | Error::InvalidValue(_)
                | Error::InvalidComment(_)
        )
    }

    #[must_use]
    pub fn is_conversion(&self) -> bool {
        matches!(self, Error::Conversion { .. })
    }

    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
