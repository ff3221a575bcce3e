//! Configuration options for INI rendering.
//!
//! This module provides types to customize the text produced by the serializer:
//!
//! - [`IniOptions`]: Main configuration struct
//! - [`LineEnding`]: The terminator used for every emitted line
//!
//! ## Examples
//!
//! ```rust
//! use ini_document::{from_str, to_string_with_options, IniOptions, LineEnding};
//!
//! let doc = from_str("; generated\n[A]\nx=1\n[B]\ny=2").unwrap();
//!
//! // No blank lines, no comments
//! let options = IniOptions::compact().with_comments(false);
//! assert_eq!(to_string_with_options(&doc, &options), "[A]\nx=1\n[B]\ny=2\n");
//!
//! // Windows line endings
//! let options = IniOptions::new().with_line_ending(LineEnding::CrLf);
//! assert!(to_string_with_options(&doc, &options).contains("[A]\r\n"));
//! ```

/// Line terminator for rendered output.
///
/// # Examples
///
/// ```rust
/// use ini_document::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration options for INI rendering.
///
/// The defaults separate sections with a blank line and keep all comments.
///
/// # Examples
///
/// ```rust
/// use ini_document::{IniOptions, LineEnding};
///
/// let options = IniOptions::new();
/// assert!(options.blank_line_between_sections);
/// assert!(options.include_comments);
/// assert_eq!(options.line_ending, LineEnding::Lf);
///
/// let options = IniOptions::compact();
/// assert!(!options.blank_line_between_sections);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IniOptions {
    /// Emit one empty line before every section except the first line of output.
    pub blank_line_between_sections: bool,
    /// Emit document and section comments.
    pub include_comments: bool,
    pub line_ending: LineEnding,
}

impl Default for IniOptions {
    fn default() -> Self {
        IniOptions {
            blank_line_between_sections: true,
            include_comments: true,
            line_ending: LineEnding::default(),
        }
    }
}

impl IniOptions {
    /// Creates default options (blank line between sections, comments included, `\n`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options without blank lines between sections.
    #[must_use]
    pub fn compact() -> Self {
        IniOptions {
            blank_line_between_sections: false,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_blank_line_between_sections(mut self, enabled: bool) -> Self {
        self.blank_line_between_sections = enabled;
        self
    }

    /// Sets whether comments are written.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_document::IniOptions;
    ///
    /// let options = IniOptions::new().with_comments(false);
    /// assert!(!options.include_comments);
    /// ```
    #[must_use]
    pub fn with_comments(mut self, enabled: bool) -> Self {
        self.include_comments = enabled;
        self
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}
