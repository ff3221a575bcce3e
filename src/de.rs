//! INI parsing.
//!
//! This module provides the [`Parser`] that turns INI text into a [`Document`], and the
//! serde `Deserialize` implementation that lets a document be read from a string field.
//!
//! ## Overview
//!
//! - **Single pass**: lines are consumed in order with one current-section cursor
//! - **Strict**: the first malformed line aborts the parse with [`Error::Format`]
//! - **Comment capture**: `;` and `#` lines attach to the open section, or to the
//!   document when no section has been opened yet
//! - **Total replacement**: every parse produces a fresh document; there is no merge mode
//!
//! ## Grammar
//!
//! Each line is trimmed, then classified by its first character:
//!
//! | Line | Meaning |
//! |------|---------|
//! | empty | skipped |
//! | `;...` or `#...` | comment, kept verbatim |
//! | `=...` | error: empty key |
//! | `[name]...` | section header, name kept as written; text after `]` is ignored |
//! | `key=value` | pair, split on the first `=` only |
//! | anything else | error: invalid line |
//!
//! ## Usage
//!
//! ```rust
//! use ini_document::from_str;
//!
//! let doc = from_str("[Auth]\ntoken = YWJj==\n").unwrap();
//! assert_eq!(doc.get("auth", "token"), Some("YWJj=="));
//! ```

use crate::error::FormatError;
use crate::map::NameMap;
use crate::name::is_valid_name;
use crate::{Document, Error, Result, Section};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::fmt;
use tracing::{debug, trace};

const UTF8_BOM: &str = "\u{feff}";

/// Line-oriented INI parser.
///
/// Feed lines with [`Parser::parse_line`] and collect the result with
/// [`Parser::finish`], or use [`from_str`] / [`from_lines`] for the whole pass.
///
/// # Examples
///
/// ```rust
/// use ini_document::Parser;
///
/// let mut parser = Parser::new();
/// for line in ["# defaults", "[Log]", "level = debug"] {
///     parser.parse_line(line).unwrap();
/// }
/// let doc = parser.finish();
/// assert_eq!(doc.comments(), ["# defaults"]);
/// assert_eq!(doc.get("Log", "Level"), Some("debug"));
/// ```
#[derive(Debug, Default)]
pub struct Parser {
    document: Document,
    /// The open section; moved into `document` when the next header or the end arrives.
    current: Option<Section>,
    /// Names of every section opened so far, for duplicate detection.
    seen: NameMap<()>,
    line: usize,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the 1-based number of the last line consumed.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Consumes one line of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the line violates the INI grammar. The parser must
    /// not be used after an error.
    pub fn parse_line(&mut self, raw: &str) -> Result<()> {
        self.line += 1;
        let line = raw.trim();

        if line.is_empty() {
            return Ok(());
        }

        // Only reachable through `from_lines` or a lone `\r`; `str::lines` splits the rest.
        if line.contains(['\r', '\n']) {
            return Err(self.error(FormatError::InvalidLine(line.to_string())));
        }

        if line.starts_with(';') || line.starts_with('#') {
            return match self.current.as_mut() {
                Some(section) => section.push_comment(line),
                None => self.document.push_comment(line),
            };
        }

        if line.starts_with('=') {
            return Err(self.error(FormatError::EmptyKey));
        }

        if line.starts_with('[') {
            return self.open_section(line);
        }

        self.parse_pair(line)
    }

    /// Returns the parsed document.
    #[must_use]
    pub fn finish(mut self) -> Document {
        self.close_section();
        debug!(
            sections = self.document.len(),
            comments = self.document.comments().len(),
            lines = self.line,
            "parsed INI document"
        );
        self.document
    }

    fn error(&self, kind: FormatError) -> Error {
        Error::format(self.line, kind)
    }

    fn close_section(&mut self) {
        if let Some(section) = self.current.take() {
            self.document.insert_section(section);
        }
    }

    fn open_section(&mut self, line: &str) -> Result<()> {
        let name = header_name(line);
        if name.trim().is_empty() {
            return Err(self.error(FormatError::EmptySectionName));
        }
        if !is_valid_name(name) {
            return Err(self.error(FormatError::InvalidName(name.to_string())));
        }
        if self.seen.contains(name) {
            return Err(self.error(FormatError::DuplicateSection(name.to_string())));
        }

        let section = Section::new(name)
            .map_err(|_| self.error(FormatError::InvalidName(name.to_string())))?;
        trace!(section = name, line = self.line, "opened section");
        self.close_section();
        self.seen.insert(name, ());
        self.current = Some(section);
        Ok(())
    }

    fn parse_pair(&mut self, line: &str) -> Result<()> {
        let line_no = self.line;
        let Some(section) = self.current.as_mut() else {
            return Err(Error::format(line_no, FormatError::KeyOutsideSection));
        };

        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::format(line_no, FormatError::InvalidLine(line.to_string())));
        };
        let (key, value) = (key.trim(), value.trim());

        if !is_valid_name(key) {
            return Err(Error::format(line_no, FormatError::InvalidName(key.to_string())));
        }
        if section.contains_key(key) {
            return Err(Error::format(
                line_no,
                FormatError::DuplicateKey {
                    section: section.name().to_string(),
                    key: key.to_string(),
                },
            ));
        }

        section.set(key, value)?;
        Ok(())
    }
}

/// Returns the text strictly between the first `[` and the next `]` after it.
///
/// A header without a closing bracket yields an empty name.
fn header_name(line: &str) -> &str {
    let Some(open) = line.find('[') else {
        return "";
    };
    let rest = &line[open + 1..];
    match rest.find(']') {
        Some(close) => &rest[..close],
        None => "",
    }
}

/// Parses a sequence of already-decoded lines into a [`Document`].
///
/// # Errors
///
/// Returns [`Error::Format`] for the first line that violates the INI grammar.
pub fn from_lines<I, S>(lines: I) -> Result<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new();
    for line in lines {
        parser.parse_line(line.as_ref())?;
    }
    Ok(parser.finish())
}

/// Parses INI text into a [`Document`]. Both `\n` and `\r\n` line endings are accepted,
/// and a leading UTF-8 byte order mark is skipped.
///
/// # Errors
///
/// Returns [`Error::Format`] for the first line that violates the INI grammar.
pub fn from_str(text: &str) -> Result<Document> {
    from_lines(text.strip_prefix(UTF8_BOM).unwrap_or(text).lines())
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = Document;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of INI text")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                from_str(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DocumentVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_error(text: &str) -> (usize, FormatError) {
        match from_str(text) {
            Err(Error::Format { line, kind }) => (line, kind),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_scenario() {
        let doc = from_str("; top comment\n[A]\nk1=v1\nk2=v2=x\n[B]\nk3 = v3\n").unwrap();
        assert_eq!(doc.comments(), ["; top comment"]);
        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["A", "B"]);
        let a: Vec<_> = doc.section("A").unwrap().iter().collect();
        assert_eq!(a, vec![("k1", "v1"), ("k2", "v2=x")]);
        assert_eq!(doc.get("B", "k3"), Some("v3"));
    }

    #[test]
    fn test_first_equals_wins() {
        let doc = from_str("[S]\nkey=a=b=c").unwrap();
        assert_eq!(doc.get("S", "key"), Some("a=b=c"));
    }

    #[test]
    fn test_empty_value_allowed() {
        let doc = from_str("[S]\nkey=\nother =   ").unwrap();
        assert_eq!(doc.get("S", "key"), Some(""));
        assert_eq!(doc.get("S", "other"), Some(""));
    }

    #[test]
    fn test_comments_attach_to_open_section() {
        let doc = from_str("# doc\n[A]\n; about a\nx=1\n# more a\n[B]\n;b").unwrap();
        assert_eq!(doc.comments(), ["# doc"]);
        assert_eq!(doc.section("A").unwrap().comments(), ["; about a", "# more a"]);
        assert_eq!(doc.section("B").unwrap().comments(), [";b"]);
    }

    #[test]
    fn test_comment_lines_are_not_validated() {
        let doc = from_str("; [not a section]\n# =x\n[S]\n; a/b=[c]").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.comments().len(), 2);
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let doc = from_str("\n   \n  [Padded]  \n\t key \t=\t value \t\n\n").unwrap();
        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["Padded"]);
        assert_eq!(doc.get("padded", "KEY"), Some("value"));
    }

    #[test]
    fn test_header_name_is_kept_as_written() {
        let doc = from_str("[ A ]\nk=1\n[A]\nk=2").unwrap();
        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec![" A ", "A"]);
        assert_eq!(doc.get(" a ", "k"), Some("1"));
        assert_eq!(doc.get("a", "k"), Some("2"));
        assert_eq!(doc.render(false, true), "[ A ]\nk=1\n[A]\nk=2\n");
    }

    #[test]
    fn test_crlf_input() {
        let doc = from_str("[A]\r\nx=1\r\ny=2\r\n").unwrap();
        assert_eq!(doc.get("A", "y"), Some("2"));
    }

    #[test]
    fn test_text_after_header_is_ignored() {
        let doc = from_str("[Main] trailing words\nx=1").unwrap();
        assert_eq!(doc.get("Main", "x"), Some("1"));
    }

    #[test]
    fn test_empty_section_is_kept() {
        let doc = from_str("[Empty]\n[Full]\nx=1").unwrap();
        assert_eq!(doc.len(), 2);
        assert!(doc.section("Empty").unwrap().is_empty());
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(format_error("[S]\n=value"), (2, FormatError::EmptyKey));
        assert_eq!(format_error("[S]\n  = value"), (2, FormatError::EmptyKey));
    }

    #[test]
    fn test_embedded_line_breaks() {
        assert_eq!(
            from_lines(["[A]", "k=line1\nline2"]).unwrap_err(),
            Error::format(2, FormatError::InvalidLine("k=line1\nline2".to_string()))
        );
        assert_eq!(
            format_error("[A]\n; a\rb"),
            (2, FormatError::InvalidLine("; a\rb".to_string()))
        );
    }

    #[test]
    fn test_byte_order_mark() {
        let doc = from_str("\u{feff}[A]\nx=1").unwrap();
        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["A"]);

        let doc: Document = serde_json::from_str("\"\u{feff}; c\\n[A]\"").unwrap();
        assert_eq!(doc.comments(), ["; c"]);
    }

    #[test]
    fn test_empty_section_name() {
        assert_eq!(format_error("[]"), (1, FormatError::EmptySectionName));
        assert_eq!(format_error("[   ]"), (1, FormatError::EmptySectionName));
        assert_eq!(format_error("[Unclosed"), (1, FormatError::EmptySectionName));
    }

    #[test]
    fn test_invalid_section_name() {
        assert_eq!(
            format_error("[a/b]"),
            (1, FormatError::InvalidName("a/b".to_string()))
        );
        assert_eq!(
            format_error("[[nested]]"),
            (1, FormatError::InvalidName("[nested".to_string()))
        );
    }

    #[test]
    fn test_duplicate_section() {
        assert_eq!(
            format_error("[Foo]\nx=1\n[foo]"),
            (3, FormatError::DuplicateSection("foo".to_string()))
        );
    }

    #[test]
    fn test_duplicate_key() {
        assert_eq!(
            format_error("[Foo]\nx=1\nX=2"),
            (
                3,
                FormatError::DuplicateKey {
                    section: "Foo".to_string(),
                    key: "X".to_string()
                }
            )
        );
    }

    #[test]
    fn test_same_key_in_different_sections() {
        let doc = from_str("[A]\nx=1\n[B]\nx=2").unwrap();
        assert_eq!(doc.get("A", "x"), Some("1"));
        assert_eq!(doc.get("B", "x"), Some("2"));
    }

    #[test]
    fn test_key_outside_section() {
        assert_eq!(format_error("x=1\n[A]"), (1, FormatError::KeyOutsideSection));
        assert_eq!(format_error("; c\nloose"), (2, FormatError::KeyOutsideSection));
    }

    #[test]
    fn test_invalid_line() {
        assert_eq!(
            format_error("[A]\nno separator here"),
            (2, FormatError::InvalidLine("no separator here".to_string()))
        );
    }

    #[test]
    fn test_invalid_key_name() {
        assert_eq!(
            format_error("[A]\npath/like=1"),
            (2, FormatError::InvalidName("path/like".to_string()))
        );
    }

    #[test]
    fn test_empty_input() {
        let doc = from_str("").unwrap();
        assert!(doc.is_empty());
        assert!(doc.comments().is_empty());
    }

    #[test]
    fn test_from_lines() {
        let lines = vec!["[A]".to_string(), "x = 1".to_string()];
        let doc = from_lines(&lines).unwrap();
        assert_eq!(doc.get("A", "x"), Some("1"));
    }

    #[test]
    fn test_parser_tracks_lines() {
        let mut parser = Parser::new();
        parser.parse_line("[A]").unwrap();
        parser.parse_line("").unwrap();
        assert_eq!(parser.line(), 2);
    }
}
