//! # ini_document
//!
//! A structured, round-trippable model of INI configuration text.
//!
//! ## What it does
//!
//! An INI file is read into a [`Document`]: an ordered, case-insensitive map of section
//! names to [`Section`]s, each an ordered, case-insensitive map of keys to text values.
//! Comment lines are kept, attached to the document (before the first section) or to the
//! section they follow. The document renders back to text with the same sections, keys and
//! values in the same order.
//!
//! ## Key Features
//!
//! - **Strict parsing**: malformed lines, duplicate sections and duplicate keys are errors,
//!   reported with the line number
//! - **Case-insensitive lookup, case-preserving output**
//! - **Text-only storage**: values are typed on read (`i32`, `bool`, `f64`, dates, URLs)
//! - **Path expressions**: `doc.get_path("Section/Key")`
//! - **No unsafe code**
//!
//! ## Quick Start
//!
//! ```rust
//! use ini_document::{from_str, to_string};
//!
//! let text = "\
//! ; top comment
//! [A]
//! k1=v1
//! k2=v2=x
//! [B]
//! k3 = v3
//! ";
//!
//! let mut doc = from_str(text).unwrap();
//! assert_eq!(doc.get("a", "K2"), Some("v2=x"));
//!
//! doc.set("B", "k4", "v4").unwrap();
//! let rendered = to_string(&doc);
//! assert_eq!(from_str(&rendered).unwrap(), doc);
//! ```
//!
//! ## Typed Values
//!
//! ```rust
//! use ini_document::from_str;
//!
//! let doc = from_str("[Net]\nport=8080\nsecure=1\nretries=\nmode=fast").unwrap();
//! assert_eq!(doc.get_path_i32("Net/port", 80).unwrap(), 8080);
//! assert!(doc.get_path_bool("Net/secure", false).unwrap());
//! assert_eq!(doc.get_path_i32("Net/retries", 3).unwrap(), 3); // empty → default
//! assert!(doc.get_path_i32("Net/mode", 0).is_err());           // unconvertible → error
//! ```
//!
//! ## Encoding
//!
//! Parsing works on decoded text. [`from_slice`], [`from_reader`] and [`from_path`]
//! accept UTF-8 (with or without a byte order mark); other encodings must be decoded by
//! the caller first.
//!
//! ## Logging
//!
//! Parse and render events are emitted through [`tracing`] at `debug`/`trace` level.
//! Install a subscriber in the application to see them.

pub mod de;
pub mod document;
pub mod error;
pub mod macros;
pub mod map;
pub mod name;
pub mod options;
pub mod section;
pub mod ser;
pub mod value;

pub use de::{from_lines, Parser};
pub use document::Document;
pub use error::{Error, FormatError, Result};
pub use map::NameMap;
pub use name::{is_valid_name, KeyPath};
pub use options::{IniOptions, LineEnding};
pub use section::Section;
pub use ser::Serializer;
pub use value::FromIniValue;

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Parses INI text into a [`Document`], skipping a leading byte order mark.
///
/// # Examples
///
/// ```rust
/// use ini_document::from_str;
///
/// let doc = from_str("[Point]\nx=1\ny=2").unwrap();
/// assert_eq!(doc.get("Point", "y"), Some("2"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Format`] for the first line that violates the INI grammar.
pub fn from_str(s: &str) -> Result<Document> {
    de::from_str(s)
}

/// Parses UTF-8 bytes of INI text into a [`Document`].
///
/// # Errors
///
/// Returns [`Error::Io`] if the bytes are not valid UTF-8, or [`Error::Format`] if the
/// text is not valid INI.
pub fn from_slice(v: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(v).map_err(|e| Error::io(&e.to_string()))?;
    from_str(s)
}

/// Reads a [`Document`] from an I/O stream of UTF-8 INI text.
///
/// # Examples
///
/// ```rust
/// use ini_document::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[A]\nx=1")).unwrap();
/// assert_eq!(doc.get("A", "x"), Some("1"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or [`Error::Format`] if the text is not valid INI.
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Document> {
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Reads a [`Document`] from the file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file is missing or unreadable, or [`Error::Format`] if its
/// contents are not valid INI.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading INI file");
    let bytes = fs::read(path).map_err(|e| Error::io(&format!("{}: {e}", path.display())))?;
    from_slice(&bytes)
}

/// Renders `document` with the default options (blank line between sections, comments
/// included, `\n` line endings).
#[must_use]
pub fn to_string(document: &Document) -> String {
    to_string_with_options(document, &IniOptions::default())
}

/// Renders `document` with custom options.
///
/// # Examples
///
/// ```rust
/// use ini_document::{from_str, to_string_with_options, IniOptions};
///
/// let doc = from_str("[A]\nx=1\n[B]\ny=2").unwrap();
/// let text = to_string_with_options(&doc, &IniOptions::compact());
/// assert_eq!(text, "[A]\nx=1\n[B]\ny=2\n");
/// ```
#[must_use]
pub fn to_string_with_options(document: &Document, options: &IniOptions) -> String {
    ser::to_string_with_options(document, options)
}

/// Writes `document` to `writer` with the default options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W: io::Write>(writer: W, document: &Document) -> Result<()> {
    to_writer_with_options(writer, document, &IniOptions::default())
}

/// Writes `document` to `writer` with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer_with_options<W: io::Write>(
    mut writer: W,
    document: &Document,
    options: &IniOptions,
) -> Result<()> {
    let text = to_string_with_options(document, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Writes `document` to the file at `path`, creating or truncating it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn to_path<P: AsRef<Path>>(path: P, document: &Document, options: &IniOptions) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), sections = document.len(), "saving INI file");
    fs::write(path, to_string_with_options(document, options))
        .map_err(|e| Error::io(&format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_slice_skips_bom() {
        let doc = from_slice(b"\xEF\xBB\xBF[A]\nx=1").unwrap();
        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_from_slice_invalid_utf8() {
        let err = from_slice(b"[A]\nx=\xFF\xFE").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_from_reader() {
        let doc = from_reader(Cursor::new("; c\n[A]\nx = 1")).unwrap();
        assert_eq!(doc.comments(), ["; c"]);
        assert_eq!(doc.get("a", "X"), Some("1"));
    }

    #[test]
    fn test_to_writer() {
        let doc = from_str("[A]\nx=1").unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &doc).unwrap();
        assert_eq!(buffer, b"[A]\nx=1\n");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("ini_document_definitely_missing.ini");
        let err = from_path(&path).unwrap_err();
        assert!(err.is_io());
        assert!(!err.is_format());
    }

    #[test]
    fn test_roundtrip_with_all_options() {
        let doc = from_str("; c\n[A]\nk1=v1\nk2=v2=x\n; a\n[B]\nk3 = v3").unwrap();
        for blank in [true, false] {
            for comments in [true, false] {
                let text = doc.render(blank, comments);
                let back = from_str(&text).unwrap();
                let pairs = |d: &Document| {
                    d.sections()
                        .map(|s| {
                            let kv: Vec<(String, String)> = s
                                .iter()
                                .map(|(k, v)| (k.to_string(), v.to_string()))
                                .collect();
                            (s.name().to_string(), kv)
                        })
                        .collect::<Vec<_>>()
                };
                assert_eq!(pairs(&back), pairs(&doc));
                if comments {
                    assert_eq!(back, doc);
                }
            }
        }
    }
}
