//! INI rendering.
//!
//! This module provides the [`Serializer`] that renders a [`Document`] back into INI
//! text, and the serde `Serialize` implementation that writes a document as a single
//! string.
//!
//! ## Output Layout
//!
//! ```text
//! ; leading comments        (only with include_comments)
//!                           (blank line, only with blank_line_between_sections)
//! [Section]
//! key=value                 (insertion order, original casing)
//! ; section comments        (only with include_comments)
//! ```
//!
//! Every line, including the last, ends with the configured [`LineEnding`](crate::LineEnding).
//! The output never starts with a blank line, and an empty document renders as `""`.
//!
//! ## Usage
//!
//! ```rust
//! use ini_document::{from_str, to_string};
//!
//! let doc = from_str("; top\n[A]\nk1 = v1\n[B]\nk2=v2").unwrap();
//! assert_eq!(to_string(&doc), "; top\n\n[A]\nk1=v1\n\n[B]\nk2=v2\n");
//! ```

use crate::{Document, IniOptions, Section};
use serde::{Serialize, Serializer as SerdeSerializer};
use tracing::debug;

/// The INI renderer.
///
/// Created via [`Serializer::new`]; feed it a document with
/// [`Serializer::serialize_document`] and take the text with [`Serializer::into_inner`].
pub struct Serializer<'o> {
    output: String,
    options: &'o IniOptions,
}

impl<'o> Serializer<'o> {
    pub fn new(options: &'o IniOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push_str(self.options.line_ending.as_str());
    }

    fn write_comments(&mut self, comments: &[String]) {
        if self.options.include_comments {
            for comment in comments {
                self.write_line(comment);
            }
        }
    }

    pub fn serialize_document(&mut self, document: &Document) {
        if document.is_empty() && document.comments().is_empty() {
            return;
        }

        self.write_comments(document.comments());
        for section in document.sections() {
            // A separator is only written once something precedes it.
            if self.options.blank_line_between_sections && !self.output.is_empty() {
                self.write_line("");
            }
            self.serialize_section(section);
        }
    }

    pub fn serialize_section(&mut self, section: &Section) {
        self.write_line(&format!("[{}]", section.name()));
        for (key, value) in section.iter() {
            self.write_line(&format!("{key}={value}"));
        }
        self.write_comments(section.comments());
    }
}

/// Renders `document` with the given options.
#[must_use]
pub fn to_string_with_options(document: &Document, options: &IniOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.serialize_document(document);
    let output = serializer.into_inner();
    debug!(sections = document.len(), bytes = output.len(), "rendered INI document");
    output
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: SerdeSerializer,
    {
        serializer.serialize_str(&self.render(false, true))
    }
}
