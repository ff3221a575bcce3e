//! The whole INI document: ordered sections plus leading comments.
//!
//! [`Document`] owns its [`Section`]s. Section lookups are case-insensitive, iteration
//! follows insertion order, and names are validated on every write path.
//!
//! ## Access Patterns
//!
//! ```rust
//! use ini_document::Document;
//!
//! let mut doc = Document::new();
//!
//! // Combined section + key access; writing creates what is missing
//! doc.set("Server", "Port", "8080").unwrap();
//! assert_eq!(doc.get("server", "PORT"), Some("8080"));
//! assert_eq!(doc.get("Server", "Host"), None);
//!
//! // Path expressions
//! doc.set_path("Server/Host", "localhost").unwrap();
//! assert_eq!(doc.get_path("Server/Host").unwrap(), Some("localhost"));
//! assert_eq!(doc.get_path_i32("Server/Port", 80).unwrap(), 8080);
//! ```

use crate::map::NameMap;
use crate::name::{validate_comment, validate_key, validate_section_name, validate_value, KeyPath};
use crate::value::{convert_opt_or, convert_or, FromIniValue};
use crate::{Error, IniOptions, Result, Section};
use chrono::NaiveDateTime;
use std::fmt;
use url::Url;

/// An ordered, case-insensitive collection of [`Section`]s plus leading comments.
///
/// # Examples
///
/// ```rust
/// use ini_document::Document;
///
/// let doc: Document = "; app settings\n[A]\nk1=v1\nk2=v2=x\n[B]\nk3 = v3".parse().unwrap();
///
/// assert_eq!(doc.comments(), ["; app settings"]);
/// assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["A", "B"]);
/// assert_eq!(doc.get("a", "k2"), Some("v2=x"));
/// assert_eq!(doc.get("B", "k3"), Some("v3"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    sections: NameMap<Section>,
    comments: Vec<String>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the document has no sections. Comments are not counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Removes all sections and comments.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.comments.clear();
    }

    /// Returns an iterator over the sections, in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn sections_mut(&mut self) -> impl Iterator<Item = &mut Section> {
        self.sections.values_mut()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.names()
    }

    /// Returns the section named `name`, or `None` if there is none.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains(name)
    }

    /// Returns the section named `name`, creating an empty one at the end if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `name` is not a valid name or contains a line
    /// break.
    pub fn add_section(&mut self, name: &str) -> Result<&mut Section> {
        validate_section_name(name)?;
        if !self.sections.contains(name) {
            self.sections.insert(name, Section::new(name)?);
        }
        self.sections
            .get_mut(name)
            .ok_or_else(|| Error::InvalidName(name.to_string()))
    }

    /// Inserts `section`, replacing (in place) any section with the same name.
    ///
    /// The replaced section is returned. The stored spelling of the name follows the
    /// section that was there first.
    pub fn insert_section(&mut self, mut section: Section) -> Option<Section> {
        if let Some(existing) = self.sections.get_name(section.name()) {
            let existing = existing.to_string();
            section.set_name(&existing);
        }
        let name = section.name().to_string();
        self.sections.insert(name, section)
    }

    /// Removes and returns the section named `name`.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.remove(name)
    }

    /// Renames section `from` to `to`, keeping its position.
    ///
    /// Does nothing if `from` does not exist. A change of case only (`Foo` → `FOO`) is
    /// allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `to` is not a valid name, or
    /// [`Error::SectionExists`] if `to` already names a different section.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_document::{Document, Error};
    ///
    /// let mut doc: Document = "[Foo]\n[Bar]".parse().unwrap();
    /// doc.rename_section("foo", "FOO").unwrap();
    /// assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["FOO", "Bar"]);
    ///
    /// let err = doc.rename_section("FOO", "bar").unwrap_err();
    /// assert_eq!(err, Error::SectionExists("bar".to_string()));
    /// ```
    pub fn rename_section(&mut self, from: &str, to: &str) -> Result<()> {
        validate_section_name(to)?;
        if !self.sections.contains(from) {
            return Ok(());
        }
        if !self.sections.rename(from, to) {
            return Err(Error::SectionExists(to.to_string()));
        }
        if let Some(section) = self.sections.get_mut(to) {
            section.set_name(to);
        }
        Ok(())
    }

    /// Returns the value of `key` in `section`, or `None` if either is missing.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section).and_then(|s| s.get(key))
    }

    /// Stores `value` under `key` in `section`, creating the section if needed.
    ///
    /// This overwrites an existing key, unlike parsing, which rejects duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `section` or `key` is not a valid name, and
    /// [`Error::InvalidKey`] or [`Error::InvalidValue`] for a pair that would not render
    /// back as itself (see [`Section::set`]). The section is not created on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_document::{Document, Error};
    ///
    /// let mut doc = Document::new();
    /// assert_eq!(doc.set("A", "#k", "v"), Err(Error::InvalidKey("#k".to_string())));
    /// assert!(doc.set("A", "k", "line1\nline2").unwrap_err().is_validation());
    /// assert!(doc.is_empty());
    /// ```
    pub fn set(
        &mut self,
        section: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>> {
        let (key, value) = (key.into(), value.into());
        validate_key(&key)?;
        validate_value(&value)?;
        self.add_section(section)?.set(key, value)
    }

    /// Stores the `Display` form of `value`; see [`Document::set`].
    pub fn set_value<T: fmt::Display>(
        &mut self,
        section: &str,
        key: impl Into<String>,
        value: T,
    ) -> Result<Option<String>> {
        self.set(section, key, value.to_string())
    }

    /// Reads `key` in `section` as `T`, falling back to `default` when the section or key
    /// is missing or the value is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if the value is present but is not a valid `T`.
    pub fn get_as<T: FromIniValue>(&self, section: &str, key: &str, default: T) -> Result<T> {
        convert_or(self.get(section, key), default)
    }

    /// Comment lines that appear before the first section.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Appends a leading comment line, marker included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComment`] unless `comment` starts with `;` or `#` and is a
    /// single trimmed line.
    pub fn push_comment(&mut self, comment: impl Into<String>) -> Result<()> {
        let comment = comment.into();
        validate_comment(&comment)?;
        self.comments.push(comment);
        Ok(())
    }

    pub fn clear_comments(&mut self) {
        self.comments.clear();
    }

    /// Replaces the whole document with the result of parsing `text`.
    ///
    /// On failure the document is left empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] describing the first malformed line.
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        self.clear();
        *self = crate::de::from_str(text)?;
        Ok(())
    }

    /// Renders the document with the two formatting switches.
    #[must_use]
    pub fn render(&self, blank_line_between_sections: bool, include_comments: bool) -> String {
        let options = IniOptions::new()
            .with_blank_line_between_sections(blank_line_between_sections)
            .with_comments(include_comments);
        self.render_with_options(&options)
    }

    #[must_use]
    pub fn render_with_options(&self, options: &IniOptions) -> String {
        crate::ser::to_string_with_options(self, options)
    }

    /// Returns the value at `path` (`"Section/Key"`), or `None` if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` is not a valid path expression.
    pub fn get_path(&self, path: &str) -> Result<Option<&str>> {
        let path = KeyPath::parse(path)?;
        Ok(self.get(path.section, path.key))
    }

    /// Returns the value at `path`, or `default` if it is missing.
    pub fn get_path_or(&self, path: &str, default: &str) -> Result<String> {
        Ok(self.get_path(path)?.unwrap_or(default).to_string())
    }

    /// Stores `value` at `path`, creating the section and key if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` is not a valid path expression.
    pub fn set_path(&mut self, path: &str, value: impl Into<String>) -> Result<Option<String>> {
        let path = KeyPath::parse(path)?;
        self.set(path.section, path.key, value)
    }

    pub fn set_path_value<T: fmt::Display>(
        &mut self,
        path: &str,
        value: T,
    ) -> Result<Option<String>> {
        self.set_path(path, value.to_string())
    }

    /// Reads the value at `path` as `T`; see [`Document::get_as`].
    pub fn get_path_as<T: FromIniValue>(&self, path: &str, default: T) -> Result<T> {
        convert_or(self.get_path(path)?, default)
    }

    pub fn get_path_i32(&self, path: &str, default: i32) -> Result<i32> {
        self.get_path_as(path, default)
    }

    pub fn get_path_bool(&self, path: &str, default: bool) -> Result<bool> {
        self.get_path_as(path, default)
    }

    pub fn get_path_decimal(&self, path: &str, default: f64) -> Result<f64> {
        self.get_path_as(path, default)
    }

    pub fn get_path_datetime(
        &self,
        path: &str,
        default: Option<NaiveDateTime>,
    ) -> Result<Option<NaiveDateTime>> {
        convert_opt_or(self.get_path(path)?, default)
    }

    pub fn get_path_url(&self, path: &str, default: Option<Url>) -> Result<Option<Url>> {
        convert_opt_or(self.get_path(path)?, default)
    }
}

impl std::str::FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::de::from_str(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with_options(&IniOptions::default()))
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Section;
    type IntoIter = Box<dyn Iterator<Item = &'a Section> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.sections())
    }
}
