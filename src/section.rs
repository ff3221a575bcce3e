//! A named group of key/value pairs.
//!
//! A [`Section`] keeps its keys in insertion order and looks them up case-insensitively.
//! Values are stored as text; the typed getters convert on read (see [`crate::value`]).

use crate::map::NameMap;
use crate::name::{validate_comment, validate_key, validate_section_name, validate_value};
use crate::value::{convert_opt_or, convert_or, FromIniValue};
use crate::Result;
use chrono::NaiveDateTime;
use std::fmt;
use url::Url;

/// A named, ordered group of key/value pairs plus the comment lines that follow them.
///
/// # Examples
///
/// ```rust
/// use ini_document::Section;
///
/// let mut section = Section::new("Server").unwrap();
/// section.set("Host", "localhost").unwrap();
/// section.set("port", "8080").unwrap();
///
/// assert_eq!(section.get("HOST"), Some("localhost"));
/// assert_eq!(section.get_i32("Port", 80).unwrap(), 8080);
/// assert_eq!(section.get_i32("missing", 80).unwrap(), 80);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    entries: NameMap<String>,
    comments: Vec<String>,
}

impl Section {
    /// Creates an empty section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`](crate::Error::InvalidName) if `name` is not a valid name
    /// or contains a line break.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_section_name(&name)?;
        Ok(Section {
            name,
            entries: NameMap::new(),
            comments: Vec::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Only the owning document renames sections, so the two stay in sync.
    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the section has no keys. Comments are not counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`, or `None` if the key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value stored under `key`, or `default` if the key is absent.
    ///
    /// An empty stored value is returned as-is; only absence falls back.
    #[must_use]
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    /// Stores `value` under `key`, returning the previous value.
    ///
    /// An existing key is overwritten in place and keeps its original spelling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`](crate::Error::InvalidName) if `key` is not a valid name,
    /// [`Error::InvalidKey`](crate::Error::InvalidKey) if it would not survive a
    /// `key=value` line, or [`Error::InvalidValue`](crate::Error::InvalidValue) if `value`
    /// spans lines or has surrounding whitespace. Nothing is stored on error.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>> {
        let (key, value) = (key.into(), value.into());
        validate_key(&key)?;
        validate_value(&value)?;
        Ok(self.entries.insert(key, value))
    }

    /// Stores the `Display` form of `value` under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_document::Section;
    ///
    /// let mut section = Section::new("Limits").unwrap();
    /// section.set_value("max", 100).unwrap();
    /// section.set_value("enabled", true).unwrap();
    /// assert_eq!(section.get("max"), Some("100"));
    /// assert_eq!(section.get("enabled"), Some("true"));
    /// ```
    pub fn set_value<T: fmt::Display>(
        &mut self,
        key: impl Into<String>,
        value: T,
    ) -> Result<Option<String>> {
        self.set(key, value.to_string())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.names()
    }

    /// Comment lines (with their `;` or `#` marker) that follow this section's keys.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Appends a comment line, marker included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComment`](crate::Error::InvalidComment) unless `comment`
    /// starts with `;` or `#` and is a single trimmed line.
    pub fn push_comment(&mut self, comment: impl Into<String>) -> Result<()> {
        let comment = comment.into();
        validate_comment(&comment)?;
        self.comments.push(comment);
        Ok(())
    }

    pub fn clear_comments(&mut self) {
        self.comments.clear();
    }

    /// Reads `key` as `T`.
    ///
    /// Returns `default` when the key is absent or its value is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`](crate::Error::Conversion) if the value is present
    /// but is not a valid `T`.
    pub fn get_as<T: FromIniValue>(&self, key: &str, default: T) -> Result<T> {
        convert_or(self.get(key), default)
    }

    pub fn get_i32(&self, key: &str, default: i32) -> Result<i32> {
        self.get_as(key, default)
    }

    pub fn get_i64(&self, key: &str, default: i64) -> Result<i64> {
        self.get_as(key, default)
    }

    /// Reads `key` as a boolean; accepts `true`/`false` as well as integers.
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        self.get_as(key, default)
    }

    pub fn get_decimal(&self, key: &str, default: f64) -> Result<f64> {
        self.get_as(key, default)
    }

    pub fn get_datetime(
        &self,
        key: &str,
        default: Option<NaiveDateTime>,
    ) -> Result<Option<NaiveDateTime>> {
        convert_opt_or(self.get(key), default)
    }

    pub fn get_url(&self, key: &str, default: Option<Url>) -> Result<Option<Url>> {
        convert_opt_or(self.get(key), default)
    }
}
