//! Read-time conversion of stored text into typed values.
//!
//! Values are always stored as text. [`FromIniValue`] turns a stored value into a Rust
//! type at the moment it is read, and the typed getters on [`Section`](crate::Section)
//! and [`Document`](crate::Document) are built on it:
//!
//! - missing section or key → the caller's default
//! - stored value is empty → the caller's default
//! - anything else → converted, with failures reported as [`Error::Conversion`]
//!
//! ## Supported Types
//!
//! | Type | Accepted text |
//! |------|---------------|
//! | integers | decimal digits with optional sign |
//! | `bool` | `true`/`false` (any case), or an integer where non-zero is `true` |
//! | `f32`, `f64` | decimal numbers, e.g. `19.99`, `-0.5`, `1e3` |
//! | `NaiveDateTime` | RFC 3339, `2024-01-15 10:30:00`, `2024-01-15T10:30:00`, `2024-01-15` |
//! | `NaiveDate` | `2024-01-15` |
//! | `DateTime<Utc>` | RFC 3339, or a naive date/time taken as UTC |
//! | `Url` | absolute URLs |
//! | `String` | anything |
//!
//! ## Examples
//!
//! ```rust
//! use ini_document::FromIniValue;
//!
//! assert_eq!(i32::from_ini_value("42").unwrap(), 42);
//! assert!(bool::from_ini_value("1").unwrap());
//! assert!(!bool::from_ini_value("False").unwrap());
//! assert!(i32::from_ini_value("xyz").is_err());
//! ```

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use url::Url;

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Types that can be read from a stored INI value.
pub trait FromIniValue: Sized {
    /// Converts the stored text into `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if the text is not a valid `Self`.
    fn from_ini_value(value: &str) -> Result<Self>;
}

impl FromIniValue for String {
    fn from_ini_value(value: &str) -> Result<Self> {
        Ok(value.to_string())
    }
}

macro_rules! impl_from_ini_value_via_parse {
    ($($ty:ty),*) => {
        $(
            impl FromIniValue for $ty {
                fn from_ini_value(value: &str) -> Result<Self> {
                    value
                        .trim()
                        .parse::<$ty>()
                        .map_err(|e| Error::conversion(value, stringify!($ty), e))
                }
            }
        )*
    };
}

impl_from_ini_value_via_parse!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl FromIniValue for bool {
    fn from_ini_value(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Ok(n != 0);
        }
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(Error::conversion(
                value,
                "bool",
                "expected true, false or an integer",
            ))
        }
    }
}

impl FromIniValue for NaiveDate {
    fn from_ini_value(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map_err(|e| Error::conversion(value, "NaiveDate", e))
    }
}

impl FromIniValue for NaiveDateTime {
    fn from_ini_value(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt.naive_utc());
        }
        if let Some(dt) = DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        {
            return Ok(dt);
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(|date| date.and_time(NaiveTime::MIN))
            .map_err(|_| Error::conversion(value, "NaiveDateTime", "unrecognized date/time format"))
    }
}

impl FromIniValue for DateTime<Utc> {
    fn from_ini_value(value: &str) -> Result<Self> {
        match DateTime::parse_from_rfc3339(value.trim()) {
            Ok(dt) => Ok(dt.with_timezone(&Utc)),
            Err(_) => NaiveDateTime::from_ini_value(value)
                .map(|naive| naive.and_utc())
                .map_err(|_| {
                    Error::conversion(value, "DateTime<Utc>", "unrecognized date/time format")
                }),
        }
    }
}

impl FromIniValue for Url {
    fn from_ini_value(value: &str) -> Result<Self> {
        Url::parse(value.trim()).map_err(|e| Error::conversion(value, "Url", e))
    }
}

/// Applies the typed-getter rules to an optional stored value.
pub(crate) fn convert_or<T: FromIniValue>(stored: Option<&str>, default: T) -> Result<T> {
    match stored {
        Some(value) if !value.is_empty() => T::from_ini_value(value),
        _ => Ok(default),
    }
}

/// Like [`convert_or`], for getters whose default may itself be absent.
pub(crate) fn convert_opt_or<T: FromIniValue>(
    stored: Option<&str>,
    default: Option<T>,
) -> Result<Option<T>> {
    match stored {
        Some(value) if !value.is_empty() => T::from_ini_value(value).map(Some),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(i32::from_ini_value("-17").unwrap(), -17);
        assert_eq!(u64::from_ini_value(" 42 ").unwrap(), 42);
        assert!(u8::from_ini_value("300").is_err());

        let err = i32::from_ini_value("xyz").unwrap_err();
        assert!(err.is_conversion());
        assert!(err.to_string().contains("i32"));
    }

    #[test]
    fn test_bool() {
        assert!(bool::from_ini_value("1").unwrap());
        assert!(!bool::from_ini_value("0").unwrap());
        assert!(bool::from_ini_value("-3").unwrap());
        assert!(bool::from_ini_value("TRUE").unwrap());
        assert!(!bool::from_ini_value("false").unwrap());
        assert!(bool::from_ini_value("yes").is_err());
    }

    #[test]
    fn test_decimal() {
        assert_eq!(f64::from_ini_value("19.99").unwrap(), 19.99);
        assert_eq!(f64::from_ini_value("1e3").unwrap(), 1000.0);
        assert!(f64::from_ini_value("1,5").is_err());
    }

    #[test]
    fn test_naive_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(NaiveDateTime::from_ini_value("2024-01-15 10:30:00").unwrap(), expected);
        assert_eq!(NaiveDateTime::from_ini_value("2024-01-15T10:30:00").unwrap(), expected);
        assert_eq!(NaiveDateTime::from_ini_value("2024-01-15T10:30:00Z").unwrap(), expected);
        assert_eq!(
            NaiveDateTime::from_ini_value("2024-01-15T12:30:00+02:00").unwrap(),
            expected
        );
        assert_eq!(
            NaiveDateTime::from_ini_value("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        assert!(NaiveDateTime::from_ini_value("yesterday").is_err());
    }

    #[test]
    fn test_datetime_utc() {
        let dt = DateTime::<Utc>::from_ini_value("2024-01-15 10:30:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_url() {
        let url = Url::from_ini_value("https://example.com/api?v=2").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert!(Url::from_ini_value("not a url").is_err());
    }

    #[test]
    fn test_convert_or_defaults() {
        assert_eq!(convert_or(None, 42).unwrap(), 42);
        assert_eq!(convert_or(Some(""), 42).unwrap(), 42);
        assert_eq!(convert_or(Some("7"), 42).unwrap(), 7);
        assert!(convert_or(Some("xyz"), 42).is_err());
    }
}
