//! Ordered, case-insensitive name map.
//!
//! [`NameMap`] backs both sections (name → [`Section`](crate::Section)) and keys
//! (name → value). It wraps an [`IndexMap`] keyed by the lowercased name, and keeps the
//! name exactly as first written next to each value so output preserves its casing.
//!
//! ## Why IndexMap?
//!
//! INI output must follow insertion order, and `IndexMap` gives that order together with
//! hash lookups. Removal uses `shift_remove` so the remaining entries keep their order.
//!
//! ## Examples
//!
//! ```rust
//! use ini_document::NameMap;
//!
//! let mut map = NameMap::new();
//! map.insert("Timeout", 30);
//! map.insert("retries", 3);
//!
//! assert_eq!(map.get("TIMEOUT"), Some(&30));
//! let names: Vec<_> = map.names().collect();
//! assert_eq!(names, vec!["Timeout", "retries"]);
//! ```

use indexmap::IndexMap;

/// Folds a name into its lookup form.
#[inline]
pub(crate) fn fold(name: &str) -> String {
    name.to_lowercase()
}

#[derive(Debug, Clone, PartialEq)]
struct Slot<V> {
    name: String,
    value: V,
}

/// An insertion-ordered map whose keys compare case-insensitively.
///
/// Two maps are equal when they hold the same names and values in the same order.
#[derive(Debug, Clone)]
pub struct NameMap<V>(IndexMap<String, Slot<V>>);

impl<V> NameMap<V> {
    #[must_use]
    pub fn new() -> Self {
        NameMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NameMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a value under `name`.
    ///
    /// If a name equal under case-insensitive comparison is present, its value is replaced
    /// in place (same position, original spelling kept) and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_document::NameMap;
    ///
    /// let mut map = NameMap::new();
    /// assert!(map.insert("Key", 1).is_none());
    /// assert_eq!(map.insert("KEY", 2), Some(1));
    /// assert_eq!(map.names().next(), Some("Key"));
    /// ```
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        match self.0.get_mut(&fold(&name)) {
            Some(slot) => Some(std::mem::replace(&mut slot.value, value)),
            None => {
                self.0.insert(fold(&name), Slot { name, value });
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.0.get(&fold(name)).map(|slot| &slot.value)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut V> {
        self.0.get_mut(&fold(name)).map(|slot| &mut slot.value)
    }

    /// Returns the stored spelling of `name`, if present.
    #[must_use]
    pub fn get_name(&self, name: &str) -> Option<&str> {
        self.0.get(&fold(name)).map(|slot| slot.name.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&fold(name))
    }

    /// Removes `name` and returns its value, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.0.shift_remove(&fold(name)).map(|slot| slot.value)
    }

    /// Changes the stored spelling of `from` to `to` without moving the entry.
    ///
    /// Returns `false` if `from` is absent or `to` already names a different entry.
    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        let from_key = fold(from);
        let to_key = fold(to);
        if from_key != to_key && self.0.contains_key(&to_key) {
            return false;
        }
        let Some((index, _, slot)) = self.0.shift_remove_full(&from_key) else {
            return false;
        };
        let slot = Slot {
            name: to.to_string(),
            value: slot.value,
        };
        self.0.shift_insert(index, to_key, slot);
        true
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the stored names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(|slot| slot.name.as_str())
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.values().map(|slot| &slot.value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.0.values_mut().map(|slot| &mut slot.value)
    }

    /// Returns an iterator over `(name, value)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.values().map(|slot| (slot.name.as_str(), &slot.value))
    }
}

impl<V: PartialEq> PartialEq for NameMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.values().eq(other.0.values())
    }
}

impl<V> Default for NameMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for NameMap<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = NameMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let mut map = NameMap::new();
        map.insert("Database", "postgres");
        assert_eq!(map.get("database"), Some(&"postgres"));
        assert_eq!(map.get("DATABASE"), Some(&"postgres"));
        assert!(map.contains("dAtAbAsE"));
        assert_eq!(map.get_name("database"), Some("Database"));
    }

    #[test]
    fn test_overwrite_keeps_position_and_spelling() {
        let mut map: NameMap<i32> = [("a", 1), ("B", 2), ("c", 3)].into_iter().collect();
        assert_eq!(map.insert("b", 20), Some(2));
        let pairs: Vec<_> = map.iter().map(|(n, v)| (n.to_string(), *v)).collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), 1),
                ("B".to_string(), 20),
                ("c".to_string(), 3)
            ]
        );
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map: NameMap<i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(map.remove("A"), Some(1));
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(map.remove("missing"), None);
    }

    #[test]
    fn test_rename_in_place() {
        let mut map: NameMap<i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert!(map.rename("B", "middle"));
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["a", "middle", "c"]);
        assert_eq!(map.get("MIDDLE"), Some(&2));
        assert!(!map.contains("b"));
    }

    #[test]
    fn test_rename_case_only() {
        let mut map: NameMap<i32> = [("foo", 1)].into_iter().collect();
        assert!(map.rename("foo", "FOO"));
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["FOO"]);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let ab: NameMap<i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let ba: NameMap<i32> = [("b", 2), ("a", 1)].into_iter().collect();
        let ab_upper: NameMap<i32> = [("A", 1), ("b", 2)].into_iter().collect();
        assert_eq!(ab, ab.clone());
        assert_ne!(ab, ba);
        assert_ne!(ab, ab_upper);
    }

    #[test]
    fn test_rename_collision_and_missing() {
        let mut map: NameMap<i32> = [("a", 1), ("b", 2)].into_iter().collect();
        assert!(!map.rename("a", "B"));
        assert!(!map.rename("zzz", "y"));
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
