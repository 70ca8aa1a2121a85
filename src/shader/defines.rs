//! Shader Macro Definitions
//!
//! [`DefineMap`] is an insertion-ordered collection of preprocessor
//! defines. Order matters: the preprocessor emits one `#define KEY VALUE`
//! line per entry, in the order entries were first inserted, so dependent
//! macros keep their relative positions across recompiles.
//!
//! ```rust,ignore
//! use glint::shader::DefineMap;
//!
//! let mut defines = DefineMap::new();
//! defines.set("MAX_LIGHTS", 8);
//! defines.set("USE_FOG", true);
//! // emitted as:
//! //   #define MAX_LIGHTS 8
//! //   #define USE_FOG true
//! ```

use std::fmt;

/// The replacement text of one define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefineValue {
    Bool(bool),
    Int(i32),
    Text(String),
}

impl fmt::Display for DefineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for DefineValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for DefineValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for DefineValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for DefineValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// An insertion-ordered mapping from define name to replacement text.
///
/// Updating an existing key keeps its original position; only first
/// insertion determines emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefineMap {
    entries: Vec<(String, DefineValue)>,
}

impl DefineMap {
    /// Create an empty define map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a define map with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Set a define. Existing keys are updated in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<DefineValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Get the value of a define.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DefineValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Remove a define. Returns `true` if it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        if let Some(idx) = self.entries.iter().position(|(k, _)| k == key) {
            self.entries.remove(idx);
            true
        } else {
            false
        }
    }

    /// Check whether a define is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of defines.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all defines.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate defines in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DefineValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge defines from another map. Conflicting keys take the other
    /// map's value but keep their position in `self`; new keys append.
    pub fn merge(&mut self, other: &DefineMap) {
        for (k, v) in &other.entries {
            self.set(k.clone(), v.clone());
        }
    }
}

/// Build a define map from literal pairs, preserving pair order.
impl From<&[(&str, &str)]> for DefineMap {
    fn from(defines: &[(&str, &str)]) -> Self {
        let mut result = Self::with_capacity(defines.len());
        for (k, v) in defines {
            result.set(*k, *v);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut defines = DefineMap::new();
        defines.set("USE_MAP", true);
        defines.set("MAX_LIGHTS", 8);

        assert!(defines.contains("USE_MAP"));
        assert!(!defines.contains("USE_AO_MAP"));
        assert_eq!(defines.get("USE_MAP"), Some(&DefineValue::Bool(true)));
        assert_eq!(defines.get("MAX_LIGHTS"), Some(&DefineValue::Int(8)));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut defines = DefineMap::new();
        defines.set("B", 1);
        defines.set("A", 2);
        defines.set("C", 3);

        let keys: Vec<_> = defines.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["B", "A", "C"]);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut defines = DefineMap::new();
        defines.set("A", 1);
        defines.set("B", 2);
        defines.set("A", 9);

        let entries: Vec<_> = defines
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(
            entries,
            [("A".to_string(), "9".to_string()), ("B".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn test_remove() {
        let mut defines = DefineMap::new();
        defines.set("A", 1);
        assert!(defines.remove("A"));
        assert!(!defines.remove("A"));
        assert!(defines.is_empty());
    }

    #[test]
    fn test_merge_overrides_and_appends() {
        let mut d1 = DefineMap::new();
        d1.set("A", 1);
        d1.set("B", 2);

        let mut d2 = DefineMap::new();
        d2.set("B", 3);
        d2.set("C", 4);

        d1.merge(&d2);

        let entries: Vec<_> = d1.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        assert_eq!(
            entries,
            [
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "3".to_string()),
                ("C".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(DefineValue::Bool(true).to_string(), "true");
        assert_eq!(DefineValue::Bool(false).to_string(), "false");
        assert_eq!(DefineValue::Int(-3).to_string(), "-3");
        assert_eq!(DefineValue::from("vec3(1.0)").to_string(), "vec3(1.0)");
    }
}
