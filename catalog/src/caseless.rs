//! Order-preserving set and map with ordinal case-insensitive keys.
//!
//! The host document format treats element, attribute and metadata names
//! case-insensitively, so every name-keyed lookup in the migration core goes
//! through these types instead of threading a comparer through each call
//! site. Keys are normalized by ASCII lowercasing; original spellings are
//! kept for iteration.

use std::collections::HashMap;
use std::collections::HashSet;

use serde::Deserialize;
use serde::Deserializer;

fn normalize(key: &str) -> String {
    key.to_ascii_lowercase()
}

/// A set of strings with case-insensitive membership and stable iteration
/// order (first-insertion order, original spelling).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaselessSet {
    entries: Vec<String>,
    index: HashSet<String>,
}

impl CaselessSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; a case-variant duplicate of an existing entry is a
    /// no-op. Returns whether the value was newly inserted.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.index.insert(normalize(&value)) {
            self.entries.push(value);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index.contains(&normalize(value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in first-insertion order with their original spelling.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CaselessSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'de> Deserialize<'de> for CaselessSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<String>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}

/// A map with case-insensitive string keys and stable entry order.
///
/// Used for metadata collections, which the document model exposes as an
/// ordered list but looks up by name without regard to case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaselessMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for CaselessMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> CaselessMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; replacement keeps the entry's original position and
    /// spelling, mirroring [`CaselessSet::insert`].
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let normalized = normalize(&key);
        match self.index.get(&normalized).copied() {
            Some(at) => Some(std::mem::replace(&mut self.entries[at].1, value)),
            None => {
                self.index.insert(normalized, self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index
            .get(&normalize(key))
            .map(|&at| &self.entries[at].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(&normalize(key))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in insertion order with their original key spelling.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for CaselessMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_membership_ignores_case() {
        let set: CaselessSet = ["PresentationCore", "WindowsBase"].into_iter().collect();
        assert!(set.contains("presentationcore"));
        assert!(set.contains("WINDOWSBASE"));
        assert!(!set.contains("System.Xaml"));
    }

    #[test]
    fn set_deduplicates_case_variants_keeping_first_spelling() {
        let set: CaselessSet = ["DEBUG", "debug", "TRACE"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["DEBUG", "TRACE"]);
    }

    #[test]
    fn map_lookup_ignores_case_and_keeps_order() {
        let mut map = CaselessMap::new();
        map.insert("SubType", "Designer");
        map.insert("DependentUpon", "Main.xaml");
        assert_eq!(map.get("subtype"), Some(&"Designer"));
        assert_eq!(map.insert("SUBTYPE", "Code"), Some("Designer"));
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![("SubType", &"Code"), ("DependentUpon", &"Main.xaml")]
        );
    }
}
