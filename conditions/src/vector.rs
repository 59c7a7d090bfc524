//! Ordered configuration dimension vectors.

/// An ordered mapping from dimension name to dimension value identifying one
/// concrete build configuration, e.g. `{Configuration: Debug, Platform: AnyCPU}`.
///
/// Insertion order is significant: it determines both the serialized condition
/// expression and the derived configuration name. The empty vector is a valid,
/// distinguished value meaning "unconditional".
///
/// Dimension names are unique within a vector (compared case-insensitively,
/// matching the host format). Re-inserting an existing name overwrites its
/// value in place without changing its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionVector {
    entries: Vec<(String, String)>,
}

impl DimensionVector {
    /// The empty, unconditional vector.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insert a dimension, overwriting the value of an existing name in place.
    ///
    /// The name is not validated here; see [`is_valid_dimension_name`]. The
    /// round-trip guarantee of the codec only holds for valid names.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a dimension value by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// The display name of this configuration: dimension values (not names)
    /// joined with `|` in insertion order. Empty for the empty vector.
    pub fn configuration_name(&self) -> String {
        self.entries
            .iter()
            .map(|(_, value)| value.as_str())
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl FromIterator<(String, String)> for DimensionVector {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut vector = Self::new();
        for (name, value) in iter {
            vector.insert(name, value);
        }
        vector
    }
}

/// Whether `name` may appear as a dimension name: non-empty and containing
/// none of `$`, `(`, `)`.
pub fn is_valid_dimension_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| matches!(c, '$' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_overwrites_in_place() {
        let mut vector = DimensionVector::new();
        vector.insert("Configuration", "Debug");
        vector.insert("Platform", "AnyCPU");
        vector.insert("configuration", "Release");

        assert_eq!(vector.len(), 2);
        assert_eq!(vector.get("Configuration"), Some("Release"));
        assert_eq!(vector.configuration_name(), "Release|AnyCPU");
    }

    #[test]
    fn configuration_name_of_empty_vector_is_empty() {
        assert_eq!(DimensionVector::new().configuration_name(), "");
    }

    #[test]
    fn dimension_name_validity() {
        assert!(is_valid_dimension_name("Configuration"));
        assert!(is_valid_dimension_name("Target Framework"));
        assert!(!is_valid_dimension_name(""));
        assert!(!is_valid_dimension_name("Dim$"));
        assert!(!is_valid_dimension_name("Dim(1)"));
    }
}
