//! Case-insensitive substring helpers shared by the rules.

/// Ordinal case-insensitive containment test.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Ordinal case-insensitive suffix test. Never panics, even when the suffix
/// boundary would fall inside a multi-byte character of `text`.
pub(crate) fn ends_with_ignore_case(text: &str, suffix: &str) -> bool {
    text.len() >= suffix.len()
        && text
            .get(text.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}
