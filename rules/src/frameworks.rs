//! Target-framework-moniker predicates.
//!
//! Family detection is a containment test (the marker may appear anywhere in
//! a composite moniker), while version qualification is a prefix-plus-suffix
//! test on the classic `netXY`/`netX.Y` forms. The distinction matters and
//! is pinned by tests.

use sdkify_catalog::names;

use crate::text::contains_ignore_case;

/// Whether the framework identified by `moniker` ships the value-tuple type
/// natively, making the backfill package redundant.
///
/// `None` and unrecognizable monikers are `false`; the standard and core
/// families are `false` by definition here (the original rule only
/// qualifies desktop monikers).
pub fn framework_has_value_tuple(moniker: Option<&str>) -> bool {
    let Some(moniker) = moniker else {
        return false;
    };
    if contains_ignore_case(moniker, names::NETSTANDARD_MARKER)
        || contains_ignore_case(moniker, names::NETCOREAPP_MARKER)
    {
        return false;
    }
    let lowered = moniker.to_ascii_lowercase();
    let Some(suffix) = lowered.strip_prefix(names::NET_FRAMEWORK_PREFIX) else {
        return false;
    };
    match version_components(suffix) {
        Some(version) => version.as_slice() >= names::LOWEST_VALUE_TUPLE_FRAMEWORK,
        None => false,
    }
}

/// Whether `moniker` belongs to the classic desktop family, i.e. contains
/// neither the `netcoreapp` nor the `netstandard` marker.
///
/// The inverted name is historical; callers rely on this exact polarity.
pub fn is_not_net_framework(moniker: &str) -> bool {
    !contains_ignore_case(moniker, names::NETCOREAPP_MARKER)
        && !contains_ignore_case(moniker, names::NETSTANDARD_MARKER)
}

/// Decode the numeric suffix of a moniker into version components.
///
/// Dotted suffixes (`5.0`, `10.0`) split on the dot; legacy undotted
/// suffixes (`47`, `472`) are one digit per component. Trailing platform
/// qualifiers (`48-windows`) are ignored. `None` when no leading digits
/// exist.
fn version_components(suffix: &str) -> Option<Vec<u32>> {
    let end = suffix
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(suffix.len());
    let numeric = &suffix[..end];
    if !numeric.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    if numeric.contains('.') {
        numeric
            .split('.')
            .map(|part| part.parse::<u32>().ok())
            .collect()
    } else {
        Some(numeric.chars().filter_map(|c| c.to_digit(10)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_tuple_absent_without_moniker() {
        assert!(!framework_has_value_tuple(None));
        assert!(!framework_has_value_tuple(Some("")));
    }

    #[test]
    fn value_tuple_absent_on_standard_and_core_families() {
        assert!(!framework_has_value_tuple(Some("netstandard2.0")));
        assert!(!framework_has_value_tuple(Some("netcoreapp3.1")));
        assert!(!framework_has_value_tuple(Some("NETCOREAPP2.1")));
    }

    #[test]
    fn value_tuple_requires_four_seven_or_newer() {
        assert!(!framework_has_value_tuple(Some("net45")));
        assert!(!framework_has_value_tuple(Some("net462")));
        assert!(framework_has_value_tuple(Some("net47")));
        assert!(framework_has_value_tuple(Some("net471")));
        assert!(framework_has_value_tuple(Some("NET48")));
        assert!(framework_has_value_tuple(Some("net5.0")));
        assert!(framework_has_value_tuple(Some("net10.0")));
    }

    #[test]
    fn value_tuple_rejects_non_desktop_prefixes() {
        assert!(!framework_has_value_tuple(Some("portable-net45+win8")));
        assert!(!framework_has_value_tuple(Some("netfx")));
    }

    #[test]
    fn classic_desktop_polarity_is_preserved() {
        assert!(is_not_net_framework("net472"));
        assert!(is_not_net_framework("net48"));
        assert!(!is_not_net_framework("netcoreapp3.1"));
        assert!(!is_not_net_framework("netstandard2.0"));
        assert!(!is_not_net_framework("something-NetStandard-ish"));
    }
}
