//! Property-node predicates against the baseline snapshot, and the two
//! property appends a conversion performs.

use sdkify_catalog::names;
use sdkify_model::BaselineProject;
use sdkify_model::ProjectProperty;
use sdkify_model::PropertyGroup;

fn is_property(property: &impl ProjectProperty, name: &str) -> bool {
    property.name().eq_ignore_ascii_case(name)
}

/// Whether the property is `DefineConstants` with only default constants:
/// every `;`-separated token must be in the baseline set.
pub fn is_define_constant_default(
    property: &impl ProjectProperty,
    baseline: &BaselineProject,
) -> bool {
    is_property(property, names::DEFINE_CONSTANTS_PROPERTY)
        && property
            .value()
            .split(';')
            .all(|token| baseline.define_constants().contains(token))
}

/// Whether the property is `DebugType` with a baseline-default value.
pub fn is_debug_type_default(
    property: &impl ProjectProperty,
    baseline: &BaselineProject,
) -> bool {
    is_property(property, names::DEBUG_TYPE_PROPERTY)
        && baseline.debug_types().contains(property.value())
}

/// Whether the property is `OutputPath` with a baseline-default value.
pub fn is_output_path_default(
    property: &impl ProjectProperty,
    baseline: &BaselineProject,
) -> bool {
    is_property(property, names::OUTPUT_PATH_PROPERTY)
        && baseline.output_paths().contains(property.value())
}

/// Whether the property is `PlatformTarget` with a baseline-default value.
pub fn is_platform_target_default(
    property: &impl ProjectProperty,
    baseline: &BaselineProject,
) -> bool {
    is_property(property, names::PLATFORM_TARGET_PROPERTY)
        && baseline.platform_targets().contains(property.value())
}

/// Append `UseWindowsForms=true` to the group. The append is unconditional;
/// callers are expected to guard against duplicates.
pub fn add_use_winforms(group: &mut impl PropertyGroup) {
    group.add_property(names::USE_WINDOWS_FORMS_PROPERTY, "true");
}

/// Append `UseWPF=true` to the group. Same duplicate contract as
/// [`add_use_winforms`].
pub fn add_use_wpf(group: &mut impl PropertyGroup) {
    group.add_property(names::USE_WPF_PROPERTY, "true");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sdkify_catalog::ReferenceCatalog;
    use sdkify_model::PropertyData;
    use sdkify_model::PropertyGroupData;

    fn baseline() -> BaselineProject {
        BaselineProject::from_catalog(&ReferenceCatalog::builtin())
    }

    #[test]
    fn define_constants_default_requires_every_token() {
        let baseline = baseline();
        assert!(is_define_constant_default(
            &PropertyData::new("DefineConstants", "DEBUG;TRACE"),
            &baseline
        ));
        assert!(is_define_constant_default(
            &PropertyData::new("defineconstants", "TRACE"),
            &baseline
        ));
        assert!(!is_define_constant_default(
            &PropertyData::new("DefineConstants", "DEBUG;CUSTOM"),
            &baseline
        ));
        // Wrong property name never matches, whatever the value.
        assert!(!is_define_constant_default(
            &PropertyData::new("Constants", "DEBUG"),
            &baseline
        ));
    }

    #[test]
    fn debug_type_default_membership() {
        let baseline = baseline();
        assert!(is_debug_type_default(
            &PropertyData::new("DebugType", "pdbonly"),
            &baseline
        ));
        assert!(is_debug_type_default(
            &PropertyData::new("DebugType", "Full"),
            &baseline
        ));
        assert!(!is_debug_type_default(
            &PropertyData::new("DebugType", "embedded"),
            &baseline
        ));
    }

    #[test]
    fn output_path_default_membership() {
        let baseline = baseline();
        assert!(is_output_path_default(
            &PropertyData::new("OutputPath", r"bin\Debug\"),
            &baseline
        ));
        assert!(!is_output_path_default(
            &PropertyData::new("OutputPath", r"out\"),
            &baseline
        ));
    }

    #[test]
    fn platform_target_default_membership() {
        let baseline = baseline();
        assert!(is_platform_target_default(
            &PropertyData::new("PlatformTarget", "anycpu"),
            &baseline
        ));
        assert!(!is_platform_target_default(
            &PropertyData::new("PlatformTarget", "x86"),
            &baseline
        ));
    }

    #[test]
    fn appends_are_unconditional() {
        let mut group = PropertyGroupData::new();
        add_use_winforms(&mut group);
        add_use_wpf(&mut group);
        add_use_wpf(&mut group);

        let appended: Vec<_> = group
            .properties()
            .map(|p| (p.name().to_string(), p.value().to_string()))
            .collect();
        assert_eq!(
            appended,
            vec![
                ("UseWindowsForms".to_string(), "true".to_string()),
                ("UseWPF".to_string(), "true".to_string()),
                ("UseWPF".to_string(), "true".to_string()),
            ]
        );
    }
}
