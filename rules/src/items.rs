//! Item-node predicates and item-group filters.

use sdkify_catalog::CaselessSet;
use sdkify_catalog::ReferenceCatalog;
use sdkify_catalog::names;
use sdkify_model::ItemGroup;
use sdkify_model::ProjectItem;
use sdkify_model::ProjectRoot;

use crate::frameworks::framework_has_value_tuple;
use crate::text::ends_with_ignore_case;

/// Whether the item is a NuGet package reference.
pub fn is_package_reference(item: &impl ProjectItem) -> bool {
    item.item_type()
        .eq_ignore_ascii_case(names::PACKAGE_REFERENCE_ITEM)
}

/// Whether the item is the value-tuple backfill package on a framework that
/// already ships the type natively.
pub fn is_explicit_value_tuple_reference_needed(
    item: &impl ProjectItem,
    moniker: Option<&str>,
) -> bool {
    item.include()
        .eq_ignore_ascii_case(names::VALUE_TUPLE_PACKAGE)
        && framework_has_value_tuple(moniker)
}

/// Whether every reference name in `required` appears among the document's
/// assembly-reference includes.
fn has_all_references(root: &impl ProjectRoot, required: &CaselessSet) -> bool {
    let mut includes = CaselessSet::new();
    for group in root.item_groups() {
        for item in reference_items(group) {
            includes.insert(item.include());
        }
    }
    required.iter().all(|name| includes.contains(name))
}

/// Whether the document references the full WPF assembly set.
pub fn is_wpf(root: &impl ProjectRoot, catalog: &ReferenceCatalog) -> bool {
    has_all_references(root, &catalog.wpf_references)
}

/// Whether the document references the full WinForms assembly set.
pub fn is_winforms(root: &impl ProjectRoot, catalog: &ReferenceCatalog) -> bool {
    has_all_references(root, &catalog.winforms_references)
}

/// Whether a desktop assembly reference is obsolete under the new SDK:
/// either it has a modern equivalent, is implied by the SDK itself, or
/// belongs to the WPF/WinForms sets that the `UseWPF`/`UseWindowsForms`
/// properties replace.
pub fn desktop_reference_needs_removal(
    item: &impl ProjectItem,
    catalog: &ReferenceCatalog,
) -> bool {
    let include = item.include();
    catalog
        .desktop_references_with_modern_equivalents
        .contains(include)
        || catalog.implicit_framework_references.contains(include)
        || catalog.wpf_references.contains(include)
        || catalog.winforms_references.contains(include)
}

/// Whether the item is a generated WinForms UI designer source file.
///
/// Settings and resources designers share the generated suffix but are not
/// UI designers and stay excluded.
pub fn is_winforms_ui_designer_file(item: &impl ProjectItem) -> bool {
    let include = item.include();
    ends_with_ignore_case(include, names::DESIGNER_FILE_SUFFIX)
        && !names::EXCLUDED_DESIGNER_SUFFIXES
            .iter()
            .any(|suffix| ends_with_ignore_case(include, suffix))
}

/// Whether the item is a XAML page carrying the legacy `Designer` sub-type
/// marker.
pub fn is_legacy_xaml_designer_item(item: &impl ProjectItem) -> bool {
    ends_with_ignore_case(item.include(), names::XAML_FILE_SUFFIX)
        && item
            .metadata_value(names::SUBTYPE_METADATA)
            .is_some_and(|subtype| subtype.eq_ignore_ascii_case(names::DESIGNER_SUBTYPE))
}

/// Whether the item is a code-behind file linked to a XAML page through
/// `DependentUpon` metadata.
pub fn is_dependent_upon_xaml_designer_item(item: &impl ProjectItem) -> bool {
    item.metadata_value(names::SUBTYPE_METADATA)
        .is_some_and(|subtype| subtype.eq_ignore_ascii_case(names::CODE_SUBTYPE))
        && item
            .metadata_value(names::DEPENDENT_UPON_METADATA)
            .is_some_and(|upon| ends_with_ignore_case(upon, names::XAML_FILE_SUFFIX))
}

/// Items of a group that the new format covers implicitly: legacy assembly
/// references plus the item kinds subsumed by the default globs.
pub fn candidate_items_for_removal<'a, G: ItemGroup>(
    group: &'a G,
    catalog: &'a ReferenceCatalog,
) -> impl Iterator<Item = &'a G::Item> {
    group.items().filter(move |item| {
        item.item_type().eq_ignore_ascii_case(names::REFERENCE_ITEM)
            || catalog.globbed_item_types.contains(item.item_type())
    })
}

/// Items of a group that are legacy assembly references.
pub fn reference_items<G: ItemGroup>(group: &G) -> impl Iterator<Item = &G::Item> {
    group
        .items()
        .filter(|item| item.item_type().eq_ignore_ascii_case(names::REFERENCE_ITEM))
}

/// Whether a metadata entry may be copied forward during conversion. The
/// synthetic `RequiredTargetFramework` entry never is.
pub fn is_valid_conversion_metadata(name: &str) -> bool {
    !name.eq_ignore_ascii_case(names::REQUIRED_TARGET_FRAMEWORK_METADATA)
}
