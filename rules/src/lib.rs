//! Classification rules for legacy project migration.
//!
//! A catalog of pure predicates over document nodes. Each predicate takes a
//! node (plus, where needed, the reference catalog, the baseline snapshot or
//! a target framework moniker) and returns a verdict; acting on verdicts is
//! the orchestrator's job. Nothing here performs I/O or blocks, and apart
//! from the two explicit property appends nothing mutates the document.
//!
//! Missing metadata is a non-match, not an error, and a node's condition
//! that fails to parse simply yields no configuration name. All name
//! comparisons are ordinal case-insensitive.

mod frameworks;
mod items;
mod properties;
mod text;

pub use frameworks::framework_has_value_tuple;
pub use frameworks::is_not_net_framework;
pub use items::candidate_items_for_removal;
pub use items::desktop_reference_needs_removal;
pub use items::is_dependent_upon_xaml_designer_item;
pub use items::is_explicit_value_tuple_reference_needed;
pub use items::is_legacy_xaml_designer_item;
pub use items::is_package_reference;
pub use items::is_valid_conversion_metadata;
pub use items::is_winforms;
pub use items::is_winforms_ui_designer_file;
pub use items::is_wpf;
pub use items::reference_items;
pub use properties::add_use_winforms;
pub use properties::add_use_wpf;
pub use properties::is_debug_type_default;
pub use properties::is_define_constant_default;
pub use properties::is_output_path_default;
pub use properties::is_platform_target_default;

use sdkify_model::Conditioned;
use tracing::debug;

/// Derive the configuration name a node's condition selects.
///
/// Returns the empty string for unconditioned nodes and for conditions that
/// do not follow the canonical dimension-equality form; the parse failure is
/// swallowed here so dimension-unaware callers need no error path.
pub fn configuration_name_of(node: &impl Conditioned) -> String {
    let Some(condition) = node.condition() else {
        return String::new();
    };
    match sdkify_conditions::parse_condition(condition) {
        Ok(dimensions) => dimensions.configuration_name(),
        Err(error) => {
            debug!(%error, condition, "ignoring condition without recognizable dimensions");
            String::new()
        }
    }
}
