//! The reference catalog proper: built-in tables plus TOML overrides.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::caseless::CaselessSet;

/// Fixed element, property and metadata names of the host document format.
///
/// These are identifiers of the format itself, not policy, so they are plain
/// constants rather than catalog tables. Comparisons against them must be
/// ordinal case-insensitive.
pub mod names {
    /// Item kind of a NuGet package reference.
    pub const PACKAGE_REFERENCE_ITEM: &str = "PackageReference";
    /// Item kind of a legacy assembly reference.
    pub const REFERENCE_ITEM: &str = "Reference";

    pub const DEFINE_CONSTANTS_PROPERTY: &str = "DefineConstants";
    pub const DEBUG_TYPE_PROPERTY: &str = "DebugType";
    pub const OUTPUT_PATH_PROPERTY: &str = "OutputPath";
    pub const PLATFORM_TARGET_PROPERTY: &str = "PlatformTarget";
    pub const USE_WINDOWS_FORMS_PROPERTY: &str = "UseWindowsForms";
    pub const USE_WPF_PROPERTY: &str = "UseWPF";

    /// Package that backfills the value-tuple type on old frameworks.
    pub const VALUE_TUPLE_PACKAGE: &str = "System.ValueTuple";

    /// Family markers detected by containment in a target framework moniker.
    pub const NETSTANDARD_MARKER: &str = "netstandard";
    pub const NETCOREAPP_MARKER: &str = "netcoreapp";
    /// Prefix of classic desktop framework monikers (`net47`, `net472`, ...).
    pub const NET_FRAMEWORK_PREFIX: &str = "net";
    /// Lowest desktop framework version that ships the value-tuple type
    /// natively, as version components (4.7).
    pub const LOWEST_VALUE_TUPLE_FRAMEWORK: &[u32] = &[4, 7];

    /// Suffix of generated designer source files.
    pub const DESIGNER_FILE_SUFFIX: &str = ".Designer.cs";
    /// Designer suffixes that are not WinForms UI designers.
    pub const EXCLUDED_DESIGNER_SUFFIXES: &[&str] =
        &["Settings.Designer.cs", "Resources.Designer.cs"];
    pub const XAML_FILE_SUFFIX: &str = ".xaml";

    pub const SUBTYPE_METADATA: &str = "SubType";
    pub const DESIGNER_SUBTYPE: &str = "Designer";
    pub const CODE_SUBTYPE: &str = "Code";
    pub const DEPENDENT_UPON_METADATA: &str = "DependentUpon";
    /// Synthetic metadata never copied forward during conversion.
    pub const REQUIRED_TARGET_FRAMEWORK_METADATA: &str = "RequiredTargetFramework";
}

/// Process-wide lookup tables of known names and default values.
///
/// Built-in content covers the common case; individual tables can be
/// replaced wholesale from a TOML document (a table present in the override
/// replaces the built-in one, absent tables keep their built-ins).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ReferenceCatalog {
    /// Desktop references that also work on the modern runtime, typically
    /// because a package equivalent exists.
    #[serde(default = "default_modern_equivalents")]
    pub desktop_references_with_modern_equivalents: CaselessSet,

    /// References implied by the new SDK and dropped unconditionally.
    #[serde(default = "default_implicit_references")]
    pub implicit_framework_references: CaselessSet,

    /// Assembly references that together indicate a WPF project.
    #[serde(default = "default_wpf_references")]
    pub wpf_references: CaselessSet,

    /// Assembly references that together indicate a WinForms project.
    #[serde(default = "default_winforms_references")]
    pub winforms_references: CaselessSet,

    #[serde(default = "default_define_constants")]
    pub default_define_constants: CaselessSet,

    #[serde(default = "default_debug_types")]
    pub default_debug_types: CaselessSet,

    #[serde(default = "default_output_paths")]
    pub default_output_paths: CaselessSet,

    #[serde(default = "default_platform_targets")]
    pub default_platform_targets: CaselessSet,

    /// Item kinds covered by the new format's implicit globs.
    #[serde(default = "default_globbed_item_types")]
    pub globbed_item_types: CaselessSet,
}

fn default_modern_equivalents() -> CaselessSet {
    [
        "Microsoft.CSharp",
        "System.Data.DataSetExtensions",
        "System.Net.Http",
        "System.IO.Compression",
        "System.IO.Compression.FileSystem",
    ]
    .into_iter()
    .collect()
}

fn default_implicit_references() -> CaselessSet {
    [
        "mscorlib",
        "System",
        "System.Core",
        "System.Data",
        "System.Xml",
        "System.Xml.Linq",
    ]
    .into_iter()
    .collect()
}

fn default_wpf_references() -> CaselessSet {
    [
        "PresentationCore",
        "PresentationFramework",
        "System.Xaml",
        "WindowsBase",
    ]
    .into_iter()
    .collect()
}

fn default_winforms_references() -> CaselessSet {
    ["System.Windows.Forms", "System.Drawing", "System.Deployment"]
        .into_iter()
        .collect()
}

fn default_define_constants() -> CaselessSet {
    ["DEBUG", "TRACE"].into_iter().collect()
}

fn default_debug_types() -> CaselessSet {
    ["full", "pdbonly", "portable"].into_iter().collect()
}

fn default_output_paths() -> CaselessSet {
    [r"bin\Debug\", r"bin\Release\"].into_iter().collect()
}

fn default_platform_targets() -> CaselessSet {
    ["AnyCPU"].into_iter().collect()
}

fn default_globbed_item_types() -> CaselessSet {
    ["Compile", "EmbeddedResource", "None", "Content"]
        .into_iter()
        .collect()
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceCatalog {
    /// The built-in catalog content.
    pub fn builtin() -> Self {
        Self {
            desktop_references_with_modern_equivalents: default_modern_equivalents(),
            implicit_framework_references: default_implicit_references(),
            wpf_references: default_wpf_references(),
            winforms_references: default_winforms_references(),
            default_define_constants: default_define_constants(),
            default_debug_types: default_debug_types(),
            default_output_paths: default_output_paths(),
            default_platform_targets: default_platform_targets(),
            globbed_item_types: default_globbed_item_types(),
        }
    }

    /// Build a catalog from a TOML document, table-by-table over the
    /// built-ins.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(text)?;
        debug!(
            wpf = catalog.wpf_references.len(),
            winforms = catalog.winforms_references.len(),
            "reference catalog loaded with overrides"
        );
        Ok(catalog)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog overrides: {0}")]
    Parse(#[from] toml::de::Error),
}
