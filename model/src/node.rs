//! Read-only trait seams over the legacy document tree.
//!
//! Name and metadata lookups are ordinal case-insensitive throughout,
//! matching the host format. Missing metadata is `None`, never an error.

/// A document fragment that may carry a condition attribute.
///
/// An absent condition and an empty condition string both mean
/// "unconditional".
pub trait Conditioned {
    fn condition(&self) -> Option<&str>;
}

/// A property node: a named value, optionally gated by a condition.
pub trait ProjectProperty: Conditioned {
    fn name(&self) -> &str;
    fn value(&self) -> &str;
}

/// An item node: an element type, an include string and ordered metadata.
pub trait ProjectItem {
    fn item_type(&self) -> &str;
    fn include(&self) -> &str;

    /// Metadata entries in document order.
    fn metadata(&self) -> impl Iterator<Item = (&str, &str)>;

    /// Case-insensitive metadata lookup; `None` when absent.
    fn metadata_value(&self, name: &str) -> Option<&str>;
}

/// An ordered group of item nodes.
pub trait ItemGroup: Conditioned {
    type Item: ProjectItem;

    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

/// An ordered group of property nodes, with the one mutation seam the core
/// uses: appending a property.
pub trait PropertyGroup: Conditioned {
    type Property: ProjectProperty;

    fn properties(&self) -> impl Iterator<Item = &Self::Property>;

    /// Unconditionally append a property to the group. Callers guard against
    /// duplicates; the operation itself does not.
    fn add_property(&mut self, name: &str, value: &str);
}

/// The root of a legacy project document.
pub trait ProjectRoot {
    type Group: ItemGroup;
    type PropertyGroup: PropertyGroup;

    fn item_groups(&self) -> impl Iterator<Item = &Self::Group>;
    fn property_groups(&self) -> impl Iterator<Item = &Self::PropertyGroup>;
}
