//! Plain in-memory implementations of the document-node seams.

use sdkify_catalog::CaselessMap;

use crate::node::Conditioned;
use crate::node::ItemGroup;
use crate::node::ProjectItem;
use crate::node::ProjectProperty;
use crate::node::ProjectRoot;
use crate::node::PropertyGroup;

/// A property node held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyData {
    name: String,
    value: String,
    condition: Option<String>,
}

impl PropertyData {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

impl Conditioned for PropertyData {
    fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }
}

impl ProjectProperty for PropertyData {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }
}

/// An item node held in memory. Metadata order is document order; lookup is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemData {
    item_type: String,
    include: String,
    metadata: CaselessMap<String>,
}

impl ItemData {
    pub fn new(item_type: impl Into<String>, include: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            include: include.into(),
            metadata: CaselessMap::new(),
        }
    }

    pub fn with_metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(name, value.into());
        self
    }
}

impl ProjectItem for ItemData {
    fn item_type(&self) -> &str {
        &self.item_type
    }

    fn include(&self) -> &str {
        &self.include
    }

    fn metadata(&self) -> impl Iterator<Item = (&str, &str)> {
        self.metadata.iter().map(|(name, value)| (name, value.as_str()))
    }

    fn metadata_value(&self, name: &str) -> Option<&str> {
        self.metadata.get(name).map(String::as_str)
    }
}

/// An item group held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemGroupData {
    condition: Option<String>,
    items: Vec<ItemData>,
}

impl ItemGroupData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_item(mut self, item: ItemData) -> Self {
        self.items.push(item);
        self
    }
}

impl Conditioned for ItemGroupData {
    fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }
}

impl ItemGroup for ItemGroupData {
    type Item = ItemData;

    fn items(&self) -> impl Iterator<Item = &ItemData> {
        self.items.iter()
    }
}

/// A property group held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyGroupData {
    condition: Option<String>,
    properties: Vec<PropertyData>,
}

impl PropertyGroupData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_property(mut self, property: PropertyData) -> Self {
        self.properties.push(property);
        self
    }
}

impl Conditioned for PropertyGroupData {
    fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }
}

impl PropertyGroup for PropertyGroupData {
    type Property = PropertyData;

    fn properties(&self) -> impl Iterator<Item = &PropertyData> {
        self.properties.iter()
    }

    fn add_property(&mut self, name: &str, value: &str) {
        self.properties.push(PropertyData::new(name, value));
    }
}

/// A full legacy project document held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRootData {
    property_groups: Vec<PropertyGroupData>,
    item_groups: Vec<ItemGroupData>,
}

impl ProjectRootData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property_group(mut self, group: PropertyGroupData) -> Self {
        self.property_groups.push(group);
        self
    }

    pub fn with_item_group(mut self, group: ItemGroupData) -> Self {
        self.item_groups.push(group);
        self
    }
}

impl ProjectRoot for ProjectRootData {
    type Group = ItemGroupData;
    type PropertyGroup = PropertyGroupData;

    fn item_groups(&self) -> impl Iterator<Item = &ItemGroupData> {
        self.item_groups.iter()
    }

    fn property_groups(&self) -> impl Iterator<Item = &PropertyGroupData> {
        self.property_groups.iter()
    }
}
