use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Attribute record of a single wardrobe item.
///
/// Every field is optional. Values are free text as entered or tagged by the
/// surrounding service; comparisons are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silhouette: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neckline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleeves: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heel_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
}

impl ItemAttributes {
    /// Create a record with only category and subcategory set
    pub fn new(category: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            subcategory: Some(subcategory.into()),
            ..Self::default()
        }
    }

    /// Set an attribute value, consuming and returning the record
    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        *self.slot_mut(attribute) = Some(value.into());
        self
    }

    /// Raw value of an attribute, if any
    #[inline]
    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Color => self.color.as_deref(),
            Attribute::Pattern => self.pattern.as_deref(),
            Attribute::Silhouette => self.silhouette.as_deref(),
            Attribute::Style => self.style.as_deref(),
            Attribute::Material => self.material.as_deref(),
            Attribute::Neckline => self.neckline.as_deref(),
            Attribute::Sleeves => self.sleeves.as_deref(),
            Attribute::HeelHeight => self.heel_height.as_deref(),
            Attribute::BootHeight => self.boot_height.as_deref(),
            Attribute::Rise => self.rise.as_deref(),
            Attribute::Length => self.length.as_deref(),
        }
    }

    /// Whether the record carries a non-empty value for the attribute
    #[inline]
    pub fn has(&self, attribute: Attribute) -> bool {
        self.get(attribute).is_some_and(|v| !v.is_empty())
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut Option<String> {
        match attribute {
            Attribute::Color => &mut self.color,
            Attribute::Pattern => &mut self.pattern,
            Attribute::Silhouette => &mut self.silhouette,
            Attribute::Style => &mut self.style,
            Attribute::Material => &mut self.material,
            Attribute::Neckline => &mut self.neckline,
            Attribute::Sleeves => &mut self.sleeves,
            Attribute::HeelHeight => &mut self.heel_height,
            Attribute::BootHeight => &mut self.boot_height,
            Attribute::Rise => &mut self.rise,
            Attribute::Length => &mut self.length,
        }
    }
}

/// The weighted attributes a similarity score can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Color,
    Pattern,
    Silhouette,
    Style,
    Material,
    Neckline,
    Sleeves,
    HeelHeight,
    BootHeight,
    Rise,
    Length,
}

impl Attribute {
    pub const ALL: [Attribute; 11] = [
        Attribute::Color,
        Attribute::Pattern,
        Attribute::Silhouette,
        Attribute::Style,
        Attribute::Material,
        Attribute::Neckline,
        Attribute::Sleeves,
        Attribute::HeelHeight,
        Attribute::BootHeight,
        Attribute::Rise,
        Attribute::Length,
    ];

    /// Field name as it appears in serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Color => "color",
            Attribute::Pattern => "pattern",
            Attribute::Silhouette => "silhouette",
            Attribute::Style => "style",
            Attribute::Material => "material",
            Attribute::Neckline => "neckline",
            Attribute::Sleeves => "sleeves",
            Attribute::HeelHeight => "heelHeight",
            Attribute::BootHeight => "bootHeight",
            Attribute::Rise => "rise",
            Attribute::Length => "length",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Integer(u64),
    Uuid(Uuid),
    String(String),
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::String(s) => write!(f, "{}", s),
            ItemId::Uuid(u) => write!(f, "{}", u),
            ItemId::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::String(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::String(s.to_string())
    }
}

impl From<u64> for ItemId {
    fn from(i: u64) -> Self {
        ItemId::Integer(i)
    }
}

impl From<Uuid> for ItemId {
    fn from(u: Uuid) -> Self {
        ItemId::Uuid(u)
    }
}

/// A wardrobe item: an identifier plus its attribute record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub attributes: ItemAttributes,
}

impl WardrobeItem {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ItemId>, attributes: ItemAttributes) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }

    /// Create an item with a freshly generated UUID
    pub fn with_random_id(attributes: ItemAttributes) -> Self {
        Self::new(Uuid::new_v4(), attributes)
    }
}
