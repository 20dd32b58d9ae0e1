//! Equivalence families for colors and silhouettes
//!
//! A family is a set of values that count as the same thing when deciding
//! whether two items are duplicates ("Navy" and "Teal" are both blues).
//! Families are disjoint; the first entry of each family is its canonical
//! value.

use ahash::AHashMap;
use std::sync::OnceLock;

/// Color families. Black and Grey are kept apart on purpose.
pub const COLOR_FAMILIES: &[&[&str]] = &[
    &["White", "Cream", "Ivory", "Beige", "Off White"],
    &["Black"],
    &["Grey", "Gray", "Charcoal", "Silver"],
    &["Navy", "Blue", "Light Blue", "Turquoise", "Teal"],
    &["Red", "Burgundy", "Maroon", "Wine"],
    &["Pink", "Blush", "Rose", "Fuchsia"],
    &["Green", "Olive", "Khaki", "Sage", "Mint", "Emerald"],
    &["Brown", "Tan", "Camel", "Chocolate", "Cognac"],
    &["Yellow", "Mustard", "Gold"],
    &["Orange", "Coral", "Rust", "Peach"],
    &["Purple", "Lavender", "Lilac", "Plum"],
];

/// Generic silhouette families.
///
/// Fitted, Regular and Loose are not listed: they only match each other
/// through the category rules in [`crate::matchers::silhouettes_match`].
pub const SILHOUETTE_FAMILIES: &[&[&str]] = &[
    &["Wide Leg", "Relaxed Fit", "Flared", "Bootcut"],
    &["Slim Fit", "Skinny", "Tapered"],
    &["Straight", "Straight Leg", "Classic Fit"],
    &["Oversized", "Boxy", "Baggy"],
    &["A-Line", "Fit and Flare", "Skater"],
    &["Bodycon", "Sheath", "Pencil"],
];

/// Reverse index from a lower-cased value to the family it belongs to
#[derive(Debug)]
pub struct FamilyIndex {
    families: &'static [&'static [&'static str]],
    index: AHashMap<String, usize>,
}

impl FamilyIndex {
    /// Build the index. When a value appears in more than one family the
    /// first family wins, same as a front-to-back scan.
    pub fn build(families: &'static [&'static [&'static str]]) -> Self {
        let mut index = AHashMap::new();
        for (family_id, members) in families.iter().enumerate() {
            for member in members.iter() {
                index.entry(member.to_lowercase()).or_insert(family_id);
            }
        }
        Self { families, index }
    }

    /// Family id of a value, case-insensitive
    #[inline]
    pub fn family_of(&self, value: &str) -> Option<usize> {
        self.index.get(&value.to_lowercase()).copied()
    }

    /// Canonical member of the family the value belongs to
    pub fn canonical(&self, value: &str) -> Option<&'static str> {
        self.family_of(value)
            .and_then(|id| self.families[id].first().copied())
    }

    /// Whether both values resolve to the same family.
    /// Values outside every family never match.
    pub fn same_family(&self, a: &str, b: &str) -> bool {
        match (self.family_of(a), self.family_of(b)) {
            (Some(fa), Some(fb)) => fa == fb,
            _ => false,
        }
    }

    /// Number of families in the table
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

static COLOR_INDEX: OnceLock<FamilyIndex> = OnceLock::new();
static SILHOUETTE_INDEX: OnceLock<FamilyIndex> = OnceLock::new();

/// Global color family index (built on first use)
pub fn colors() -> &'static FamilyIndex {
    COLOR_INDEX.get_or_init(|| FamilyIndex::build(COLOR_FAMILIES))
}

/// Global silhouette family index (built on first use)
pub fn silhouettes() -> &'static FamilyIndex {
    SILHOUETTE_INDEX.get_or_init(|| FamilyIndex::build(SILHOUETTE_FAMILIES))
}
