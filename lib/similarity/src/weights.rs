//! Category weight tables
//!
//! Which attributes matter, and how much, depends on the garment: pattern and
//! neckline tell basic tees apart, silhouette defines bottoms and outerwear,
//! heel and boot height define footwear. Weights are relative integer points
//! and are normalized by the scorer, so they need not sum to 100.

use crate::matchers::eq_ignore_case;
use ahash::AHashMap;
use closetx_core::Attribute;
use serde::{Deserialize, Serialize};

const BASIC_TOP_WEIGHTS: &[(Attribute, u32)] = &[
    (Attribute::Color, 40),
    (Attribute::Pattern, 20),
    (Attribute::Neckline, 15),
    (Attribute::Sleeves, 10),
    (Attribute::Silhouette, 10),
    (Attribute::Style, 5),
];

const BOTTOM_WEIGHTS: &[(Attribute, u32)] = &[
    (Attribute::Color, 40),
    (Attribute::Silhouette, 35),
    (Attribute::Style, 15),
    (Attribute::Material, 10),
    (Attribute::Rise, 10),
    (Attribute::Length, 10),
];

const OUTERWEAR_WEIGHTS: &[(Attribute, u32)] = &[
    (Attribute::Color, 35),
    (Attribute::Silhouette, 30),
    (Attribute::Style, 25),
    (Attribute::Material, 10),
    (Attribute::Length, 10),
];

const FOOTWEAR_WEIGHTS: &[(Attribute, u32)] = &[
    (Attribute::Color, 35),
    (Attribute::HeelHeight, 30),
    (Attribute::BootHeight, 20),
    (Attribute::Style, 10),
    (Attribute::Material, 5),
];

const DEFAULT_WEIGHTS: &[(Attribute, u32)] = &[
    (Attribute::Color, 50),
    (Attribute::Silhouette, 30),
    (Attribute::Style, 10),
    (Attribute::Material, 10),
];

/// Garment classes that carry their own weight table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeightProfile {
    /// Tops with subcategory t-shirt or tank top
    BasicTop,
    Bottom,
    Outerwear,
    Footwear,
    /// Everything else, including records without category metadata
    Default,
}

impl WeightProfile {
    /// Classify a category/subcategory pair. First matching rule wins.
    pub fn classify(category: Option<&str>, subcategory: Option<&str>) -> Self {
        let (Some(category), Some(subcategory)) = (category, subcategory) else {
            return WeightProfile::Default;
        };
        if eq_ignore_case(category, "top") {
            if eq_ignore_case(subcategory, "t-shirt") || eq_ignore_case(subcategory, "tank top") {
                WeightProfile::BasicTop
            } else {
                WeightProfile::Default
            }
        } else if eq_ignore_case(category, "bottom") {
            WeightProfile::Bottom
        } else if eq_ignore_case(category, "outerwear") {
            WeightProfile::Outerwear
        } else if eq_ignore_case(category, "footwear") {
            WeightProfile::Footwear
        } else {
            WeightProfile::Default
        }
    }

    /// The weight table for this profile
    pub fn weights(self) -> CategoryWeights {
        let entries = match self {
            WeightProfile::BasicTop => BASIC_TOP_WEIGHTS,
            WeightProfile::Bottom => BOTTOM_WEIGHTS,
            WeightProfile::Outerwear => OUTERWEAR_WEIGHTS,
            WeightProfile::Footwear => FOOTWEAR_WEIGHTS,
            WeightProfile::Default => DEFAULT_WEIGHTS,
        };
        CategoryWeights { profile: self, entries }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightProfile::BasicTop => "basicTop",
            WeightProfile::Bottom => "bottom",
            WeightProfile::Outerwear => "outerwear",
            WeightProfile::Footwear => "footwear",
            WeightProfile::Default => "default",
        }
    }
}

/// Attribute weights for one garment class, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryWeights {
    profile: WeightProfile,
    entries: &'static [(Attribute, u32)],
}

impl CategoryWeights {
    pub fn profile(&self) -> WeightProfile {
        self.profile
    }

    /// Weight of an attribute, `None` if the table does not score it
    pub fn get(&self, attribute: Attribute) -> Option<u32> {
        self.entries
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of all weights in the table
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_map(&self) -> AHashMap<Attribute, u32> {
        self.iter().collect()
    }
}

/// Look up the weight table for a category/subcategory pair.
///
/// Case-insensitive; a missing category or subcategory falls back to the
/// default table.
pub fn get_category_weights(category: Option<&str>, subcategory: Option<&str>) -> CategoryWeights {
    WeightProfile::classify(category, subcategory).weights()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_top_weights() {
        let weights = get_category_weights(Some("top"), Some("t-shirt"));
        assert_eq!(weights.profile(), WeightProfile::BasicTop);
        assert_eq!(weights.get(Attribute::Color), Some(40));
        assert_eq!(weights.get(Attribute::Pattern), Some(20));
        assert_eq!(weights.get(Attribute::Neckline), Some(15));
        assert_eq!(weights.get(Attribute::Sleeves), Some(10));
        assert_eq!(weights.get(Attribute::Silhouette), Some(10));
        assert_eq!(weights.get(Attribute::Style), Some(5));
        assert_eq!(weights.get(Attribute::Material), None);
        assert_eq!(weights.total(), 100);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            WeightProfile::classify(Some("TOP"), Some("Tank Top")),
            WeightProfile::BasicTop
        );
        assert_eq!(
            WeightProfile::classify(Some("Footwear"), Some("HEELS")),
            WeightProfile::Footwear
        );
        assert_eq!(
            WeightProfile::classify(Some("OutErWeAr"), Some("coat")),
            WeightProfile::Outerwear
        );
    }

    #[test]
    fn test_category_rules() {
        assert_eq!(WeightProfile::classify(Some("bottom"), Some("jeans")), WeightProfile::Bottom);
        assert_eq!(WeightProfile::classify(Some("outerwear"), Some("coat")), WeightProfile::Outerwear);
        assert_eq!(WeightProfile::classify(Some("footwear"), Some("boots")), WeightProfile::Footwear);
        // Tops other than tees and tanks use the default table.
        assert_eq!(WeightProfile::classify(Some("top"), Some("blazer")), WeightProfile::Default);
        assert_eq!(WeightProfile::classify(Some("dress"), Some("midi")), WeightProfile::Default);
    }

    #[test]
    fn test_missing_metadata_falls_back_to_default() {
        assert_eq!(WeightProfile::classify(None, Some("t-shirt")), WeightProfile::Default);
        assert_eq!(WeightProfile::classify(Some("bottom"), None), WeightProfile::Default);
        let weights = get_category_weights(None, None);
        assert_eq!(weights.get(Attribute::Color), Some(50));
        assert_eq!(weights.get(Attribute::Silhouette), Some(30));
    }

    #[test]
    fn test_footwear_and_bottom_tables() {
        let footwear = WeightProfile::Footwear.weights();
        assert_eq!(footwear.get(Attribute::HeelHeight), Some(30));
        assert_eq!(footwear.get(Attribute::BootHeight), Some(20));
        assert_eq!(footwear.total(), 100);

        let bottom = WeightProfile::Bottom.weights();
        assert_eq!(bottom.get(Attribute::Rise), Some(10));
        // Bottom weights intentionally exceed 100 points.
        assert_eq!(bottom.total(), 120);
    }

    #[test]
    fn test_iteration_order_and_map() {
        let weights = WeightProfile::Outerwear.weights();
        let attributes: Vec<Attribute> = weights.iter().map(|(a, _)| a).collect();
        assert_eq!(attributes[0], Attribute::Color);
        assert_eq!(weights.len(), 5);

        let map = weights.to_map();
        assert_eq!(map.get(&Attribute::Style), Some(&25));
        assert_eq!(map.len(), 5);
    }
}
