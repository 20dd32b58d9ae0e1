//! Similarity scorer
//!
//! Scores two item records on a 0-100 scale:
//!
//! 1. items of different category or subcategory score 0
//! 2. weights come from the new item's category/subcategory
//! 3. only attributes both items specify are applicable; their weights
//!    form the denominator
//! 4. nothing applicable scores 0
//! 5. matched applicable weight over applicable weight, as a rounded percent
//!
//! The silhouette matcher always receives the new item's category metadata,
//! never the existing item's. Argument order is therefore part of the
//! contract even though the category gate makes both sides agree today.

use crate::matchers::{attribute_matches, determinate, eq_ignore_case};
use crate::weights::get_category_weights;
use closetx_core::{Attribute, ItemAttributes};
use tracing::debug;

/// Highest possible score
pub const MAX_SCORE: u8 = 100;

/// Case-insensitive equality of a category field; absent, empty or
/// `"undefined"` never equals anything
fn field_matches(a: Option<&str>, b: Option<&str>) -> bool {
    match (determinate(a), determinate(b)) {
        (Some(a), Some(b)) => eq_ignore_case(a, b),
        _ => false,
    }
}

/// Whether two items are the same garment type
pub fn categories_match(new_item: &ItemAttributes, existing_item: &ItemAttributes) -> bool {
    field_matches(new_item.category.as_deref(), existing_item.category.as_deref())
        && field_matches(new_item.subcategory.as_deref(), existing_item.subcategory.as_deref())
}

/// Whether an attribute can be compared between the two items
#[inline]
pub(crate) fn is_applicable(
    attribute: Attribute,
    new_item: &ItemAttributes,
    existing_item: &ItemAttributes,
) -> bool {
    new_item.has(attribute) && existing_item.has(attribute)
}

/// Evaluate one applicable attribute with the new item as silhouette context
#[inline]
pub(crate) fn evaluate_attribute(
    attribute: Attribute,
    new_item: &ItemAttributes,
    existing_item: &ItemAttributes,
) -> bool {
    attribute_matches(
        attribute,
        new_item.get(attribute),
        existing_item.get(attribute),
        new_item.category.as_deref(),
        new_item.subcategory.as_deref(),
    )
}

/// Rounded percentage of matched over applicable weight
#[inline]
pub(crate) fn to_percentage(matched: u32, applicable: u32) -> u8 {
    if applicable == 0 {
        return 0;
    }
    let ratio = matched.min(applicable) as f64 / applicable as f64;
    (ratio * f64::from(MAX_SCORE)).round() as u8
}

/// Similarity of two item records, an integer in `[0, 100]`.
///
/// Never fails: incomparable inputs score 0.
pub fn calculate_similarity_score(new_item: &ItemAttributes, existing_item: &ItemAttributes) -> u8 {
    if !categories_match(new_item, existing_item) {
        debug!(
            new_category = ?new_item.category,
            existing_category = ?existing_item.category,
            "category gate rejected pair"
        );
        return 0;
    }

    let weights = get_category_weights(
        new_item.category.as_deref(),
        new_item.subcategory.as_deref(),
    );

    let max_score: u32 = weights
        .iter()
        .filter(|(attribute, _)| is_applicable(*attribute, new_item, existing_item))
        .map(|(_, weight)| weight)
        .sum();

    if max_score == 0 {
        debug!(profile = weights.profile().as_str(), "no comparable attributes");
        return 0;
    }

    let score: u32 = weights
        .iter()
        .filter(|(attribute, _)| is_applicable(*attribute, new_item, existing_item))
        .filter(|(attribute, _)| evaluate_attribute(*attribute, new_item, existing_item))
        .map(|(_, weight)| weight)
        .sum();

    to_percentage(score, max_score)
}
