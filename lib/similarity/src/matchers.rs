//! Attribute matchers
//!
//! One equivalence predicate per attribute kind. Every matcher is total:
//! absent, empty or literal `"undefined"` values can not be compared and
//! produce `false`. Pattern is the exception, where absence means "solid".

use crate::families;
use closetx_core::Attribute;

/// Canonical token for unpatterned items
pub const SOLID_PATTERN: &str = "solid";

/// A value that can take part in a comparison
#[inline]
pub(crate) fn determinate(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("undefined"))
}

/// Unicode-aware case-insensitive equality, without allocating
#[inline]
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive string equality
pub fn simple_match(a: Option<&str>, b: Option<&str>) -> bool {
    match (determinate(a), determinate(b)) {
        (Some(a), Some(b)) => eq_ignore_case(a, b),
        _ => false,
    }
}

/// Exact match, or both colors in the same color family
pub fn colors_match(a: Option<&str>, b: Option<&str>) -> bool {
    if simple_match(a, b) {
        return true;
    }
    match (determinate(a), determinate(b)) {
        (Some(a), Some(b)) => families::colors().same_family(a, b),
        _ => false,
    }
}

/// Category specific silhouette equivalences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SilhouetteRule {
    /// T-shirts and tank tops: Fitted and Regular are interchangeable
    BasicTop,
    /// Blazers: neighbouring fits on Fitted - Regular - Loose match
    Blazer,
    Generic,
}

impl SilhouetteRule {
    fn for_context(category: Option<&str>, subcategory: Option<&str>) -> Self {
        let (Some(category), Some(subcategory)) = (determinate(category), determinate(subcategory))
        else {
            return SilhouetteRule::Generic;
        };
        if !eq_ignore_case(category, "top") {
            return SilhouetteRule::Generic;
        }
        if eq_ignore_case(subcategory, "t-shirt") || eq_ignore_case(subcategory, "tank top") {
            SilhouetteRule::BasicTop
        } else if eq_ignore_case(subcategory, "blazer") {
            SilhouetteRule::Blazer
        } else {
            SilhouetteRule::Generic
        }
    }

    fn matches(self, a: &str, b: &str) -> bool {
        let is = |value: &str, fit: &str| eq_ignore_case(value, fit);
        match self {
            SilhouetteRule::BasicTop => {
                let basic = |s: &str| is(s, "fitted") || is(s, "regular");
                basic(a) && basic(b)
            }
            SilhouetteRule::Blazer => {
                let adjacent = |x: &str, y: &str| {
                    (is(x, "fitted") && is(y, "regular")) || (is(x, "regular") && is(y, "loose"))
                };
                adjacent(a, b) || adjacent(b, a)
            }
            SilhouetteRule::Generic => false,
        }
    }
}

/// Silhouette equivalence.
///
/// `category` and `subcategory` select the garment specific rules; callers
/// pass the metadata of the item being checked for duplicates.
pub fn silhouettes_match(
    a: Option<&str>,
    b: Option<&str>,
    category: Option<&str>,
    subcategory: Option<&str>,
) -> bool {
    if simple_match(a, b) {
        return true;
    }
    let (Some(a), Some(b)) = (determinate(a), determinate(b)) else {
        return false;
    };
    SilhouetteRule::for_context(category, subcategory).matches(a, b)
        || families::silhouettes().same_family(a, b)
}

/// Lower-cased pattern with "", "solid" and "plain" folded into [`SOLID_PATTERN`].
/// Returns `None` for the literal `"undefined"`.
pub fn normalize_pattern(value: Option<&str>) -> Option<String> {
    let value = value.unwrap_or_default().to_lowercase();
    match value.as_str() {
        "" | "solid" | "plain" => Some(SOLID_PATTERN.to_string()),
        "undefined" => None,
        _ => Some(value),
    }
}

/// Pattern equivalence; a missing pattern counts as solid
pub fn pattern_matches(a: Option<&str>, b: Option<&str>) -> bool {
    match (normalize_pattern(a), normalize_pattern(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Canonical color family member, if the color belongs to a family
pub fn canonical_color(value: Option<&str>) -> Option<&'static str> {
    determinate(value).and_then(|v| families::colors().canonical(v))
}

/// Canonical silhouette family member, if the silhouette belongs to a family
pub fn canonical_silhouette(value: Option<&str>) -> Option<&'static str> {
    determinate(value).and_then(|v| families::silhouettes().canonical(v))
}

/// Dispatch an attribute to its matcher
pub fn attribute_matches(
    attribute: Attribute,
    a: Option<&str>,
    b: Option<&str>,
    category: Option<&str>,
    subcategory: Option<&str>,
) -> bool {
    match attribute {
        Attribute::Color => colors_match(a, b),
        Attribute::Silhouette => silhouettes_match(a, b, category, subcategory),
        Attribute::Pattern => pattern_matches(a, b),
        Attribute::Style
        | Attribute::Material
        | Attribute::Neckline
        | Attribute::Sleeves
        | Attribute::HeelHeight
        | Attribute::BootHeight
        | Attribute::Rise
        | Attribute::Length => simple_match(a, b),
    }
}
