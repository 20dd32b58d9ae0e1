//! Explainability for similarity scores
//!
//! Provides output structures that explain how a score was computed,
//! showing per-attribute outcomes and weight contributions.

use crate::scorer::{categories_match, evaluate_attribute, is_applicable, to_percentage};
use crate::weights::{get_category_weights, WeightProfile};
use closetx_core::{Attribute, ItemAttributes};
use serde::Serialize;
use tracing::trace;

/// Outcome of one weighted attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeOutcome {
    pub attribute: Attribute,
    /// Weight from the category table
    pub weight: u32,
    /// Both items specify the attribute
    pub applicable: bool,
    /// The attribute matcher accepted the pair
    pub matched: bool,
}

impl AttributeOutcome {
    /// Weight this attribute adds to the matched total
    pub fn contribution(&self) -> u32 {
        if self.applicable && self.matched {
            self.weight
        } else {
            0
        }
    }
}

/// A similarity score with its per-attribute breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Same value [`crate::calculate_similarity_score`] returns
    pub score: u8,
    /// Category and subcategory agree
    pub same_category: bool,
    /// Weight table used; `None` when the category gate rejected the pair
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<WeightProfile>,
    pub matched_weight: u32,
    pub applicable_weight: u32,
    pub attributes: Vec<AttributeOutcome>,
}

impl ScoreBreakdown {
    /// The pair had at least one attribute to compare.
    ///
    /// A zero score with `comparable == false` means "no evidence" rather
    /// than "confirmed different".
    pub fn comparable(&self) -> bool {
        self.same_category && self.applicable_weight > 0
    }

    /// Matched attribute with the largest weight; ties go to the attribute
    /// listed first in the weight table
    pub fn top_contributing_attribute(&self) -> Option<Attribute> {
        self.attributes
            .iter()
            .filter(|o| o.contribution() > 0)
            .rev()
            .max_by_key(|o| o.contribution())
            .map(|o| o.attribute)
    }

    /// Applicable attributes that did not match
    pub fn mismatches(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.attributes
            .iter()
            .filter(|o| o.applicable && !o.matched)
            .map(|o| o.attribute)
    }

    fn rejected() -> Self {
        Self {
            score: 0,
            same_category: false,
            profile: None,
            matched_weight: 0,
            applicable_weight: 0,
            attributes: Vec::new(),
        }
    }
}

/// Score two records and record how every weighted attribute fared.
pub fn score_breakdown(new_item: &ItemAttributes, existing_item: &ItemAttributes) -> ScoreBreakdown {
    if !categories_match(new_item, existing_item) {
        return ScoreBreakdown::rejected();
    }

    let weights = get_category_weights(
        new_item.category.as_deref(),
        new_item.subcategory.as_deref(),
    );

    let attributes: Vec<AttributeOutcome> = weights
        .iter()
        .map(|(attribute, weight)| {
            let applicable = is_applicable(attribute, new_item, existing_item);
            let matched = applicable && evaluate_attribute(attribute, new_item, existing_item);
            trace!(%attribute, weight, applicable, matched, "attribute evaluated");
            AttributeOutcome {
                attribute,
                weight,
                applicable,
                matched,
            }
        })
        .collect();

    let applicable_weight = attributes
        .iter()
        .filter(|o| o.applicable)
        .map(|o| o.weight)
        .sum();
    let matched_weight = attributes.iter().map(AttributeOutcome::contribution).sum();

    ScoreBreakdown {
        score: to_percentage(matched_weight, applicable_weight),
        same_category: true,
        profile: Some(weights.profile()),
        matched_weight,
        applicable_weight,
        attributes,
    }
}

/// Summary statistics for a duplicate scan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityStats {
    /// Number of items the candidate was scored against
    pub candidates_count: usize,
    /// Number of items at or above the threshold
    pub matches_count: usize,
    pub avg_score: f32,
    pub best_score: u8,
    /// Attribute that contributed most to the best match, when a breakdown is available
    pub top_contributing_attribute: Option<Attribute>,
}

impl SimilarityStats {
    /// Compute stats from matches sorted best-first
    pub fn compute(matches: &[crate::detector::DuplicateMatch], candidates_count: usize) -> Self {
        let Some(best) = matches.first() else {
            return Self {
                candidates_count,
                matches_count: 0,
                avg_score: 0.0,
                best_score: 0,
                top_contributing_attribute: None,
            };
        };

        let total: u32 = matches.iter().map(|m| u32::from(m.score)).sum();

        Self {
            candidates_count,
            matches_count: matches.len(),
            avg_score: total as f32 / matches.len() as f32,
            best_score: best.score,
            top_contributing_attribute: best
                .breakdown
                .as_ref()
                .and_then(ScoreBreakdown::top_contributing_attribute),
        }
    }
}
