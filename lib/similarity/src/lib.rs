//! # closetx Similarity
//!
//! Category-weighted similarity scoring for wardrobe items.
//!
//! Two item records are compared attribute by attribute. Which attributes
//! count, and how much, depends on the garment type; colors and silhouettes
//! are compared through equivalence families so "Navy" and "Teal" agree
//! while "Black" and "Grey" do not.
//!
//! ## Features
//!
//! - **Attribute matchers**: exact, color-family, silhouette-family and pattern-normalizing predicates
//! - **Category weights**: per-garment weight tables (basic tops, bottoms, outerwear, footwear, default)
//! - **Scorer**: integer 0-100 score over the attributes both items specify
//! - **Explainability**: per-attribute breakdown of every score
//! - **Duplicate detection**: threshold scans of a wardrobe, in parallel
//!
//! ## Example
//!
//! ```rust
//! use closetx_core::{Attribute, ItemAttributes};
//! use closetx_similarity::calculate_similarity_score;
//!
//! let a = ItemAttributes::new("top", "t-shirt")
//!     .with(Attribute::Color, "Black")
//!     .with(Attribute::Neckline, "Crew")
//!     .with(Attribute::Sleeves, "Short")
//!     .with(Attribute::Style, "Casual");
//! let b = ItemAttributes::new("top", "t-shirt")
//!     .with(Attribute::Color, "Black")
//!     .with(Attribute::Neckline, "Crew")
//!     .with(Attribute::Sleeves, "Long")
//!     .with(Attribute::Style, "Casual");
//!
//! assert_eq!(calculate_similarity_score(&a, &b), 86);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │  Families   │────>│  Matchers   │──────┐
//! │ (colors,    │     │ (per attr)  │      │
//! │ silhouettes)│     └─────────────┘      v
//! └─────────────┘                   ┌─────────────┐     ┌─────────────┐
//!                                   │   Scorer    │────>│  Detector   │
//! ┌─────────────┐                   │  (0..=100)  │     │ (wardrobe)  │
//! │   Weights   │──────────────────>└─────────────┘     └─────────────┘
//! │ (per class) │                          │
//! └─────────────┘                   ┌─────────────┐
//!                                   │   Explain   │
//!                                   └─────────────┘
//! ```

pub mod families;
pub mod matchers;
pub mod weights;
pub mod scorer;
pub mod explain;
pub mod detector;

// Re-export main types for convenience
pub use matchers::{
    simple_match,
    colors_match,
    silhouettes_match,
    pattern_matches,
    attribute_matches,
    canonical_color,
    canonical_silhouette,
};
pub use weights::{get_category_weights, CategoryWeights, WeightProfile};
pub use scorer::{calculate_similarity_score, categories_match, MAX_SCORE};
pub use explain::{score_breakdown, AttributeOutcome, ScoreBreakdown, SimilarityStats};
pub use detector::{
    DetectorConfig,
    DuplicateDetector,
    DuplicateMatch,
    DuplicatePair,
    DuplicateReport,
    DEFAULT_THRESHOLD,
};
