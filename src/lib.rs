//! # closetx
//!
//! Duplicate detection for wardrobe items.
//!
//! closetx decides how similar two wardrobe items are on a 0-100 scale. The
//! score weighs attributes by garment type and compares colors and
//! silhouettes through equivalence families, so a navy tee and a teal tee
//! with the same neckline are flagged as likely duplicates.
//!
//! ## Quick Start
//!
//! ```rust
//! use closetx::prelude::*;
//!
//! let heels = ItemAttributes::new("footwear", "heels")
//!     .with(Attribute::Color, "Black")
//!     .with(Attribute::HeelHeight, "High")
//!     .with(Attribute::Style, "Elegant");
//! let flats = ItemAttributes::new("footwear", "heels")
//!     .with(Attribute::Color, "Black")
//!     .with(Attribute::HeelHeight, "Low")
//!     .with(Attribute::Style, "Elegant");
//!
//! assert_eq!(calculate_similarity_score(&heels, &flats), 60);
//!
//! // Scan a wardrobe for likely duplicates of a new item
//! let wardrobe = vec![WardrobeItem::new("shoe-1", flats)];
//! let detector = DuplicateDetector::new(DetectorConfig::default().with_threshold(50)).unwrap();
//! let matches = detector.find_duplicates(&heels, &wardrobe);
//! assert_eq!(matches.len(), 1);
//! ```
//!
//! ## Crate Structure
//!
//! - `closetx-core` - item records, attributes, identifiers and errors
//! - `closetx-similarity` - matchers, weight tables, scorer, explanations and duplicate detection
//!
//! ## Concurrency
//!
//! Scoring is a pure function over two records. The family and weight tables
//! are read-only statics, so any number of threads may score concurrently;
//! [`DuplicateDetector`] uses rayon to fan scans out across cores.

// Re-export core types
pub use closetx_core::{Attribute, Error, ItemAttributes, ItemId, Result, WardrobeItem};

// Re-export the similarity engine
pub use closetx_similarity::{
    attribute_matches, calculate_similarity_score, canonical_color, canonical_silhouette,
    categories_match, colors_match, get_category_weights, pattern_matches, score_breakdown,
    silhouettes_match, simple_match, AttributeOutcome, CategoryWeights, DetectorConfig,
    DuplicateDetector, DuplicateMatch, DuplicatePair, DuplicateReport, ScoreBreakdown,
    SimilarityStats, WeightProfile, DEFAULT_THRESHOLD, MAX_SCORE,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Attribute, ItemAttributes, ItemId, WardrobeItem,
        Error, Result,
        calculate_similarity_score, score_breakdown,
        get_category_weights, WeightProfile,
        DetectorConfig, DuplicateDetector, DuplicateMatch, ScoreBreakdown,
    };
}

/// Equivalence predicates and family tables
pub mod matchers {
    pub use closetx_similarity::families::{COLOR_FAMILIES, SILHOUETTE_FAMILIES};
    pub use closetx_similarity::matchers::*;
}
