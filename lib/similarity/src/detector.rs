//! Duplicate detection over a wardrobe
//!
//! Applies the pairwise scorer to a candidate against every stored item, or
//! to every unordered pair of a wardrobe. Each pair is scored independently,
//! so the scans fan out over rayon when [`DetectorConfig::parallel`] is set.

use crate::explain::{score_breakdown, ScoreBreakdown, SimilarityStats};
use crate::scorer::{calculate_similarity_score, MAX_SCORE};
use closetx_core::{Error, ItemAttributes, ItemId, Result, WardrobeItem};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;
use tracing::debug;

/// Score at or above which two items are reported as duplicates
pub const DEFAULT_THRESHOLD: u8 = 80;

/// Duplicate detector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectorConfig {
    /// Minimum score (inclusive) for a duplicate, 0 to 100
    pub threshold: u8,
    /// Keep at most this many results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
    /// Score pairs on the rayon thread pool
    pub parallel: bool,
    /// Attach a [`ScoreBreakdown`] to every result
    pub include_breakdown: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_results: None,
            parallel: true,
            include_breakdown: false,
        }
    }
}

impl DetectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.threshold > MAX_SCORE {
            return Err(Error::InvalidConfig(format!(
                "threshold must be at most {}, got {}",
                MAX_SCORE, self.threshold
            )));
        }
        if self.max_results == Some(0) {
            return Err(Error::InvalidConfig(
                "maxResults must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    #[must_use]
    pub fn with_breakdown(mut self) -> Self {
        self.include_breakdown = true;
        self
    }

    /// Score pairs on the calling thread
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// A stored item that looks like a duplicate of the candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateMatch {
    pub id: ItemId,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

/// Two stored items that look like duplicates of each other
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicatePair {
    pub first: ItemId,
    pub second: ItemId,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

/// Result of scanning one candidate against a wardrobe
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateReport {
    pub result: Vec<DuplicateMatch>,
    pub stats: SimilarityStats,
}

#[derive(Debug, Clone, Default)]
pub struct DuplicateDetector {
    config: DetectorConfig,
}

impl DuplicateDetector {
    /// Create a detector; fails if the configuration is invalid
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Whether two records score at or above the threshold
    pub fn is_duplicate(&self, new_item: &ItemAttributes, existing_item: &ItemAttributes) -> bool {
        calculate_similarity_score(new_item, existing_item) >= self.config.threshold
    }

    /// Score a new record against every wardrobe item.
    ///
    /// Returns matches at or above the threshold, best first, ties broken by id.
    pub fn find_duplicates(
        &self,
        candidate: &ItemAttributes,
        wardrobe: &[WardrobeItem],
    ) -> Vec<DuplicateMatch> {
        self.scan(candidate, None, wardrobe)
    }

    /// Like [`find_duplicates`](Self::find_duplicates) for an item already
    /// stored in the wardrobe; the item is never reported against itself.
    pub fn find_duplicates_of(
        &self,
        item: &WardrobeItem,
        wardrobe: &[WardrobeItem],
    ) -> Vec<DuplicateMatch> {
        self.scan(&item.attributes, Some(&item.id), wardrobe)
    }

    /// [`find_duplicates`](Self::find_duplicates) plus summary statistics
    pub fn report(&self, candidate: &ItemAttributes, wardrobe: &[WardrobeItem]) -> DuplicateReport {
        let result = self.find_duplicates(candidate, wardrobe);
        let stats = SimilarityStats::compute(&result, wardrobe.len());
        DuplicateReport { result, stats }
    }

    /// Every unordered pair of wardrobe items at or above the threshold.
    ///
    /// Pairs are scored as `(items[i], items[j])` with `i < j`.
    pub fn find_duplicate_pairs(&self, wardrobe: &[WardrobeItem]) -> Vec<DuplicatePair> {
        let n = wardrobe.len();
        let evaluate = |i: usize, j: usize| {
            let (first, second) = (&wardrobe[i], &wardrobe[j]);
            self.evaluate(&first.attributes, &second.attributes)
                .map(|(score, breakdown)| DuplicatePair {
                    first: first.id.clone(),
                    second: second.id.clone(),
                    score,
                    breakdown,
                })
        };

        let mut pairs: Vec<DuplicatePair> = if self.config.parallel {
            (0..n)
                .into_par_iter()
                .flat_map_iter(|i| ((i + 1)..n).filter_map(move |j| evaluate(i, j)))
                .collect()
        } else {
            (0..n)
                .flat_map(|i| ((i + 1)..n).filter_map(move |j| evaluate(i, j)))
                .collect()
        };

        pairs.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.first.cmp(&b.first))
                .then_with(|| a.second.cmp(&b.second))
        });
        if let Some(max) = self.config.max_results {
            pairs.truncate(max);
        }

        debug!(
            items = n,
            pairs = pairs.len(),
            threshold = self.config.threshold,
            "pairwise duplicate scan complete"
        );
        pairs
    }

    fn scan(
        &self,
        candidate: &ItemAttributes,
        exclude: Option<&ItemId>,
        wardrobe: &[WardrobeItem],
    ) -> Vec<DuplicateMatch> {
        let evaluate = |item: &WardrobeItem| {
            if exclude == Some(&item.id) {
                return None;
            }
            self.evaluate(candidate, &item.attributes)
                .map(|(score, breakdown)| DuplicateMatch {
                    id: item.id.clone(),
                    score,
                    breakdown,
                })
        };

        let mut matches: Vec<DuplicateMatch> = if self.config.parallel {
            wardrobe.par_iter().filter_map(evaluate).collect()
        } else {
            wardrobe.iter().filter_map(evaluate).collect()
        };

        matches.sort_by(compare_matches);
        if let Some(max) = self.config.max_results {
            matches.truncate(max);
        }

        debug!(
            candidates = wardrobe.len(),
            matches = matches.len(),
            threshold = self.config.threshold,
            "duplicate scan complete"
        );
        matches
    }

    /// Score a pair, keeping it only if it reaches the threshold
    fn evaluate(
        &self,
        new_item: &ItemAttributes,
        existing_item: &ItemAttributes,
    ) -> Option<(u8, Option<ScoreBreakdown>)> {
        if self.config.include_breakdown {
            let breakdown = score_breakdown(new_item, existing_item);
            (breakdown.score >= self.config.threshold).then(|| (breakdown.score, Some(breakdown)))
        } else {
            let score = calculate_similarity_score(new_item, existing_item);
            (score >= self.config.threshold).then_some((score, None))
        }
    }
}

fn compare_matches(a: &DuplicateMatch, b: &DuplicateMatch) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}
