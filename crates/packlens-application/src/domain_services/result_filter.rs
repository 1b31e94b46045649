//! Result Filter
//!
//! Turns raw nearest-neighbour hits into a small, high-confidence result.
//! Four layers are applied in order:
//!
//! 1. **Absolute floor**: hits below `similarity_floor` are dropped
//! 2. **Best-match gate**: if the best remaining hit is below
//!    `best_match_gate`, the whole result is empty
//! 3. **Relative gap**: hits below `best * relative_gap` are dropped
//! 4. **Cap**: at most `max_results` hits are kept
//!
//! All three thresholds are inclusive, within
//! [`FILTER_SIMILARITY_TOLERANCE`] to absorb `f32` rounding of stored
//! embeddings.
//!
//! An empty result means "no confident match" and is never an error.

use packlens_domain::constants::{
    FILTER_BEST_MATCH_GATE, FILTER_MAX_RESULTS, FILTER_RELATIVE_GAP, FILTER_SIMILARITY_FLOOR,
    FILTER_SIMILARITY_TOLERANCE,
};
use packlens_domain::{FilteredResult, SearchHit};
use serde::{Deserialize, Serialize};

/// Threshold set used by [`ResultFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterThresholds {
    /// Minimum similarity of any reported hit
    pub similarity_floor: f64,
    /// Minimum similarity of the best hit (inclusive)
    pub best_match_gate: f64,
    /// Fraction of the best similarity every hit must reach
    pub relative_gap: f64,
    /// Maximum number of reported hits
    pub max_results: usize,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self {
            similarity_floor: FILTER_SIMILARITY_FLOOR,
            best_match_gate: FILTER_BEST_MATCH_GATE,
            relative_gap: FILTER_RELATIVE_GAP,
            max_results: FILTER_MAX_RESULTS,
        }
    }
}

/// Layered similarity filter
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultFilter {
    thresholds: FilterThresholds,
}

impl ResultFilter {
    /// Create a filter with explicit thresholds
    pub fn new(thresholds: FilterThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> &FilterThresholds {
        &self.thresholds
    }

    /// Filter raw hits into a result ordered best first
    ///
    /// Input order does not matter. Hits with a non-finite similarity never
    /// pass the floor.
    pub fn apply(&self, mut hits: Vec<SearchHit>) -> FilteredResult {
        let t = &self.thresholds;

        let reaches = |similarity: f64, threshold: f64| {
            similarity + FILTER_SIMILARITY_TOLERANCE >= threshold
        };

        hits.retain(|hit| {
            hit.similarity.is_finite() && reaches(hit.similarity, t.similarity_floor)
        });
        hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

        let Some(best) = hits.first().map(|hit| hit.similarity) else {
            return FilteredResult::empty();
        };
        if !reaches(best, t.best_match_gate) {
            tracing::debug!(best, gate = t.best_match_gate, "Best match below gate");
            return FilteredResult::empty();
        }

        let cutoff = best * t.relative_gap;
        hits.retain(|hit| reaches(hit.similarity, cutoff));
        hits.truncate(t.max_results);

        FilteredResult::new(hits)
    }
}
