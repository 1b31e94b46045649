//! Caller-Facing Analysis Views
//!
//! Shapes returned to the capture UI. Percentages are rounded here for
//! display only; filtering always works on the unrounded scores.

use serde::{Deserialize, Serialize};

use crate::value_objects::{FilteredResult, SearchHit};

/// Convert a `[0, 1]` score into a rounded display percentage
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}

/// Count of one pack type reported by the counting pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackCount {
    /// Category label of the detected packs
    #[serde(rename = "type")]
    pub category: String,
    /// Brand of the detected packs
    #[serde(default)]
    pub brand: String,
    /// Number of packs detected
    pub count: u32,
    /// Detector confidence in `[0, 1]`
    pub confidence: f64,
}

/// One similarity match as shown to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    /// Catalog identity
    pub identity: String,
    /// Display name
    pub display_name: String,
    /// Similarity, as a rounded percentage
    pub similarity_percent: u32,
}

impl From<&SearchHit> for MatchView {
    fn from(hit: &SearchHit) -> Self {
        Self {
            identity: hit.item.id.to_string(),
            display_name: hit.item.display_name.clone(),
            similarity_percent: to_percent(hit.similarity),
        }
    }
}

/// One pack count as shown to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountView {
    /// Category label
    #[serde(rename = "type")]
    pub category: String,
    /// Brand
    pub brand: String,
    /// Number of packs
    pub count: u32,
    /// Confidence, as a rounded percentage
    pub confidence_percent: u32,
}

impl From<&PackCount> for CountView {
    fn from(count: &PackCount) -> Self {
        Self {
            category: count.category.clone(),
            brand: count.brand.clone(),
            count: count.count,
            confidence_percent: to_percent(count.confidence),
        }
    }
}

/// Joined result of analyzing one shelf photo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Similarity matches, best first
    pub matches: Vec<MatchView>,
    /// Pack counts, unordered
    pub counts: Vec<CountView>,
}

impl AnalysisReport {
    /// Build the caller view from a filtered result and pack counts
    pub fn from_parts(matches: &FilteredResult, counts: &[PackCount]) -> Self {
        Self {
            matches: matches.hits().iter().map(MatchView::from).collect(),
            counts: counts.iter().map(CountView::from).collect(),
        }
    }
}
