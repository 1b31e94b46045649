//! Index, maintenance, search and filter configuration types

use std::path::PathBuf;
use std::time::Duration;

use packlens_application::{FilterThresholds, MaintenancePolicy, SearchSettings};
use packlens_domain::constants::{
    DEFAULT_INDEX_NAME, DEFAULT_PRODUCT_CATEGORY, EMBEDDING_DIMENSIONS, FILTER_BEST_MATCH_GATE,
    FILTER_MAX_RESULTS, FILTER_RELATIVE_GAP, FILTER_SIMILARITY_FLOOR, MAINTENANCE_BATCH_SIZE,
    MAINTENANCE_COOLDOWN_MS, SEARCH_DEFAULT_LIMIT,
};
use serde::{Deserialize, Serialize};

use crate::constants::QUIESCENCE_TIMEOUT_SECS;

/// Vector index configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Index name
    pub name: String,
    /// Embedding dimension, fixed when the index is created
    pub dimensions: usize,
    /// Snapshot file; the index is memory-only when unset
    pub snapshot_path: Option<PathBuf>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_INDEX_NAME.to_string(),
            dimensions: EMBEDDING_DIMENSIONS,
            snapshot_path: None,
        }
    }
}

/// Index maintenance configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceConfig {
    /// Catalog changes per batch
    pub batch_size: usize,
    /// Pause between batches in milliseconds
    pub cooldown_ms: u64,
    /// How long to wait for the index to catch up after an ingestion
    pub quiescence_timeout_secs: u64,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            batch_size: MAINTENANCE_BATCH_SIZE,
            cooldown_ms: MAINTENANCE_COOLDOWN_MS,
            quiescence_timeout_secs: QUIESCENCE_TIMEOUT_SECS,
        }
    }
}

impl MaintenanceConfig {
    /// Maintainer policy
    pub fn policy(&self) -> MaintenancePolicy {
        MaintenancePolicy {
            batch_size: self.batch_size,
            cooldown: Duration::from_millis(self.cooldown_ms),
        }
    }
}

/// Similarity search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Nearest neighbours requested per photo
    pub limit: usize,
    /// Category photo searches are restricted to; empty searches everything
    pub category: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: SEARCH_DEFAULT_LIMIT,
            category: DEFAULT_PRODUCT_CATEGORY.to_string(),
        }
    }
}

impl SearchConfig {
    /// Search settings against the index named `index`
    pub fn settings(&self, index: &str) -> SearchSettings {
        SearchSettings {
            index: index.to_string(),
            limit: self.limit,
            category: Some(self.category.clone()).filter(|c| !c.is_empty()),
        }
    }
}

/// Result filter configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum similarity of any reported hit
    pub similarity_floor: f64,
    /// Minimum similarity of the best hit
    pub best_match_gate: f64,
    /// Fraction of the best similarity every hit must reach
    pub relative_gap: f64,
    /// Maximum number of reported hits
    pub max_results: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            similarity_floor: FILTER_SIMILARITY_FLOOR,
            best_match_gate: FILTER_BEST_MATCH_GATE,
            relative_gap: FILTER_RELATIVE_GAP,
            max_results: FILTER_MAX_RESULTS,
        }
    }
}

impl From<&FilterConfig> for FilterThresholds {
    fn from(config: &FilterConfig) -> Self {
        Self {
            similarity_floor: config.similarity_floor,
            best_match_gate: config.best_match_gate,
            relative_gap: config.relative_gap,
            max_results: config.max_results,
        }
    }
}
