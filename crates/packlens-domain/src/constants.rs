//! Domain layer constants
//!
//! Defaults for indexing, search and result filtering. Infrastructure-specific
//! constants (config file names, log defaults) live in `packlens-infrastructure`.

// ============================================================================
// INDEX DOMAIN CONSTANTS
// ============================================================================

/// Embedding dimension the catalog index is created with
pub const EMBEDDING_DIMENSIONS: usize = 2048;

/// Name of the vector index holding catalog embeddings
pub const DEFAULT_INDEX_NAME: &str = "catalog_embeddings";

/// Category searched when the caller does not name one
pub const DEFAULT_PRODUCT_CATEGORY: &str = "product";

/// Current version of the catalog record schema
pub const CATALOG_RECORD_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// MAINTENANCE DOMAIN CONSTANTS
// ============================================================================

/// Number of pending catalog changes applied per index batch
pub const MAINTENANCE_BATCH_SIZE: usize = 3;

/// Pause between two index batches, in milliseconds
pub const MAINTENANCE_COOLDOWN_MS: u64 = 500;

// ============================================================================
// SEARCH AND FILTER DOMAIN CONSTANTS
// ============================================================================

/// Nearest neighbours requested from the index per query
pub const SEARCH_DEFAULT_LIMIT: usize = 5;

/// Hits below this similarity are never reported
pub const FILTER_SIMILARITY_FLOOR: f64 = 0.85;

/// The best hit must reach this similarity or the result is empty
pub const FILTER_BEST_MATCH_GATE: f64 = 0.90;

/// Hits must reach this fraction of the best similarity
pub const FILTER_RELATIVE_GAP: f64 = 0.9;

/// Slack on the inclusive filter thresholds
///
/// Embeddings are stored as `f32`, so a similarity that is exactly at a
/// threshold can arrive a few ulps of `f32` below it.
pub const FILTER_SIMILARITY_TOLERANCE: f64 = 1e-6;

/// Maximum number of hits in a filtered result
pub const FILTER_MAX_RESULTS: usize = 3;
