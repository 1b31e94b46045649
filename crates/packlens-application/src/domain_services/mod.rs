//! Domain Services
//!
//! Interfaces and pure services that encapsulate the search-side business
//! rules.
//!
//! ## Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`ResultFilter`] | Layered thresholds turning raw hits into a confident result |
//! | [`SimilaritySearchInterface`] | Photo and vector similarity search |
//! | [`AnalysisServiceInterface`] | Joined similarity search and pack counting |

/// Photo analysis service interface
pub mod analysis;
/// Result filtering domain service
pub mod result_filter;
/// Similarity search service interface
pub mod search;

pub use analysis::{AnalysisOutcome, AnalysisServiceInterface};
pub use result_filter::{FilterThresholds, ResultFilter};
pub use search::SimilaritySearchInterface;
