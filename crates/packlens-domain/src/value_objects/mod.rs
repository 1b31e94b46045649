//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of an image |
//! | [`ImagePayload`] | Raw image bytes handed to providers |
//! | [`IndexCursor`] | Catalog sequence applied to the index |
//! | [`IndexBatch`] | One atomic unit of index maintenance |
//! | [`SearchHit`] | Catalog item with its similarity to a query |
//! | [`FilteredResult`] | High-confidence hits reported to callers |
//! | [`PackCount`] | Counting pipeline output for one pack type |

/// Caller-facing analysis views
pub mod analysis;
/// Embedding and image payload value objects
pub mod embedding;
/// Vector index value objects
pub mod index;
/// Search-related value objects
pub mod search;

pub use analysis::{AnalysisReport, CountView, MatchView, PackCount, to_percent};
pub use embedding::{EmbedOutcome, Embedding, ImagePayload};
pub use index::{
    IndexBatch, IndexCursor, IndexEntry, IndexStats, PendingChange, PendingKind,
};
pub use search::{FilteredResult, IndexMatch, SearchHit, VectorQuery};
