//! # PackLens Domain Layer
//!
//! Core types for the shelf-photo similarity engine: catalog entities,
//! embedding and search value objects, domain events and the port traits
//! implemented by providers.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Catalog items and their versioned record schema |
//! | [`value_objects`] | Embeddings, index batches, search hits, analysis views |
//! | [`events`] | Domain events carried over the event bus |
//! | [`ports`] | Provider and infrastructure contracts |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Indexing, search and filtering defaults |

pub mod constants;
pub mod entities;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

pub use entities::{CatalogItem, CatalogRecord, ItemId};
pub use error::{Error, Result};
pub use events::DomainEvent;
pub use value_objects::{
    AnalysisReport, CountView, EmbedOutcome, Embedding, FilteredResult, ImagePayload, IndexBatch,
    IndexCursor, IndexEntry, IndexMatch, IndexStats, MatchView, PackCount, PendingChange,
    PendingKind, SearchHit, VectorQuery,
};
