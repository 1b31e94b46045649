//! # PackLens - Provider Implementations
//!
//! This crate contains all user-selectable provider implementations. Each
//! provider implements a port (trait) defined in `packlens-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Http, Null |
//! | Counting | `CountingPipeline` | Http, Null |
//! | Catalog | `CatalogStore` | InMemory |
//! | Vector Index | `VectorIndexProvider` | InMemory (optional JSON snapshot) |
//! | Events | `EventBusProvider` | Tokio, Null |
//!
//! ## Feature Flags
//!
//! Remote providers can be disabled for minimal builds:
//!
//! ```toml
//! [dependencies]
//! packlens-providers = { version = "0.1", default-features = false }
//! ```

// Re-export packlens-domain types commonly used with providers
pub use packlens_domain::error::{Error, Result};
pub use packlens_domain::ports::providers::{
    CatalogStore, CountingPipeline, EmbeddingProvider, VectorIndexAdmin, VectorIndexProvider,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
pub mod embedding;

/// Counting pipeline implementations
pub mod counting;

/// Catalog store implementations
pub mod catalog;

/// Vector index implementations
pub mod vector_index;

/// Event bus implementations
pub mod events;
