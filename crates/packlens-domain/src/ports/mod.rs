//! Domain Port Interfaces
//!
//! Defines all boundary contracts between domain and external layers.
//!
//! ## Organization
//!
//! - **infrastructure/** - Infrastructure services (event bus)
//! - **providers/** - External collaborators (embedding model, counting
//!   pipeline, catalog store, vector index)

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::{DomainEventStream, EventBusProvider};
pub use providers::{
    CatalogStore, CountingPipeline, EmbeddingProvider, VectorIndexAdmin, VectorIndexProvider,
};
