//! Application Ports
//!
//! Re-exports the domain port traits used by the use cases and declares the
//! provider registries.
//!
//! ## Organization
//!
//! - **registry/** - Auto-registration system for plugin providers
//! - Domain ports (catalog store, vector index, embedding, counting, event
//!   bus) are re-exported from `packlens-domain`

/// Provider registry for dynamic provider discovery
pub mod registry;

pub use packlens_domain::ports::{
    CatalogStore, CountingPipeline, DomainEventStream, EmbeddingProvider, EventBusProvider,
    VectorIndexAdmin, VectorIndexProvider,
};
pub use registry::{
    CountingPipelineConfig, CountingPipelineEntry, EmbeddingProviderConfig, EmbeddingProviderEntry,
    list_counting_pipelines, list_embedding_providers, resolve_counting_pipeline,
    resolve_embedding_provider,
};
