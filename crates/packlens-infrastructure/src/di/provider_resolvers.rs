//! Provider Resolvers - resolve model providers from the linkme registry
//!
//! ## Pattern
//!
//! ```text
//! AppConfig → Resolver → linkme registry → Arc<dyn Provider>
//! ```

use crate::config::AppConfig;
use packlens_application::ports::registry::{
    CountingPipelineConfig, EmbeddingProviderConfig, list_counting_pipelines,
    list_embedding_providers, resolve_counting_pipeline, resolve_embedding_provider,
};
use packlens_application::ports::{CountingPipeline, EmbeddingProvider};
use std::sync::Arc;

// ============================================================================
// Embedding Provider Resolver
// ============================================================================

/// Resolver component for embedding providers
///
/// The provider is always created with the configured index dimension.
pub struct EmbeddingProviderResolver {
    config: Arc<AppConfig>,
}

impl EmbeddingProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Registry configuration derived from the application config
    pub fn registry_config(&self) -> EmbeddingProviderConfig {
        self.config
            .embedding
            .to_registry(self.config.index.dimensions)
    }

    /// Resolve provider from current application config
    pub fn resolve_from_config(&self) -> Result<Arc<dyn EmbeddingProvider>, String> {
        resolve_embedding_provider(&self.registry_config())
    }

    /// Resolve provider from override config
    pub fn resolve_from_override(
        &self,
        override_config: &EmbeddingProviderConfig,
    ) -> Result<Arc<dyn EmbeddingProvider>, String> {
        resolve_embedding_provider(override_config)
    }

    /// List available embedding providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_embedding_providers()
    }
}

impl std::fmt::Debug for EmbeddingProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingProviderResolver")
            .field("provider", &self.config.embedding.provider)
            .finish()
    }
}

// ============================================================================
// Counting Pipeline Resolver
// ============================================================================

/// Resolver component for counting pipelines
pub struct CountingPipelineResolver {
    config: Arc<AppConfig>,
}

impl CountingPipelineResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve pipeline from current application config
    pub fn resolve_from_config(&self) -> Result<Arc<dyn CountingPipeline>, String> {
        resolve_counting_pipeline(&CountingPipelineConfig::from(&self.config.counting))
    }

    /// Resolve pipeline from override config
    pub fn resolve_from_override(
        &self,
        override_config: &CountingPipelineConfig,
    ) -> Result<Arc<dyn CountingPipeline>, String> {
        resolve_counting_pipeline(override_config)
    }

    /// List available counting pipelines
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_counting_pipelines()
    }
}

impl std::fmt::Debug for CountingPipelineResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountingPipelineResolver")
            .field("provider", &self.config.counting.provider)
            .finish()
    }
}
