//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for plugin providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = http" → HttpEmbeddingProvider│
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in packlens-providers)
//!
//! ```ignore
//! use packlens_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static HTTP_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "http",
//!     description: "Remote image embedding model over HTTP",
//!     factory: |config| Ok(Arc::new(HttpEmbeddingProvider::from_config(config)?)),
//! };
//! ```
//!
//! ### Resolving a Provider (in packlens-infrastructure)
//!
//! ```ignore
//! use packlens_application::ports::registry::resolve_embedding_provider;
//!
//! let config = EmbeddingProviderConfig::new("http").with_base_url("http://models:8080");
//! let provider = resolve_embedding_provider(&config)?;
//! ```

pub mod counting;
pub mod embedding;

pub use counting::{
    COUNTING_PIPELINES, CountingPipelineConfig, CountingPipelineEntry, list_counting_pipelines,
    resolve_counting_pipeline,
};
pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
