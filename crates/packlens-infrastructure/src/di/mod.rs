//! Application wiring
//!
//! Composition root: providers are resolved from the linkme registries,
//! services are constructed explicitly and gathered in [`AppContext`].
//! There is no global container.

pub mod bootstrap;
pub mod provider_resolvers;

pub use bootstrap::{AppContext, init_app};
pub use provider_resolvers::{CountingPipelineResolver, EmbeddingProviderResolver};
