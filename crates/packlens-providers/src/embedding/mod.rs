//! Embedding Provider Implementations
//!
//! Converts product images into dense vectors for similarity search.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | HttpEmbeddingProvider | Remote model service | Complete |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: `NullEmbeddingProvider` (deterministic, offline)
//! - **Production**: `HttpEmbeddingProvider` pointed at the model server

#[cfg(feature = "embedding-http")]
pub mod http;
pub mod null;

#[cfg(feature = "embedding-http")]
pub use http::HttpEmbeddingProvider;
pub use null::NullEmbeddingProvider;
