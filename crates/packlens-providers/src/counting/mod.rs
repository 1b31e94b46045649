//! Counting Pipeline Implementations
//!
//! Detects packs on a shelf photo and counts them per type.
//!
//! ## Available Pipelines
//!
//! | Pipeline | Type | Status |
//! |----------|------|--------|
//! | NullCountingPipeline | Testing | Complete |
//! | HttpCountingPipeline | Remote detection service | Complete |

#[cfg(feature = "counting-http")]
pub mod http;
pub mod null;

#[cfg(feature = "counting-http")]
pub use http::HttpCountingPipeline;
pub use null::NullCountingPipeline;
