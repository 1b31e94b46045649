//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

mod http_response;
mod vector;

pub use http_response::{ErrorFactory, HttpResponseUtils};
pub use vector::{cosine_distance, l2_norm};
