//! Null embedding provider for testing and development
//!
//! Provides deterministic, digest-based embeddings. Identical image bytes
//! always produce the identical unit vector; different bytes produce
//! vectors that are close to orthogonal. No external dependencies - always
//! works offline.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use packlens_application::ports::EmbeddingProvider;
use packlens_domain::constants::EMBEDDING_DIMENSIONS;
use packlens_domain::error::Result;
use packlens_domain::{EmbedOutcome, Embedding, ImagePayload};

use crate::constants::{NULL_EMBEDDING_MIN_PAYLOAD_BYTES, NULL_EMBEDDING_MODEL};
use crate::utils::l2_norm;

/// Null embedding provider for testing
///
/// Rejects payloads below a minimum size, the way a real model rejects an
/// empty or unreadable frame.
///
/// # Example
///
/// ```rust
/// use packlens_providers::embedding::NullEmbeddingProvider;
/// use packlens_application::ports::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 2048);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
    min_payload_bytes: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider with the default dimension
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSIONS)
    }

    /// Create a provider producing vectors of the given dimension
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions,
            min_payload_bytes: NULL_EMBEDDING_MIN_PAYLOAD_BYTES,
        }
    }

    /// Reject payloads smaller than `bytes`
    #[must_use]
    pub fn with_min_payload_bytes(mut self, bytes: usize) -> Self {
        self.min_payload_bytes = bytes;
        self
    }

    /// Deterministic unit vector for the given bytes
    pub fn vector_for(&self, bytes: &[u8]) -> Vec<f32> {
        let seed = Sha256::digest(bytes);
        let mut vector = Vec::with_capacity(self.dimensions);
        let mut counter: u32 = 0;

        while vector.len() < self.dimensions {
            let block = Sha256::new()
                .chain_update(seed)
                .chain_update(counter.to_le_bytes())
                .finalize();
            for word in block.chunks_exact(4) {
                if vector.len() == self.dimensions {
                    break;
                }
                let raw = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
                #[allow(clippy::cast_precision_loss)]
                let unit = raw as f32 / u32::MAX as f32;
                vector.push(unit * 2.0 - 1.0);
            }
            counter += 1;
        }

        let norm = l2_norm(&vector);
        if norm > 0.0 {
            for v in &mut vector {
                #[allow(clippy::cast_possible_truncation)]
                let unit = (f64::from(*v) / norm) as f32;
                *v = unit;
            }
        }
        vector
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed(&self, image: &ImagePayload) -> Result<EmbedOutcome> {
        if image.len() < self.min_payload_bytes {
            return Ok(EmbedOutcome::rejected(format!(
                "image payload too small ({} bytes)",
                image.len()
            )));
        }

        Ok(EmbedOutcome::Embedded(Embedding::new(
            self.vector_for(&image.bytes),
            NULL_EMBEDDING_MODEL,
        )))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use packlens_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

/// Factory function for creating null embedding provider instances.
fn null_embedding_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let mut provider =
        NullEmbeddingProvider::with_dimensions(config.dimensions.unwrap_or(EMBEDDING_DIMENSIONS));
    if let Some(raw) = config.extra.get("min_payload_bytes") {
        let bytes = raw
            .parse()
            .map_err(|e| format!("Invalid min_payload_bytes '{raw}': {e}"))?;
        provider = provider.with_min_payload_bytes(bytes);
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic digest-based embeddings)",
    factory: null_embedding_factory,
};
