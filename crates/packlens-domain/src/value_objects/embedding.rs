//! Image Embedding Value Objects
//!
//! Value objects representing learned image embeddings and the raw
//! image payloads they are computed from.

use serde::{Deserialize, Serialize};

/// Value Object: Image Embedding
///
/// Represents the vector an embedding model produced for one image.
///
/// ## Business Rules
///
/// - Vector must contain at least one element
/// - `dimensions` equals `vector.len()`
/// - Model name identifies the embedding generation method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding, deriving `dimensions` from the vector
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }
}

/// Outcome of asking a provider to embed an image
///
/// A rejection is a normal outcome for low-quality input (blur, glare, empty
/// frame) and is handled like "no match" upstream. Transport and model
/// failures are reported as `Err` by the provider instead.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbedOutcome {
    /// The image was embedded
    Embedded(Embedding),
    /// The provider refused the image
    Rejected {
        /// Provider-supplied reason
        reason: String,
    },
}

impl EmbedOutcome {
    /// Shorthand for a rejection
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    /// The embedding, if the image was accepted
    pub fn into_embedding(self) -> Option<Embedding> {
        match self {
            Self::Embedded(embedding) => Some(embedding),
            Self::Rejected { .. } => None,
        }
    }
}

/// Raw image bytes plus their media type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Encoded image bytes
    pub bytes: Vec<u8>,
    /// MIME type of the encoded bytes
    pub content_type: String,
}

impl ImagePayload {
    /// Create a payload with an explicit media type
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    /// Create a JPEG payload, the format cameras hand us by default
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "image/jpeg")
    }

    /// Size of the encoded image in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload carries no bytes at all
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
