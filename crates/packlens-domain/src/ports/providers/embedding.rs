use crate::error::Result;
use crate::value_objects::{EmbedOutcome, ImagePayload};
use async_trait::async_trait;

/// Image Embedding Interface
///
/// Maps an image to a fixed-length vector, or rejects it as unusable. The
/// model behind it is a black box to the engine; the same provider embeds
/// catalog reference images and shelf photos so their vectors are
/// comparable.
///
/// # Example
///
/// ```ignore
/// use packlens_domain::ports::providers::EmbeddingProvider;
/// use packlens_domain::EmbedOutcome;
///
/// match provider.embed(&photo).await? {
///     EmbedOutcome::Embedded(embedding) => index_query(embedding.vector),
///     EmbedOutcome::Rejected { reason } => tracing::info!("photo rejected: {reason}"),
/// }
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed one image
    ///
    /// # Returns
    /// `Embedded` on success, `Rejected` for low-quality input, `Err` when
    /// the model could not be reached or answered garbage.
    async fn embed(&self, image: &ImagePayload) -> Result<EmbedOutcome>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
