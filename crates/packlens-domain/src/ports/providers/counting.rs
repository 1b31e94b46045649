use crate::error::Result;
use crate::value_objects::{ImagePayload, PackCount};
use async_trait::async_trait;

/// Pack Counting Interface
///
/// Detects packs on a shelf photo and counts them per type. Independent of
/// similarity search; the orchestrator runs both over the same photo.
#[async_trait]
pub trait CountingPipeline: Send + Sync {
    /// Count packs per type on the photo
    ///
    /// # Returns
    /// One entry per detected type; an empty list when nothing was detected.
    async fn analyze(&self, image: &ImagePayload) -> Result<Vec<PackCount>>;

    /// Get the name/identifier of this pipeline implementation
    fn provider_name(&self) -> &str;
}
