use crate::entities::{CatalogItem, ItemId};
use crate::error::Result;
use crate::value_objects::{ImagePayload, IndexCursor, PendingChange};
use async_trait::async_trait;
use serde_json::Value;

/// Catalog Store Interface
///
/// The system of record for catalog items. Every mutation receives a
/// monotonically increasing sequence number; the index maintainer asks for
/// changes past its cursor instead of reading the catalog wholesale.
///
/// Implementations publish `CatalogItemStored` / `CatalogItemDeleted` events
/// when they are wired to an event bus.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Insert or update an item
    ///
    /// # Returns
    /// The sequence number assigned to the mutation. Fails with
    /// `InvalidArgument` when the update would change an existing item's
    /// reference embedding.
    async fn put(&self, item: CatalogItem) -> Result<u64>;

    /// Insert or update an item from a raw dictionary-shaped document
    ///
    /// The document is validated against the record schema first.
    async fn put_document(&self, document: Value) -> Result<u64>;

    /// Get an item by identity
    ///
    /// # Returns
    /// `Ok(None)` when the item does not exist (or was deleted),
    /// `Err(InvalidRecord)` when the stored record is malformed.
    async fn get(&self, id: &ItemId) -> Result<Option<CatalogItem>>;

    /// Delete an item and its image payload
    ///
    /// # Returns
    /// `Ok(true)` if the item existed.
    async fn delete(&self, id: &ItemId) -> Result<bool>;

    /// Attach the reference image of an existing item
    async fn put_image(&self, id: &ItemId, image: ImagePayload) -> Result<u64>;

    /// Get the reference image of an item
    async fn image_payload(&self, id: &ItemId) -> Result<Option<ImagePayload>>;

    /// List changes with a sequence number past `since`, oldest first
    ///
    /// Only the latest change of each item is reported.
    async fn list_pending(&self, since: IndexCursor, limit: usize) -> Result<Vec<PendingChange>>;

    /// Number of live (non-deleted) items
    async fn len(&self) -> Result<usize>;

    /// Identity of this store's sequence numbering
    ///
    /// Sequence numbers are only comparable within one epoch. A store that
    /// keeps its history across restarts keeps its epoch; one that starts
    /// numbering afresh must report a new epoch.
    fn epoch(&self) -> &str;

    /// Get the name/identifier of this store implementation
    fn provider_name(&self) -> &str;
}
