//! In-memory catalog store implementation
//!
//! Keeps catalog records as raw JSON documents, the way the on-device
//! document store does, and parses them at the boundary. Every mutation
//! gets the next sequence number; only the latest change of each item is
//! remembered, so maintenance never replays superseded changes.
//!
//! Sequence numbers restart at 1 with every store instance, so each instance
//! gets a fresh epoch. An index built against another instance is rebuilt
//! instead of trusting its cursor.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use packlens_domain::error::{Error, Result};
use packlens_domain::ports::infrastructure::EventBusProvider;
use packlens_domain::ports::providers::CatalogStore;
use packlens_domain::{
    CatalogItem, CatalogRecord, DomainEvent, ImagePayload, IndexCursor, ItemId, PendingChange,
    PendingKind,
};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct CatalogState {
    last_sequence: u64,
    documents: HashMap<ItemId, Value>,
    images: HashMap<ItemId, ImagePayload>,
    /// Latest change per item, keyed by sequence
    changes: BTreeMap<u64, ItemId>,
    latest: HashMap<ItemId, u64>,
}

impl CatalogState {
    fn record_change(&mut self, id: &ItemId) -> u64 {
        self.last_sequence += 1;
        let sequence = self.last_sequence;
        if let Some(previous) = self.latest.insert(id.clone(), sequence) {
            self.changes.remove(&previous);
        }
        self.changes.insert(sequence, id.clone());
        sequence
    }

    fn pending_kind(&self, id: &ItemId) -> PendingKind {
        match self.documents.get(id) {
            None => PendingKind::Delete,
            Some(document) => match CatalogItem::from_document(document) {
                Ok(item) => PendingKind::Upsert(item),
                Err(e) => PendingKind::Malformed {
                    reason: e.to_string(),
                },
            },
        }
    }
}

static STORE_INSTANCES: AtomicU64 = AtomicU64::new(0);

/// Epoch unique to this process and store instance
fn new_epoch() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(nanos.to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());
    hasher.update(STORE_INSTANCES.fetch_add(1, Ordering::Relaxed).to_le_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("memory-{}", &digest[..16])
}

/// In-memory catalog store
///
/// Publishes `CatalogItemStored` / `CatalogItemDeleted` on the event bus it
/// was given, after the mutation is visible.
pub struct InMemoryCatalogStore {
    epoch: String,
    state: RwLock<CatalogState>,
    event_bus: Option<Arc<dyn EventBusProvider>>,
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self {
            epoch: new_epoch(),
            state: RwLock::default(),
            event_bus: None,
        }
    }
}

impl InMemoryCatalogStore {
    /// Create a store that publishes no events
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store publishing mutations on `event_bus`
    pub fn with_event_bus(event_bus: Arc<dyn EventBusProvider>) -> Self {
        Self {
            event_bus: Some(event_bus),
            ..Self::default()
        }
    }

    /// Replace the generated epoch
    ///
    /// Only correct when the store replays the same history as the one the
    /// epoch was first used for.
    #[must_use]
    pub fn with_epoch(mut self, epoch: impl Into<String>) -> Self {
        self.epoch = epoch.into();
        self
    }

    /// Sequence number of the latest mutation
    pub async fn last_sequence(&self) -> u64 {
        self.state.read().await.last_sequence
    }

    /// Store a document exactly as received from a peer, without validation
    ///
    /// Replicated documents may not match the local schema; they surface as
    /// malformed changes during index maintenance and as `InvalidRecord` on
    /// `get`.
    pub async fn replicate_document(&self, document: Value) -> Result<u64> {
        let id = document
            .get("id")
            .and_then(Value::as_str)
            .map(ItemId::new)
            .ok_or_else(|| Error::invalid_record("replicated document has no string id"))?;

        let sequence = {
            let mut state = self.state.write().await;
            state.documents.insert(id.clone(), document);
            state.record_change(&id)
        };

        self.publish(DomainEvent::CatalogItemStored {
            item_id: id.to_string(),
            sequence,
        })
        .await;
        Ok(sequence)
    }

    async fn store_record(&self, record: CatalogRecord) -> Result<u64> {
        let id = ItemId::new(record.id.clone());
        let document = record.to_document()?;

        let sequence = {
            let mut state = self.state.write().await;
            if let Some(existing) = state.documents.get(&id) {
                let current = CatalogRecord::from_document(existing)
                    .ok()
                    .and_then(|r| r.embedding);
                if current.is_some() && current != record.embedding {
                    return Err(Error::invalid_argument(format!(
                        "reference embedding of '{id}' is immutable"
                    )));
                }
            }
            state.documents.insert(id.clone(), document);
            state.record_change(&id)
        };

        debug!(item_id = %id, sequence, "Catalog item stored");
        self.publish(DomainEvent::CatalogItemStored {
            item_id: id.to_string(),
            sequence,
        })
        .await;
        Ok(sequence)
    }

    async fn publish(&self, event: DomainEvent) {
        if let Some(bus) = &self.event_bus {
            if let Err(e) = bus.publish_event(event).await {
                debug!(error = %e, "Catalog event not published");
            }
        }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn put(&self, item: CatalogItem) -> Result<u64> {
        let record = CatalogRecord::from_document(&item.to_document()?)?;
        self.store_record(record).await
    }

    async fn put_document(&self, document: Value) -> Result<u64> {
        let record = CatalogRecord::from_document(&document)?;
        self.store_record(record).await
    }

    async fn get(&self, id: &ItemId) -> Result<Option<CatalogItem>> {
        let state = self.state.read().await;
        state
            .documents
            .get(id)
            .map(CatalogItem::from_document)
            .transpose()
    }

    async fn delete(&self, id: &ItemId) -> Result<bool> {
        let sequence = {
            let mut state = self.state.write().await;
            if state.documents.remove(id).is_none() {
                return Ok(false);
            }
            state.images.remove(id);
            state.record_change(id)
        };

        debug!(item_id = %id, sequence, "Catalog item deleted");
        self.publish(DomainEvent::CatalogItemDeleted {
            item_id: id.to_string(),
            sequence,
        })
        .await;
        Ok(true)
    }

    async fn put_image(&self, id: &ItemId, image: ImagePayload) -> Result<u64> {
        if image.is_empty() {
            return Err(Error::invalid_argument(format!(
                "empty image payload for '{id}'"
            )));
        }

        let sequence = {
            let mut state = self.state.write().await;
            if !state.documents.contains_key(id) {
                return Err(Error::not_found(format!("catalog item '{id}'")));
            }
            state.images.insert(id.clone(), image);
            state.record_change(id)
        };

        self.publish(DomainEvent::CatalogItemStored {
            item_id: id.to_string(),
            sequence,
        })
        .await;
        Ok(sequence)
    }

    async fn image_payload(&self, id: &ItemId) -> Result<Option<ImagePayload>> {
        Ok(self.state.read().await.images.get(id).cloned())
    }

    async fn list_pending(&self, since: IndexCursor, limit: usize) -> Result<Vec<PendingChange>> {
        let state = self.state.read().await;
        let pending = state
            .changes
            .range(since.sequence().saturating_add(1)..)
            .take(limit)
            .map(|(&sequence, id)| PendingChange {
                item_id: id.clone(),
                sequence,
                kind: state.pending_kind(id),
            })
            .collect();
        Ok(pending)
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.state.read().await.documents.len())
    }

    fn epoch(&self) -> &str {
        &self.epoch
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}
