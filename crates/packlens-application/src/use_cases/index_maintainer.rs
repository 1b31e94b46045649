//! Index Maintenance Use Case
//!
//! Keeps the vector index consistent with the catalog store. A pass reads
//! catalog changes past the index cursor in small batches, turns each change
//! into an index upsert or retirement, and commits every batch atomically
//! together with the advanced cursor. A cooldown separates batches.
//!
//! The cursor is only meaningful for the catalog epoch the index is bound
//! to. A pass first binds the index to the catalog's epoch; an index built
//! against another epoch is cleared and rebuilt from the start.
//!
//! Passes are serialized by a pass lock. The background task started by
//! [`IndexMaintainer::start`] runs one pass immediately and another after
//! every catalog mutation event; events that arrive while a pass runs are
//! coalesced into the next pass.

use std::sync::Arc;
use std::time::Duration;

use futures::{FutureExt, StreamExt};
use packlens_domain::constants::{MAINTENANCE_BATCH_SIZE, MAINTENANCE_COOLDOWN_MS};
use packlens_domain::error::{Error, Result};
use packlens_domain::{
    CatalogItem, DomainEvent, EmbedOutcome, IndexBatch, IndexCursor, IndexEntry, PendingChange,
    PendingKind,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::ports::{
    CatalogStore, DomainEventStream, EmbeddingProvider, EventBusProvider, VectorIndexProvider,
};

/// Batch size and pacing of index maintenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenancePolicy {
    /// Catalog changes applied per batch
    pub batch_size: usize,
    /// Pause between two batches
    pub cooldown: Duration,
}

impl Default for MaintenancePolicy {
    fn default() -> Self {
        Self {
            batch_size: MAINTENANCE_BATCH_SIZE,
            cooldown: Duration::from_millis(MAINTENANCE_COOLDOWN_MS),
        }
    }
}

/// What one maintenance pass did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaintenanceReport {
    /// Number of catalog changes in each committed batch, in order
    pub batches: Vec<usize>,
    /// Entries written to the index
    pub indexed: usize,
    /// Changes that produced no entry (rejected, failed, malformed, ...)
    pub skipped: usize,
    /// Entries retired because their item was deleted or became malformed
    pub retired: usize,
    /// Calls made to the embedding provider
    pub embedding_calls: usize,
    /// Whether the index was cleared because it belonged to another catalog
    pub rebuilt: bool,
    /// Index cursor when the pass ended
    pub cursor: IndexCursor,
}

impl MaintenanceReport {
    /// Whether the pass found nothing to do
    pub fn is_idle(&self) -> bool {
        self.batches.is_empty() && !self.rebuilt
    }
}

/// Result of turning one upsert into an index vector
enum VectorSource {
    Ready(Vec<f32>),
    Skipped(String),
}

/// Incremental index maintainer
pub struct IndexMaintainer {
    catalog: Arc<dyn CatalogStore>,
    index: Arc<dyn VectorIndexProvider>,
    embedding: Arc<dyn EmbeddingProvider>,
    event_bus: Arc<dyn EventBusProvider>,
    index_name: String,
    policy: MaintenancePolicy,
    pass_lock: Mutex<()>,
}

impl IndexMaintainer {
    /// Create new maintainer with injected dependencies
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        index: Arc<dyn VectorIndexProvider>,
        embedding: Arc<dyn EmbeddingProvider>,
        event_bus: Arc<dyn EventBusProvider>,
        index_name: impl Into<String>,
        policy: MaintenancePolicy,
    ) -> Self {
        Self {
            catalog,
            index,
            embedding,
            event_bus,
            index_name: index_name.into(),
            policy,
            pass_lock: Mutex::new(()),
        }
    }

    /// Name of the maintained index
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Policy in use
    pub fn policy(&self) -> MaintenancePolicy {
        self.policy
    }

    /// Run one pass until no pending change is left
    pub async fn run_until_quiescent(&self) -> Result<MaintenanceReport> {
        self.run_until_quiescent_with(&CancellationToken::new())
            .await
    }

    /// Run one pass, stopping early once `cancel` fires
    ///
    /// Cancellation is only observed between batches; a batch that started
    /// is always committed. Fails when the index does not exist or a batch
    /// commit is refused; batches committed before the failure stay.
    pub async fn run_until_quiescent_with(
        &self,
        cancel: &CancellationToken,
    ) -> Result<MaintenanceReport> {
        let _pass = self.pass_lock.lock().await;

        let stats = self.index.stats(&self.index_name).await?;
        let dimensions = stats.dimensions;
        let mut cursor = stats.cursor;
        let mut report = MaintenanceReport::default();

        let epoch = self.catalog.epoch();
        if stats.catalog_epoch.as_deref() != Some(epoch) {
            if stats.entries > 0 || cursor > IndexCursor::START {
                warn!(
                    index = %self.index_name,
                    previous = ?stats.catalog_epoch,
                    catalog_epoch = epoch,
                    "Index was built from another catalog; rebuilding"
                );
                report.rebuilt = true;
            }
            self.index.bind_catalog(&self.index_name, epoch).await?;
            cursor = IndexCursor::START;
        }
        report.cursor = cursor;

        loop {
            if cancel.is_cancelled() {
                info!(index = %self.index_name, cursor = cursor.sequence(), "Maintenance cancelled");
                return Ok(report);
            }

            let pending = self
                .catalog
                .list_pending(cursor, self.policy.batch_size)
                .await?;
            if pending.is_empty() {
                break;
            }

            if !report.batches.is_empty() {
                tokio::select! {
                    () = cancel.cancelled() => {
                        info!(index = %self.index_name, cursor = cursor.sequence(), "Maintenance cancelled");
                        return Ok(report);
                    }
                    () = tokio::time::sleep(self.policy.cooldown) => {}
                }
            }

            let size = pending.len();
            let batch = self
                .build_batch(cursor, dimensions, pending, &mut report)
                .await;
            let next = batch.cursor;

            self.index.commit_batch(&self.index_name, batch).await?;
            cursor = next;
            report.cursor = cursor;
            report.batches.push(size);

            info!(
                index = %self.index_name,
                batch = report.batches.len(),
                size,
                cursor = cursor.sequence(),
                "Committed index batch"
            );
            self.publish(DomainEvent::IndexBatchCommitted {
                index: self.index_name.clone(),
                batch_size: size,
                cursor: cursor.sequence(),
            })
            .await;
        }

        debug!(
            index = %self.index_name,
            batches = report.batches.len(),
            indexed = report.indexed,
            skipped = report.skipped,
            retired = report.retired,
            "Index quiescent"
        );
        self.publish(DomainEvent::IndexQuiesced {
            index: self.index_name.clone(),
            cursor: cursor.sequence(),
        })
        .await;

        Ok(report)
    }

    /// Start the background maintenance task
    ///
    /// Subscribes to catalog events before the first pass so no mutation
    /// between the two is missed.
    pub async fn start(self: Arc<Self>) -> Result<MaintenanceHandle> {
        let mut events = self.event_bus.subscribe_events().await?;
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            self.run_logged(&token).await;

            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    event = events.next() => match event {
                        Some(event) if event.is_catalog_mutation() => {
                            while let Some(Some(_)) = events.next().now_or_never() {}
                            self.run_logged(&token).await;
                        }
                        Some(_) => {}
                        None => {
                            debug!(index = %self.index_name, "Event stream closed");
                            break;
                        }
                    }
                }
            }

            info!(index = %self.index_name, "Index maintainer stopped");
        });

        Ok(MaintenanceHandle { cancel, task })
    }

    async fn run_logged(&self, cancel: &CancellationToken) {
        match self.run_until_quiescent_with(cancel).await {
            Ok(report) if report.is_idle() => {}
            Ok(report) => info!(
                index = %self.index_name,
                batches = report.batches.len(),
                indexed = report.indexed,
                skipped = report.skipped,
                retired = report.retired,
                cursor = report.cursor.sequence(),
                "Maintenance pass finished"
            ),
            Err(e) => warn!(
                index = %self.index_name,
                error = %e,
                "Maintenance pass aborted; retrying on next catalog change"
            ),
        }
    }

    async fn build_batch(
        &self,
        cursor: IndexCursor,
        dimensions: usize,
        pending: Vec<PendingChange>,
        report: &mut MaintenanceReport,
    ) -> IndexBatch {
        let last = pending.iter().map(|c| c.sequence).max().unwrap_or_default();
        let mut batch = IndexBatch::new(cursor.advanced_to(last));

        for change in pending {
            let item_id = change.item_id;
            match change.kind {
                PendingKind::Delete => {
                    debug!(item_id = %item_id, "Retiring deleted item");
                    batch.retired.push(item_id);
                    report.retired += 1;
                }
                PendingKind::Malformed { reason } => {
                    warn!(item_id = %item_id, reason = %reason, "Malformed catalog record skipped");
                    batch.retired.push(item_id);
                    report.skipped += 1;
                }
                PendingKind::Upsert(item) => {
                    match self.vector_for(&item, report).await {
                        VectorSource::Ready(vector) if vector.len() == dimensions => {
                            batch.upserts.push(IndexEntry {
                                item_id,
                                category: item.category,
                                vector,
                            });
                            report.indexed += 1;
                        }
                        VectorSource::Ready(vector) => {
                            let e = Error::dimension_mismatch(dimensions, vector.len());
                            warn!(item_id = %item_id, error = %e, "Item skipped");
                            report.skipped += 1;
                        }
                        VectorSource::Skipped(reason) => {
                            warn!(item_id = %item_id, reason = %reason, "Item skipped");
                            report.skipped += 1;
                        }
                    }
                }
            }
        }

        batch
    }

    async fn vector_for(&self, item: &CatalogItem, report: &mut MaintenanceReport) -> VectorSource {
        if let Some(vector) = &item.embedding {
            return VectorSource::Ready(vector.clone());
        }

        let image = match self.catalog.image_payload(&item.id).await {
            Ok(Some(image)) => image,
            Ok(None) => return VectorSource::Skipped("no embedding and no image payload".into()),
            Err(e) => return VectorSource::Skipped(format!("image payload unavailable: {e}")),
        };

        report.embedding_calls += 1;
        match self.embedding.embed(&image).await {
            Ok(EmbedOutcome::Embedded(embedding)) => VectorSource::Ready(embedding.vector),
            Ok(EmbedOutcome::Rejected { reason }) => {
                VectorSource::Skipped(format!("reference image rejected: {reason}"))
            }
            Err(e) => VectorSource::Skipped(format!("embedding failed: {e}")),
        }
    }

    async fn publish(&self, event: DomainEvent) {
        if let Err(e) = self.event_bus.publish_event(event).await {
            debug!(error = %e, "Maintenance event not published");
        }
    }
}

/// Handle of a running background maintainer
pub struct MaintenanceHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl MaintenanceHandle {
    /// Token that stops the maintainer when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Whether the background task has ended
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop after the current batch and wait for the task to end
    pub async fn shutdown(self) -> Result<()> {
        self.cancel.cancel();
        self.task
            .await
            .map_err(|e| Error::internal(format!("Index maintainer task failed: {e}")))
    }
}

/// Wait until `index` reports quiescence at or past `sequence`
///
/// Returns the reported cursor, or `None` once the stream ends. Subscribe
/// before making the catalog changes being waited for.
pub async fn await_quiescence(
    events: &mut DomainEventStream,
    index: &str,
    sequence: u64,
) -> Option<IndexCursor> {
    while let Some(event) = events.next().await {
        if let DomainEvent::IndexQuiesced {
            index: name,
            cursor,
        } = event
        {
            if name == index && cursor >= sequence {
                return Some(IndexCursor::new(cursor));
            }
        }
    }
    None
}
