//! Domain Event Definitions

use serde::{Deserialize, Serialize};

/// System-wide event types for decoupled service communication
///
/// Catalog mutations are published by the store and consumed by the index
/// maintainer as reindex triggers; maintenance progress is published back on
/// the same bus for anyone waiting on the index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DomainEvent {
    /// An item was inserted, updated, or had its image attached
    CatalogItemStored {
        /// Affected item
        item_id: String,
        /// Catalog sequence number of the mutation
        sequence: u64,
    },
    /// An item was deleted
    CatalogItemDeleted {
        /// Affected item
        item_id: String,
        /// Catalog sequence number of the deletion
        sequence: u64,
    },
    /// A maintenance batch was committed to the index
    IndexBatchCommitted {
        /// Index name
        index: String,
        /// Number of catalog changes applied by the batch
        batch_size: usize,
        /// Cursor after the batch
        cursor: u64,
    },
    /// Maintenance found no pending work
    IndexQuiesced {
        /// Index name
        index: String,
        /// Cursor at quiescence
        cursor: u64,
    },
}

impl DomainEvent {
    /// Whether the event may change what the index should contain
    pub fn is_catalog_mutation(&self) -> bool {
        matches!(
            self,
            Self::CatalogItemStored { .. } | Self::CatalogItemDeleted { .. }
        )
    }
}
