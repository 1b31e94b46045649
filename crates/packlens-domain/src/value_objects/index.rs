//! Vector Index Value Objects
//!
//! Types exchanged between the catalog store, the index maintainer and the
//! vector index: the maintenance cursor, pending catalog changes and the
//! batches committed to the index.

use serde::{Deserialize, Serialize};

use crate::entities::{CatalogItem, ItemId};

/// Progress marker of index maintenance
///
/// Every catalog change whose sequence number is at most the cursor has been
/// applied to the index (embedded, skipped or retired). The cursor only moves
/// forward.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct IndexCursor(u64);

impl IndexCursor {
    /// Cursor of an index that has applied nothing yet
    pub const START: Self = Self(0);

    /// Cursor positioned at a catalog sequence number
    pub fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    /// The catalog sequence number this cursor points at
    pub fn sequence(self) -> u64 {
        self.0
    }

    /// Advance to `sequence`, never moving backwards
    #[must_use]
    pub fn advanced_to(self, sequence: u64) -> Self {
        Self(self.0.max(sequence))
    }
}

/// What happened to a catalog item since the cursor
#[derive(Debug, Clone, PartialEq)]
pub enum PendingKind {
    /// The item was inserted or updated and parsed cleanly
    Upsert(CatalogItem),
    /// The stored record failed validation
    Malformed {
        /// Validation failure
        reason: String,
    },
    /// The item was deleted
    Delete,
}

/// One catalog change waiting to be applied to the index
#[derive(Debug, Clone, PartialEq)]
pub struct PendingChange {
    /// Affected item
    pub item_id: ItemId,
    /// Catalog sequence number of the change
    pub sequence: u64,
    /// Kind of change
    pub kind: PendingKind,
}

/// Vector stored in the index for one catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Item the vector belongs to
    pub item_id: ItemId,
    /// Item category, kept alongside the vector for filtered search
    pub category: String,
    /// The embedding vector
    pub vector: Vec<f32>,
}

/// Unit of index maintenance, committed atomically
///
/// Either every upsert, every retirement and the new cursor become visible,
/// or none of them do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexBatch {
    /// Entries to insert or replace
    pub upserts: Vec<IndexEntry>,
    /// Items whose entries must be removed
    pub retired: Vec<ItemId>,
    /// Cursor after this batch
    pub cursor: IndexCursor,
}

impl IndexBatch {
    /// Empty batch that only moves the cursor
    pub fn new(cursor: IndexCursor) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }
}

/// Index statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Index name
    pub index: String,
    /// Number of stored entries
    pub entries: usize,
    /// Vector dimension fixed at creation
    pub dimensions: usize,
    /// Maintenance cursor
    pub cursor: IndexCursor,
    /// Catalog epoch the cursor counts in, `None` until bound
    pub catalog_epoch: Option<String>,
}
