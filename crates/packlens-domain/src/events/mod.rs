//! Domain Events
//!
//! Domain events represent significant occurrences in the catalog and the
//! vector index. Events are immutable facts that other parts of the system
//! can react to.
//!
//! ## Domain Events
//!
//! | Event | Emitted by |
//! |-------|------------|
//! | `CatalogItemStored` | Catalog store, on insert/update/image attach |
//! | `CatalogItemDeleted` | Catalog store, on delete |
//! | `IndexBatchCommitted` | Index maintainer, after each batch |
//! | `IndexQuiesced` | Index maintainer, when no work is pending |

/// Domain event definitions
pub mod domain_events;

pub use domain_events::DomainEvent;
