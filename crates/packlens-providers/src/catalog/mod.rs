//! Catalog Store Implementations
//!
//! | Store | Description |
//! |-------|-------------|
//! | InMemoryCatalogStore | Document store with per-mutation sequence numbers |

pub mod in_memory;

pub use in_memory::InMemoryCatalogStore;
