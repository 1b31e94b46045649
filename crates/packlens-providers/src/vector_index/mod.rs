//! Vector Index Implementations
//!
//! | Index | Description |
//! |-------|-------------|
//! | InMemoryVectorIndex | Exact cosine search, optional JSON snapshot on disk |

pub mod in_memory;

pub use in_memory::InMemoryVectorIndex;
