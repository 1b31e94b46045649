//! Configuration types module

pub mod app;
pub mod index;
pub mod logging;
pub mod providers;

// Re-export main types
pub use app::AppConfig;
pub use index::{FilterConfig, IndexConfig, MaintenanceConfig, SearchConfig};
pub use logging::LoggingConfig;
pub use providers::{CountingConfig, EmbeddingConfig};
