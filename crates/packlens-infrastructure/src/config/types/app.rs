//! Main application configuration

use serde::{Deserialize, Serialize};

use super::index::{FilterConfig, IndexConfig, MaintenanceConfig, SearchConfig};
use super::logging::LoggingConfig;
use super::providers::{CountingConfig, EmbeddingConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Embedding provider configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    /// Counting pipeline configuration
    #[serde(default)]
    pub counting: CountingConfig,
    /// Vector index configuration
    #[serde(default)]
    pub index: IndexConfig,
    /// Index maintenance configuration
    #[serde(default)]
    pub maintenance: MaintenanceConfig,
    /// Similarity search configuration
    #[serde(default)]
    pub search: SearchConfig,
    /// Result filter configuration
    #[serde(default)]
    pub filter: FilterConfig,
}
