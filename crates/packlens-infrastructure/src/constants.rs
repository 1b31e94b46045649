//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `packlens_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "packlens.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "packlens";

/// Environment variable prefix for configuration (`PACKLENS__INDEX__NAME`)
pub const CONFIG_ENV_PREFIX: &str = "PACKLENS";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "PACKLENS_LOG";

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "packlens";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 7;

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

/// Embedding provider used when none is configured
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "null";

/// Counting pipeline used when none is configured
pub const DEFAULT_COUNTING_PROVIDER: &str = "null";

/// HTTP request timeout for remote model services in seconds
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// MAINTENANCE CONSTANTS
// ============================================================================

/// How long callers wait for the index to catch up with an ingestion
pub const QUIESCENCE_TIMEOUT_SECS: u64 = 120;
