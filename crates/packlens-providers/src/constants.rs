//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in packlens-domain) and infrastructure
//! constants.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Payloads smaller than this are rejected by the null embedding provider
pub const NULL_EMBEDDING_MIN_PAYLOAD_BYTES: usize = 16;

/// Model name reported by the null embedding provider
pub const NULL_EMBEDDING_MODEL: &str = "null-digest";

/// Default base URL of the remote embedding service
pub const HTTP_EMBEDDING_DEFAULT_URL: &str = "http://localhost:8501";

/// Default model requested from the remote embedding service
pub const HTTP_EMBEDDING_DEFAULT_MODEL: &str = "resnet50-v2";

// ============================================================================
// COUNTING PIPELINE CONSTANTS
// ============================================================================

/// Default base URL of the remote detection service
pub const HTTP_COUNTING_DEFAULT_URL: &str = "http://localhost:8502";

// ============================================================================
// EVENTS PROVIDER CONSTANTS
// ============================================================================

/// Event bus buffer size
pub const EVENT_BUS_BUFFER_SIZE: usize = 1024;

// ============================================================================
// VECTOR INDEX PROVIDER CONSTANTS
// ============================================================================

/// Version written into vector index snapshot files
pub const INDEX_SNAPSHOT_VERSION: u32 = 1;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds (for model API calls)
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;
