//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//! Provider implementations live in `packlens-providers` and are resolved
//! through the linkme registries at bootstrap.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based layered configuration |
//! | [`di`] | Composition root ([`AppContext`](di::AppContext)) |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extensions mapping foreign errors to domain errors |
//! | [`constants`] | Infrastructure defaults |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
