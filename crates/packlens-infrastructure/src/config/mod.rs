//! Configuration management
//!
//! Layered configuration via Figment: built-in defaults, then a TOML file,
//! then `PACKLENS__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::*;
