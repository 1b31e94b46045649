//! # PackLens
//!
//! Shelf photo analysis against a catalog of pack images.
//!
//! A photo is embedded, matched against the catalog's vector index and
//! filtered to the few items it most plausibly shows. Pack counting runs over
//! the same photo and the two results are joined into one report.
//!
//! ## Example
//!
//! ```ignore
//! use packlens::infrastructure::{AppConfig, init_app};
//!
//! let context = init_app(AppConfig::default()).await?;
//! let maintenance = context.start_maintenance().await?;
//! context.ingest_manifest(Path::new("catalog.json")).await?;
//!
//! let outcome = context.analysis().analyze(&ImagePayload::jpeg(bytes)).await;
//! println!("{}", serde_json::to_string_pretty(&outcome.to_report())?);
//! maintenance.shutdown().await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, value objects, domain errors and events
//! - `application` - Ports, provider registries and use cases
//! - `providers` - Embedding, counting, catalog, index and event bus adapters
//! - `infrastructure` - Configuration, logging and the composition root
//! - [`cli`] - Command line front end

pub mod cli;

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use packlens_domain::*;
}

/// Application layer - ports and use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use packlens_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use packlens_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use packlens_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use cli::{Cli, Command, run};
