//! Application Layer - PackLens
//!
//! Use cases that keep the catalog vector index current and answer shelf
//! photo queries against it.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains use case implementations (application services)
//! - Declares the provider registries filled in by `packlens-providers`
//! - Orchestrates domain entities through the domain port traits
//! - Has no dependencies on infrastructure or concrete providers
//!
//! ## Use Cases
//!
//! - Incremental index maintenance ([`IndexMaintainer`])
//! - Similarity search with layered result filtering ([`SimilaritySearchService`])
//! - Concurrent photo analysis ([`AnalysisOrchestrator`])
//! - Catalog manifest ingestion ([`CatalogIngestService`])
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `packlens-domain`: For domain entities, value objects, and port traits
//! - Pure Rust libraries for async, serialization, etc.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
