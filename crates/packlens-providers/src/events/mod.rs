//! Event Bus Provider Implementations
//!
//! Provides event bus backends for domain events.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | NullEventBusProvider | Testing | Discards all events |
//! | TokioEventBusProvider | In-Process | Tokio broadcast channels |

pub mod null;
pub mod tokio;

pub use null::NullEventBusProvider;
pub use self::tokio::TokioEventBusProvider;

// Re-export port trait from the domain layer
pub use packlens_domain::ports::infrastructure::{DomainEventStream, EventBusProvider};

// Re-export domain event types
pub use packlens_domain::events::DomainEvent;
