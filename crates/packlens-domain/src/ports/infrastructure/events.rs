//! Event Bus Provider Port
//!
//! Defines the contract for event publish/subscribe services. The catalog
//! store publishes mutations through it and the index maintainer subscribes
//! to them, so neither holds a reference to the other.

use crate::error::Result;
use crate::events::DomainEvent;
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

/// Boxed async stream of domain events
pub type DomainEventStream = Pin<Box<dyn Stream<Item = DomainEvent> + Send + 'static>>;

/// Event bus provider interface for typed event pub/sub
#[async_trait]
pub trait EventBusProvider: Send + Sync {
    /// Publish a typed domain event to every current subscriber
    async fn publish_event(&self, event: DomainEvent) -> Result<()>;

    /// Subscribe to events published from now on
    async fn subscribe_events(&self) -> Result<DomainEventStream>;

    /// Check if there are any active event subscribers
    fn has_subscribers(&self) -> bool;
}
