//! Null Event Bus Provider
//!
//! Testing stub implementation that discards all events.

use async_trait::async_trait;
use futures::stream;
use packlens_domain::error::Result;
use packlens_domain::events::DomainEvent;
use packlens_domain::ports::infrastructure::{DomainEventStream, EventBusProvider};
use std::sync::Arc;

/// Null event bus for testing
///
/// Discards all published events; subscriptions end immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventBusProvider;

impl NullEventBusProvider {
    /// Create a new null event bus
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl EventBusProvider for NullEventBusProvider {
    async fn publish_event(&self, _event: DomainEvent) -> Result<()> {
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        Ok(Box::pin(stream::empty()))
    }

    fn has_subscribers(&self) -> bool {
        false
    }
}
