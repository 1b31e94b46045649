//! Tokio Broadcast Event Bus Provider
//!
//! Event bus implementation using tokio broadcast channels for
//! in-process event distribution.
//!
//! ## Features
//!
//! - In-process event broadcasting
//! - Multiple subscribers support
//! - Configurable channel capacity
//! - No persistence (events are ephemeral)
//!
//! ## Example
//!
//! ```ignore
//! use packlens_providers::events::TokioEventBusProvider;
//!
//! let bus = TokioEventBusProvider::new();
//! let stream = bus.subscribe_events().await?;
//! bus.publish_event(DomainEvent::IndexQuiesced { index: "catalog".into(), cursor: 7 }).await?;
//! ```

use async_trait::async_trait;
use futures::stream;
use packlens_domain::error::Result;
use packlens_domain::events::DomainEvent;
use packlens_domain::ports::infrastructure::{DomainEventStream, EventBusProvider};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::constants::EVENT_BUS_BUFFER_SIZE;

/// Event bus provider using tokio broadcast channels
///
/// ## Capacity
///
/// When the channel is full, the oldest events are dropped for slow
/// subscribers. Configure capacity based on expected event volume and
/// subscriber processing speed.
#[derive(Clone)]
pub struct TokioEventBusProvider {
    sender: Arc<broadcast::Sender<DomainEvent>>,
    capacity: usize,
}

impl TokioEventBusProvider {
    /// Create a new tokio event bus with default capacity (1024)
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_BUFFER_SIZE)
    }

    /// Create with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for TokioEventBusProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioEventBusProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioEventBusProvider")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[async_trait]
impl EventBusProvider for TokioEventBusProvider {
    async fn publish_event(&self, event: DomainEvent) -> Result<()> {
        match self.sender.send(event) {
            Ok(count) => debug!("Published event to {} subscribers", count),
            Err(_) => debug!("Published event but no subscribers"),
        }
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        let receiver = self.sender.subscribe();

        // Convert broadcast receiver to a Stream that handles lagged errors
        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Event stream lagged by {} events", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Ok(Box::pin(stream))
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}
