#![allow(dead_code)]

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::trace;

use weft_core_types::WeftError;

/// Trait implemented by payload types that can be carried on the bus.
pub trait Event: Clone + Send + Sync + std::fmt::Debug + 'static {}

impl<T> Event for T where T: Clone + Send + Sync + std::fmt::Debug + 'static {}

/// Listener-registry collaborator the publishing interceptor hands events to.
///
/// `publish` is synchronous: the interception chain runs on the caller's
/// thread and publication happens inline, before the call unwinds further.
/// Whether listener failures surface here or are swallowed is each
/// implementation's contract.
pub trait EventBus<E>: Send + Sync
where
    E: Event,
{
    fn publish(&self, event: E) -> Result<(), WeftError>;
    fn subscribe(&self) -> broadcast::Receiver<E>;
}

/// Simple in-memory bus suitable for unit tests and early integration.
pub struct InMemoryBus<E>
where
    E: Event,
{
    sender: broadcast::Sender<E>,
}

impl<E> InMemoryBus<E>
where
    E: Event,
{
    pub fn new(capacity: usize) -> Arc<Self> {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Arc::new(Self { sender })
    }

    /// Number of live subscribers, mainly useful in tests.
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<E> EventBus<E> for InMemoryBus<E>
where
    E: Event,
{
    fn publish(&self, event: E) -> Result<(), WeftError> {
        // An empty listener registry is a legal configuration: broadcast
        // `send` only errors when nobody is subscribed, which is not a
        // publication failure here.
        match self.sender.send(event) {
            Ok(delivered) => {
                trace!(delivered, "event delivered");
                Ok(())
            }
            Err(_) => {
                trace!("event dropped: no listeners registered");
                Ok(())
            }
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Ping(u32);

    #[test]
    fn publish_reaches_subscriber() {
        let bus = InMemoryBus::new(8);
        let mut rx = bus.subscribe();
        bus.publish(Ping(7)).unwrap();
        assert_eq!(rx.try_recv().unwrap(), Ping(7));
    }

    #[test]
    fn publish_without_listeners_is_ok() {
        let bus: Arc<InMemoryBus<Ping>> = InMemoryBus::new(8);
        assert_eq!(bus.listener_count(), 0);
        bus.publish(Ping(1)).unwrap();
    }
}
