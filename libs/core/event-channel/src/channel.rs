use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use crate::worker::{ChannelWorker, EventConsumer};

/// Create a named event queue with the given capacity.
///
/// Returns the publishing handle and the single subscription. Both sides
/// are meant to be passed explicitly to their owners at construction; there
/// is no global registry.
pub fn channel<E>(queue: &str, capacity: usize) -> (Publisher<E>, Subscription<E>) {
    let queue: Arc<str> = Arc::from(queue);
    let (tx, rx) = mpsc::channel(capacity);

    (
        Publisher {
            queue: queue.clone(),
            tx,
        },
        Subscription { queue, rx },
    )
}

/// Publishing side of a named event queue.
///
/// Cloneable; clones feed the same queue.
pub struct Publisher<E> {
    queue: Arc<str>,
    tx: mpsc::Sender<E>,
}

// Manual impl so `E: Clone` is not required.
impl<E> Clone for Publisher<E> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
            tx: self.tx.clone(),
        }
    }
}

impl<E> Publisher<E> {
    /// Hand an event to the transport, fire-and-forget.
    ///
    /// Returns once the message is enqueued. If the queue is full or the
    /// consumer is gone the event is dropped; the loss is logged and never
    /// propagated to the caller.
    pub fn publish(&self, event: E) {
        match self.tx.try_send(event) {
            Ok(()) => debug!(queue = %self.queue, "event enqueued"),
            Err(TrySendError::Full(_)) => {
                warn!(queue = %self.queue, "queue full, event dropped");
            }
            Err(TrySendError::Closed(_)) => {
                warn!(queue = %self.queue, "no consumer attached, event dropped");
            }
        }
    }

    pub fn queue(&self) -> &str {
        &self.queue
    }
}

/// Consuming side of a named event queue.
pub struct Subscription<E> {
    pub(crate) queue: Arc<str>,
    pub(crate) rx: mpsc::Receiver<E>,
}

impl<E> Subscription<E> {
    /// Receive the next event, or `None` once every publisher is dropped.
    pub async fn recv(&mut self) -> Option<E> {
        self.rx.recv().await
    }

    pub fn queue(&self) -> &str {
        &self.queue
    }

    /// Attach a consumer, producing a worker ready to be spawned.
    pub fn attach<C>(self, consumer: C) -> ChannelWorker<E, C>
    where
        E: Send + 'static,
        C: EventConsumer<E>,
    {
        ChannelWorker::new(self, consumer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_then_recv() {
        let (publisher, mut subscription) = channel::<u32>("test.queue", 4);
        publisher.publish(7);
        assert_eq!(subscription.recv().await, Some(7));
    }

    #[tokio::test]
    async fn test_publish_without_consumer_is_silent() {
        let (publisher, subscription) = channel::<u32>("test.queue", 4);
        drop(subscription);
        // Must not panic or block.
        publisher.publish(7);
    }

    #[tokio::test]
    async fn test_full_queue_drops_overflow() {
        let (publisher, mut subscription) = channel::<u32>("test.queue", 1);
        publisher.publish(1);
        publisher.publish(2); // dropped, queue full

        assert_eq!(subscription.recv().await, Some(1));
        drop(publisher);
        assert_eq!(subscription.recv().await, None);
    }

    #[tokio::test]
    async fn test_recv_returns_none_when_publishers_gone() {
        let (publisher, mut subscription) = channel::<u32>("test.queue", 4);
        drop(publisher);
        assert_eq!(subscription.recv().await, None);
    }

    #[tokio::test]
    async fn test_clones_feed_same_queue() {
        let (publisher, mut subscription) = channel::<u32>("test.queue", 4);
        let second = publisher.clone();
        publisher.publish(1);
        second.publish(2);
        assert_eq!(subscription.recv().await, Some(1));
        assert_eq!(subscription.recv().await, Some(2));
    }
}
