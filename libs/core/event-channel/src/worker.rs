use async_trait::async_trait;
use tokio::sync::watch;
use tracing::info;

use crate::channel::Subscription;

/// A consumer invoked once per delivered event.
///
/// Consumption happens on the worker's task, independently of whoever
/// published the event. Handlers are infallible from the channel's point of
/// view: whatever the consumer does with a message, it is gone afterwards.
#[async_trait]
pub trait EventConsumer<E>: Send + Sync {
    async fn handle(&self, event: E);
}

/// Worker loop driving an [`EventConsumer`] from a [`Subscription`].
///
/// Stops when the shutdown signal flips to `true`, when the signal sender is
/// dropped, or when every publisher is gone.
pub struct ChannelWorker<E, C> {
    subscription: Subscription<E>,
    consumer: C,
}

impl<E, C> ChannelWorker<E, C>
where
    E: Send + 'static,
    C: EventConsumer<E>,
{
    pub(crate) fn new(subscription: Subscription<E>, consumer: C) -> Self {
        Self {
            subscription,
            consumer,
        }
    }

    /// Run the consume loop until shutdown.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        info!(queue = %self.subscription.queue, "event worker started");

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                event = self.subscription.rx.recv() => match event {
                    Some(event) => self.consumer.handle(event).await,
                    None => break,
                }
            }
        }

        info!(queue = %self.subscription.queue, "event worker stopped");
    }
}
