use async_trait::async_trait;
use chrono::Utc;
use event_channel::EventConsumer;

use crate::models::ProductCreated;

/// Queue name the creation events travel on.
pub const PRODUCT_CREATED_QUEUE: &str = "product.created";

/// Consumes [`ProductCreated`] events and records one structured log entry
/// per message. The receipt timestamp is taken when the event is handled,
/// not when it was published.
#[derive(Debug, Default, Clone)]
pub struct CreationListener;

impl CreationListener {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventConsumer<ProductCreated> for CreationListener {
    async fn handle(&self, event: ProductCreated) {
        let payload = match serde_json::to_string(&event) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize creation event");
                return;
            }
        };

        tracing::info!(
            event = "product.created",
            status = "received",
            product_id = %event.product.id,
            payload = %payload,
            received_at = %Utc::now().to_rfc3339(),
            "Product created"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductRequest;
    use event_channel::channel;
    use tokio::sync::watch;

    fn request(name: &str, price: &str, category: &str) -> ProductRequest {
        serde_json::from_value(serde_json::json!({
            "nome": name,
            "preco": price,
            "categoria": category,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_listener_drains_queue_until_shutdown() {
        let (publisher, subscription) = channel(PRODUCT_CREATED_QUEUE, 16);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let worker = tokio::spawn(subscription.attach(CreationListener::new()).run(shutdown_rx));

        publisher.publish(ProductCreated {
            product: crate::models::Product::new(request("Mouse", "19.9", "Periféricos")),
        });

        // Give the worker a chance to consume before stopping it.
        tokio::task::yield_now().await;
        shutdown_tx.send(true).unwrap();
        worker.await.unwrap();
    }
}
