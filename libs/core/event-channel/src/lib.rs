//! In-process event channel
//!
//! A named, bounded queue carrying notification events from a publisher to a
//! single consumer with best-effort, at-most-once delivery:
//!
//! - `publish` returns once the message is handed to the transport; it never
//!   waits for the consumer and never surfaces a delivery failure
//! - a full queue or a missing consumer drops the event (with a warning log);
//!   nothing is redelivered and no acknowledgment loop exists
//! - the consumer runs on its own task, independent of the publishing
//!   request's lifetime
//!
//! ## Example
//!
//! ```ignore
//! let (publisher, subscription) = event_channel::channel("product.created", 256);
//! let worker = subscription.attach(MyConsumer);
//! tokio::spawn(worker.run(shutdown_rx));
//!
//! publisher.publish(event); // fire-and-forget
//! ```

mod channel;
mod worker;

pub use channel::{Publisher, Subscription, channel};
pub use worker::{ChannelWorker, EventConsumer};
