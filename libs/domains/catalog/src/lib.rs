//! Product Catalog Domain
//!
//! Complete domain implementation for managing catalog products.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/v1/produto)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐      ┌──────────────┐
//! │   Service   │ ───► │ Event Channel│ ──► CreationListener
//! └──────┬──────┘      └──────────────┘     (structured log)
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, event payload
//! └─────────────┘
//! ```
//!
//! Every successful creation publishes a [`ProductCreated`] event onto a
//! named in-process queue, fire-and-forget; the [`CreationListener`] consumes
//! it on its own task and records one structured log entry per message.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     listener::PRODUCT_CREATED_QUEUE,
//!     repository::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! let (publisher, _subscription) = event_channel::channel(PRODUCT_CREATED_QUEUE, 256);
//! let service = ProductService::new(InMemoryProductRepository::new(), publisher);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod listener;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use listener::{CreationListener, PRODUCT_CREATED_QUEUE};
pub use models::{Product, ProductCreated, ProductFilter, ProductRequest, ProductResponse};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
