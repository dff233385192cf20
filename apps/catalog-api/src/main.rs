//! Catalog API - product CRUD over REST with creation events

use axum::Router;
use axum_helpers::{create_router, health_router, serve};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::FromEnv;
use domain_catalog::{
    handlers, CreationListener, InMemoryProductRepository, ProductService, PRODUCT_CREATED_QUEUE,
};
use tokio::sync::watch;
use tracing::info;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Creation events travel over a bounded in-process queue; the listener
    // drains it on its own task until shutdown.
    let (publisher, subscription) =
        event_channel::channel(PRODUCT_CREATED_QUEUE, config.event_queue_capacity);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let listener_handle =
        tokio::spawn(subscription.attach(CreationListener::new()).run(shutdown_rx));

    let service = ProductService::new(InMemoryProductRepository::new(), publisher);

    let api_routes = Router::new().nest("/v1/produto", handlers::router(service));
    let app = create_router::<handlers::ApiDoc>(api_routes).merge(health_router(config.app));

    info!("Starting Catalog API on port {}", config.server.port);

    serve(app, &config.server).await?;

    let _ = shutdown_tx.send(true);
    listener_handle.await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
