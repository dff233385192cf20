mod app;
mod health;
mod shutdown;

pub use app::{create_router, serve};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
