//! # Axum Helpers
//!
//! Utilities shared by the HTTP surface of this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: problem-detail error responses with stable error codes
//! - **[`extractors`]**: custom extractors (UUID path, validated JSON)
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{QueryParams, UuidPath, ValidatedJson};

// Re-export server helpers
pub use server::{HealthResponse, create_router, health_router, serve, shutdown_signal};
