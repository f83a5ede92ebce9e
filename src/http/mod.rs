//! HTTP delivery boundary.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (x-request-id generation/propagation)
//!     → info.rs (identity → flag evaluation → response assembly)
//!     → health.rs (liveness probe)
//!     → JSON to client
//! ```

pub mod health;
pub mod info;
pub mod request;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
