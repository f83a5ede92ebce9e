//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! SIGTERM / SIGINT
//!     → shutdown.rs (signal listener task)
//!     → broadcast to subscribers
//!     → HTTP server drains and exits
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
