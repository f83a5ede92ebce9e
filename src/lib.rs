//! Vitals — process runtime diagnostics service.
//!
//! Serves a single read-only endpoint reporting what the process is made of
//! (host, build, OS/arch, task and CPU counts) together with a canary
//! feature-flag decision evaluated for a fresh per-request user key.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                  VITALS                      │
//!                    │                                              │
//!   GET /api/info    │  ┌─────────┐   ┌──────────┐   ┌───────────┐ │
//!   ─────────────────┼─▶│  http   │──▶│ identity │──▶│   flags   │ │
//!                    │  │ server  │   │ user key │   │ evaluator │ │
//!                    │  └────┬────┘   └──────────┘   └─────┬─────┘ │
//!                    │       │                             │       │
//!                    │       ▼                             ▼       │
//!   JSON response    │  ┌─────────┐   ┌──────────┐   ┌───────────┐ │
//!   ◀────────────────┼──│response │◀──│ runtime  │   │ snapshot  │ │
//!                    │  │assembler│   │ snapshot │   │  client   │ │
//!                    │  └─────────┘   └──────────┘   └───────────┘ │
//!                    │                                              │
//!                    │  ┌────────────────────────────────────────┐ │
//!                    │  │        Cross-Cutting Concerns          │ │
//!                    │  │  ┌────────┐ ┌─────────┐ ┌───────────┐ │ │
//!                    │  │  │ config │ │ version │ │ lifecycle │ │ │
//!                    │  │  └────────┘ └─────────┘ └───────────┘ │ │
//!                    │  └────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod flags;
pub mod http;
pub mod identity;
pub mod runtime;

// Cross-cutting concerns
pub mod lifecycle;
pub mod version;

pub use config::VitalsConfig;
pub use flags::FlagState;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
