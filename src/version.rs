//! Build identity baked in at compile time.
//!
//! `REVISION` and `RUNTIME` are produced by `build.rs`; both degrade to
//! placeholder strings when the build environment cannot supply them.

/// Semantic version of this build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit the binary was built from, or "unknown".
pub const REVISION: &str = env!("VITALS_GIT_REVISION");

/// Compiler version string, e.g. "rustc 1.79.0".
pub const RUNTIME: &str = env!("VITALS_RUSTC_VERSION");
