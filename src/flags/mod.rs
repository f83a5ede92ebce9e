//! Feature-flag subsystem.
//!
//! # Data Flow
//! ```text
//! startup:
//!     FlagsConfig → bootstrap() → FlagState (initialized + client handle)
//!     shared via Arc with every request
//!
//! per request:
//!     UserKey → evaluator.rs → treatment lookup → bool canary decision
//! ```
//!
//! # Design Decisions
//! - Treatment lookup is a trait; fakes drop in for tests
//! - The process-wide handle is type-erased, as handed over by an
//!   SDK-style init step; a single capability check recovers the trait
//! - Every failure path degrades to "off", never to an error

pub mod client;
pub mod evaluator;

pub use client::{Attributes, ClientHandle, SharedTreatmentClient, SnapshotClient, TreatmentClient};
pub use evaluator::{evaluate_canary, FlagState, CANARY_FLAG_KEY, TREATMENT_ON};

use crate::config::FlagsConfig;
use std::sync::Arc;

/// Build the process-wide flag state from configuration.
///
/// Called once at startup. With the subsystem disabled the state stays
/// uninitialized and every evaluation falls back to "off", matching an SDK
/// whose asynchronous setup never completed.
pub fn bootstrap(config: &FlagsConfig) -> FlagState {
    if !config.enabled {
        tracing::info!("flag subsystem disabled, canary evaluations default to off");
        return FlagState::uninitialized();
    }

    let client: SharedTreatmentClient = Arc::new(SnapshotClient::new(config.treatments.clone()));
    tracing::info!(
        treatments = config.treatments.len(),
        "flag snapshot loaded"
    );
    FlagState::ready(client)
}
