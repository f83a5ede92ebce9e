//! Canary flag evaluation.
//!
//! One boolean decision per request: does this user key get the canary?
//! Evaluation never surfaces an error — an uninitialized subsystem, a
//! malformed client handle, or an unrecognized treatment string all resolve
//! to the canary being off.

use crate::flags::client::{as_treatment_client, ClientHandle, SharedTreatmentClient};
use crate::identity::UserKey;

/// Flag key looked up for every request.
pub const CANARY_FLAG_KEY: &str = "podinfo_canary";

/// The only treatment string that enables the canary.
pub const TREATMENT_ON: &str = "on";

/// Process-wide flag subsystem state, created once at startup and shared
/// read-only with every request.
pub struct FlagState {
    initialized: bool,
    client: Option<ClientHandle>,
}

impl FlagState {
    /// State for a subsystem whose setup has not completed. The handle is
    /// absent and is never inspected.
    pub fn uninitialized() -> Self {
        Self {
            initialized: false,
            client: None,
        }
    }

    /// State wrapping a ready treatment client.
    pub fn ready(client: SharedTreatmentClient) -> Self {
        Self {
            initialized: true,
            client: Some(std::sync::Arc::new(client) as ClientHandle),
        }
    }

    /// State adopting an arbitrary handle from an SDK-style init boundary.
    /// The handle may turn out not to be a treatment client at all; that is
    /// caught per evaluation, not here.
    pub fn from_handle(handle: ClientHandle) -> Self {
        Self {
            initialized: true,
            client: Some(handle),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The treatment capability, if setup completed and the handle conforms.
    ///
    /// An uninitialized state never touches the handle.
    pub fn treatment_client(&self) -> Option<&SharedTreatmentClient> {
        if !self.initialized {
            return None;
        }
        self.client.as_ref().and_then(as_treatment_client)
    }
}

/// Evaluate the canary flag for one user key.
///
/// Three outcomes, all terminating in a definite boolean:
/// 1. subsystem uninitialized: off, no lookup, no log (expected at startup)
/// 2. handle does not expose a treatment lookup: off, one error event
/// 3. lookup performed: on iff the treatment string equals "on" exactly
pub fn evaluate_canary(state: &FlagState, user_key: &UserKey) -> bool {
    if !state.is_initialized() {
        return false;
    }

    let Some(client) = state.treatment_client() else {
        tracing::error!("flag client handle does not expose a treatment lookup");
        return false;
    };

    let treatment = client.treatment(user_key.as_str(), CANARY_FLAG_KEY, None);
    tracing::info!(
        user_key = %user_key,
        flag_key = CANARY_FLAG_KEY,
        treatment = %treatment,
        "evaluated canary treatment"
    );
    treatment == TREATMENT_ON
}
