//! Treatment lookup clients.
//!
//! The lookup capability is a plain trait so request handling never depends
//! on a concrete flag vendor. The process-wide handle is type-erased the way
//! an SDK init step hands it over; [`as_treatment_client`] is the one place
//! that recovers the capability, returning `None` instead of panicking when
//! the handle has the wrong shape.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Optional per-call attributes for a treatment lookup. Unused by this
/// service, which always passes `None`.
pub type Attributes = HashMap<String, String>;

/// Treatment string returned for flags the client knows nothing about.
pub const CONTROL_TREATMENT: &str = "control";

/// Capability to resolve a flag key to a treatment string for an identity.
///
/// Implementations keep a locally synchronized flag snapshot; lookups are
/// bounded, synchronous, in-process calls.
pub trait TreatmentClient: Send + Sync {
    /// Resolve the treatment for `flag_key` as seen by `user_key`.
    ///
    /// Returns an arbitrary string, commonly "on", "off", or "control" for
    /// an unknown flag. Never fails.
    fn treatment(&self, user_key: &str, flag_key: &str, attributes: Option<&Attributes>)
        -> String;
}

/// Shared, thread-safe treatment client.
pub type SharedTreatmentClient = Arc<dyn TreatmentClient>;

/// Type-erased client handle as owned by process-wide state.
pub type ClientHandle = Arc<dyn Any + Send + Sync>;

/// Recover the treatment capability from a type-erased handle.
pub fn as_treatment_client(handle: &ClientHandle) -> Option<&SharedTreatmentClient> {
    handle.downcast_ref::<SharedTreatmentClient>()
}

/// In-process client backed by a static flag snapshot.
///
/// The snapshot is immutable after construction, so concurrent readers need
/// no synchronization.
#[derive(Debug, Default)]
pub struct SnapshotClient {
    treatments: HashMap<String, String>,
}

impl SnapshotClient {
    pub fn new(treatments: HashMap<String, String>) -> Self {
        Self { treatments }
    }
}

impl TreatmentClient for SnapshotClient {
    fn treatment(
        &self,
        _user_key: &str,
        flag_key: &str,
        _attributes: Option<&Attributes>,
    ) -> String {
        self.treatments
            .get(flag_key)
            .cloned()
            .unwrap_or_else(|| CONTROL_TREATMENT.to_string())
    }
}
