//! Per-request pseudo-identity generation.
//!
//! Every call to the info endpoint evaluates the canary flag for a fresh,
//! throwaway user key so repeated refreshes spread across treatment buckets.
//! The key is never persisted and carries no user data.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Opaque key identifying one simulated end-user for flag evaluation.
///
/// Format is `user-key-<n>` with `n` in `[1, 1000]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserKey(String);

impl UserKey {
    /// Generate a fresh key from a time-seeded random source.
    ///
    /// The source is re-seeded from the wall clock on every call; two calls
    /// landing on the same nanosecond tick may collide, which is fine for
    /// traffic splitting. This is not a security boundary.
    pub fn generate() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let mut rng = StdRng::seed_from_u64(nanos);
        let n: u32 = rng.gen_range(0..1000) + 1;
        UserKey(format!("user-key-{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
