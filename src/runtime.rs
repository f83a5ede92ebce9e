//! Host-process introspection.
//!
//! Facts about the running process gathered fresh at request time; nothing
//! here is cached between calls.

use tokio::runtime::Handle;

use crate::version;

/// Flat record of static and semi-static process facts.
#[derive(Debug, Clone)]
pub struct RuntimeSnapshot {
    /// Operating system name, e.g. "linux".
    pub os: &'static str,
    /// CPU architecture, e.g. "x86_64".
    pub arch: &'static str,
    /// Compiler version string captured at build time.
    pub runtime_version: &'static str,
    /// Tasks currently alive on the async runtime; 0 outside a runtime.
    pub num_tasks: usize,
    /// Logical CPUs available to the process.
    pub num_cpus: usize,
}

impl RuntimeSnapshot {
    /// Capture the process state at the instant of the call.
    pub fn capture() -> Self {
        let num_tasks = Handle::try_current()
            .map(|handle| handle.metrics().num_alive_tasks())
            .unwrap_or(0);
        let num_cpus = std::thread::available_parallelism()
            .map(std::num::NonZeroUsize::get)
            .unwrap_or(1);

        Self {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            runtime_version: version::RUNTIME,
            num_tasks,
            num_cpus,
        }
    }
}
