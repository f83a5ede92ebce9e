//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration for the vitals service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct VitalsConfig {
    /// Hostname reported by the info endpoint. Resolved from the
    /// `HOSTNAME` environment variable when left empty.
    pub hostname: String,

    /// Listener configuration (bind address, timeouts).
    pub listener: ListenerConfig,

    /// UI theming strings echoed back by the info endpoint.
    pub ui: UiConfig,

    /// Feature-flag source settings.
    pub flags: FlagsConfig,
}

impl VitalsConfig {
    /// Hostname to report, falling back to the environment.
    pub fn resolved_hostname(&self) -> String {
        if !self.hostname.is_empty() {
            return self.hostname.clone();
        }
        std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string())
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:9898").
    pub bind_address: String,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:9898".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// UI theming strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Accent color, hex notation.
    pub color: String,

    /// Logo URL, empty when unset.
    pub logo: String,

    /// Greeting shown by dashboards consuming the endpoint.
    pub message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: "#34577c".to_string(),
            logo: String::new(),
            message: "greetings from vitals".to_string(),
        }
    }
}

/// Feature-flag source settings.
///
/// Treatments are a static `flag key -> treatment string` snapshot loaded at
/// process start. With `enabled = false` the flag subsystem stays
/// uninitialized and every evaluation falls back to "off".
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FlagsConfig {
    /// Enable the flag subsystem.
    pub enabled: bool,

    /// Flag key to treatment string, e.g. `podinfo_canary = "on"`.
    pub treatments: HashMap<String, String>,
}
