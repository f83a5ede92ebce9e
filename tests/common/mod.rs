//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use vitals::flags::{Attributes, FlagState, SharedTreatmentClient, TreatmentClient};
use vitals::http::HttpServer;
use vitals::lifecycle::Shutdown;
use vitals::VitalsConfig;

/// Treatment client returning one fixed treatment for every lookup.
pub struct StaticClient(pub &'static str);

impl TreatmentClient for StaticClient {
    fn treatment(
        &self,
        _user_key: &str,
        _flag_key: &str,
        _attributes: Option<&Attributes>,
    ) -> String {
        self.0.to_string()
    }
}

/// Flag state wrapping a fixed-treatment client.
pub fn static_flag_state(treatment: &'static str) -> FlagState {
    let client: SharedTreatmentClient = Arc::new(StaticClient(treatment));
    FlagState::ready(client)
}

/// Spawn a vitals server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; trigger it to stop the
/// server at the end of the test.
pub async fn spawn_server(config: VitalsConfig, flags: FlagState) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, flags);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Assert the user key matches `user-key-<n>` with `n` in `[1, 1000]`.
#[allow(dead_code)]
pub fn assert_user_key_format(user_key: &str) {
    let n: u32 = user_key
        .strip_prefix("user-key-")
        .unwrap_or_else(|| panic!("unexpected user key format: {user_key}"))
        .parse()
        .unwrap_or_else(|_| panic!("non-numeric user key suffix: {user_key}"));
    assert!((1..=1000).contains(&n), "user key suffix {n} out of range");
}
