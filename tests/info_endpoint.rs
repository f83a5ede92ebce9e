//! End-to-end tests for the runtime information endpoint.

use std::sync::Arc;

use serde_json::Value;

use vitals::flags::{ClientHandle, FlagState};
use vitals::VitalsConfig;

mod common;

async fn fetch_info(addr: std::net::SocketAddr) -> reqwest::Response {
    reqwest::Client::new()
        .get(format!("http://{addr}/api/info"))
        .send()
        .await
        .expect("service unreachable")
}

#[tokio::test]
async fn uninitialized_flags_report_canary_off() {
    let (addr, shutdown) =
        common::spawn_server(VitalsConfig::default(), FlagState::uninitialized()).await;

    let res = fetch_info(addr).await;
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["canary_enabled"], false);
    common::assert_user_key_format(body["user_key"].as_str().unwrap());

    shutdown.trigger();
}

#[tokio::test]
async fn treatment_on_reports_canary_enabled() {
    let (addr, shutdown) =
        common::spawn_server(VitalsConfig::default(), common::static_flag_state("on")).await;

    let body: Value = fetch_info(addr).await.json().await.unwrap();
    assert_eq!(body["canary_enabled"], true);
    common::assert_user_key_format(body["user_key"].as_str().unwrap());

    shutdown.trigger();
}

#[tokio::test]
async fn treatment_off_reports_canary_disabled() {
    let (addr, shutdown) =
        common::spawn_server(VitalsConfig::default(), common::static_flag_state("off")).await;

    let body: Value = fetch_info(addr).await.json().await.unwrap();
    assert_eq!(body["canary_enabled"], false);

    shutdown.trigger();
}

#[tokio::test]
async fn nonconforming_client_handle_still_returns_success() {
    // A handle that is not a treatment client at all
    let handle: ClientHandle = Arc::new(vec![1u8, 2, 3]);
    let (addr, shutdown) =
        common::spawn_server(VitalsConfig::default(), FlagState::from_handle(handle)).await;

    let res = fetch_info(addr).await;
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["canary_enabled"], false);

    shutdown.trigger();
}

#[tokio::test]
async fn response_schema_is_stable_across_calls() {
    let mut config = VitalsConfig::default();
    config.hostname = "vitals-test".to_string();
    config.ui.color = "#336699".to_string();
    config.ui.message = "hello from the test".to_string();

    let (addr, shutdown) = common::spawn_server(config, common::static_flag_state("on")).await;

    for _ in 0..5 {
        let body: Value = fetch_info(addr).await.json().await.unwrap();

        for field in [
            "hostname",
            "version",
            "revision",
            "color",
            "logo",
            "message",
            "goos",
            "goarch",
            "runtime",
            "num_goroutine",
            "num_cpu",
            "user_key",
        ] {
            assert!(
                body[field].is_string(),
                "{field} should be a JSON string, got {:?}",
                body[field]
            );
        }
        assert!(body["canary_enabled"].is_boolean());

        assert_eq!(body["hostname"], "vitals-test");
        assert_eq!(body["color"], "#336699");
        assert_eq!(body["message"], "hello from the test");

        // Counts are decimal strings on the wire
        body["num_goroutine"]
            .as_str()
            .unwrap()
            .parse::<u64>()
            .expect("num_goroutine should be a decimal string");
        let cpus: u64 = body["num_cpu"].as_str().unwrap().parse().unwrap();
        assert!(cpus >= 1);

        common::assert_user_key_format(body["user_key"].as_str().unwrap());
    }

    shutdown.trigger();
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (addr, shutdown) =
        common::spawn_server(VitalsConfig::default(), FlagState::uninitialized()).await;

    let res = reqwest::Client::new()
        .get(format!("http://{addr}/healthz"))
        .send()
        .await
        .expect("service unreachable");
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "OK");

    shutdown.trigger();
}
