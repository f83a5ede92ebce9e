//! Liveness probe.

use axum::Json;
use serde_json::{json, Value};

/// `GET /healthz` — always healthy while the process can serve requests.
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}
