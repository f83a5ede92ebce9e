//! Runtime information endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::instrument;

use crate::flags::evaluate_canary;
use crate::http::server::AppState;
use crate::identity::UserKey;
use crate::runtime::RuntimeSnapshot;
use crate::version;

/// Response body of `GET /api/info`.
///
/// Wire field names and the decimal-string encoding of the count fields are
/// pinned for compatibility with dashboards built against the original
/// endpoint.
#[derive(Debug, Serialize)]
pub struct RuntimeResponse {
    pub hostname: String,
    pub version: String,
    pub revision: String,
    pub color: String,
    pub logo: String,
    pub message: String,
    #[serde(rename = "goos")]
    pub os: String,
    #[serde(rename = "goarch")]
    pub arch: String,
    pub runtime: String,
    #[serde(rename = "num_goroutine")]
    pub num_tasks: String,
    pub num_cpu: String,
    pub canary_enabled: bool,
    pub user_key: String,
}

/// Report process runtime metadata plus a canary decision for a fresh
/// per-request user key. Always succeeds.
#[instrument(name = "info_handler", skip_all)]
pub async fn info_handler(State(state): State<AppState>) -> Json<RuntimeResponse> {
    let user_key = UserKey::generate();
    let canary_enabled = evaluate_canary(&state.flags, &user_key);
    let snapshot = RuntimeSnapshot::capture();

    Json(assemble_response(
        &state,
        snapshot,
        canary_enabled,
        user_key,
    ))
}

/// Merge the canary decision and identity with static config, build identity
/// and the runtime snapshot. Pure field copying.
fn assemble_response(
    state: &AppState,
    snapshot: RuntimeSnapshot,
    canary_enabled: bool,
    user_key: UserKey,
) -> RuntimeResponse {
    RuntimeResponse {
        hostname: state.hostname.clone(),
        version: version::VERSION.to_string(),
        revision: version::REVISION.to_string(),
        color: state.config.ui.color.clone(),
        logo: state.config.ui.logo.clone(),
        message: state.config.ui.message.clone(),
        os: snapshot.os.to_string(),
        arch: snapshot.arch.to_string(),
        runtime: snapshot.runtime_version.to_string(),
        num_tasks: snapshot.num_tasks.to_string(),
        num_cpu: snapshot.num_cpus.to_string(),
        canary_enabled,
        user_key: user_key.as_str().to_string(),
    }
}
