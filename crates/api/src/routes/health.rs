//! Liveness of the gateway and of both collaborators it depends on.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when every collaborator answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether watchman answers HTTP at its check address.
    pub watchman_reachable: bool,
}

/// GET /health
///
/// Always 200: the gateway itself is up if it can answer. The database
/// ping and the watchman probe run concurrently.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (db, watchman_reachable) = tokio::join!(
        handyman_db::health_check(&state.pool),
        state.relay.backend_reachable(),
    );
    let db_healthy = db.is_ok();

    Json(HealthResponse {
        status: if db_healthy && watchman_reachable {
            "ok"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        watchman_reachable,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
