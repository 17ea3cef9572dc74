//! Handler for the submission endpoint.
//!
//! Flow: validate the query, read the body, validate the source, relay to
//! watchman under the response deadline, answer with the grading result.
//! Every outcome a caller can act on is answered with HTTP 200; see
//! [`AppError`].

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use handyman_core::submission::{RunTaskQuery, TaskRunRequest, TaskRunResult};
use handyman_watchman::RelayError;
use tokio_util::sync::CancellationToken;

use crate::error::{AppError, AppResult};
use crate::handlers::{query_pairs, QueryPairs};
use crate::state::AppState;

/// Largest accepted submission body.
pub const MAX_SOURCE_BYTES: usize = 10 * 1024 * 1024;

/// `/run_task?user_id=..&chapter_id=..&task=..` with the source as the body.
pub async fn run_task(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    body: Body,
) -> AppResult<Json<TaskRunResult>> {
    let locator = RunTaskQuery::from_pairs(query_pairs(query)).validate()?;

    let bytes = to_bytes(body, MAX_SOURCE_BYTES)
        .await
        .map_err(|e| AppError::BodyRead(e.to_string()))?;
    let request = locator.into_request(&bytes)?;

    tracing::info!(
        user_id = %request.user_id,
        chapter_id = %request.chapter_id,
        task_index = request.task_index,
        environment = %request.environment,
        "Parsed url params"
    );

    let deadline = Duration::from_secs(state.config.request_timeout_secs);
    let result = relay_within(&state, &request, deadline).await?;
    tracing::info!(
        user_id = %request.user_id,
        error_code = result.error_code,
        "Successfully communicated watchman"
    );

    state.progress.spawn_record(
        request.user_id.clone(),
        request.progress_key(),
        result.error_code,
        request.source_code,
    );

    Ok(Json(result))
}

/// Relay `request`, cancelling the backend call if `deadline` passes or the
/// caller goes away first.
async fn relay_within(
    state: &AppState,
    request: &TaskRunRequest,
    deadline: Duration,
) -> Result<TaskRunResult, RelayError> {
    let task_id = state.task_ids.next_id(request);
    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    match tokio::time::timeout(deadline, state.relay.run(request, task_id, cancel)).await {
        Ok(outcome) => outcome,
        Err(_) => {
            tracing::warn!(
                user_id = %request.user_id,
                deadline_secs = deadline.as_secs(),
                "Watchman did not answer before the response deadline"
            );
            Err(RelayError::TimedOut(deadline))
        }
    }
}
