//! Handler for chapter status updates.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use handyman_core::chapter_status::ChapterStatusQuery;

use crate::error::AppResult;
use crate::handlers::{query_pairs, QueryPairs};

/// `/update_chapter_status?user_id=..&chapter_id=..&status=..`
///
/// Validates and logs the update. Nothing is persisted yet: chapter status
/// has no table, task progress is recorded by the submission flow.
pub async fn update_chapter_status(
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> AppResult<StatusCode> {
    let update = ChapterStatusQuery::from_pairs(query_pairs(query)).validate()?;

    tracing::debug!(
        user_id = %update.user_id,
        chapter_id = %update.chapter_id,
        status = %update.status,
        "Parsed url params"
    );

    Ok(StatusCode::OK)
}
