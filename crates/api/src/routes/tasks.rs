use axum::routing::any;
use axum::Router;

use crate::handlers::{chapter_status, run_task};
use crate::state::AppState;

/// Submission and progress routes, mounted at the root.
///
/// Any method is accepted, as existing callers use both GET and POST.
///
/// ```text
/// /run_task                 -> run_task
/// /update_chapter_status    -> update_chapter_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/run_task", any(run_task::run_task))
        .route(
            "/update_chapter_status",
            any(chapter_status::update_chapter_status),
        )
}
