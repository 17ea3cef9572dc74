//! Learner task progress model and DTOs.

use chrono::{DateTime, Utc};
use handyman_core::progress::ProgressStatus;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `task_progress` table.
///
/// `status` is read back as text (`status::TEXT`) so the model does not
/// depend on the postgres enum type at decode time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaskProgress {
    pub id: i64,
    pub user_id: String,
    pub task_id: String,
    pub status: String,
    pub solution_text: String,
    pub attempts_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for recording one submission's outcome.
#[derive(Debug, Clone)]
pub struct UpsertTaskProgress {
    pub user_id: String,
    pub task_id: String,
    pub status: ProgressStatus,
    pub solution_text: String,
}
