//! Repository for the `task_progress` table.

use sqlx::PgPool;

use crate::models::task_progress::{TaskProgress, UpsertTaskProgress};

/// Column list for `task_progress` queries.
const COLUMNS: &str = "\
    id, user_id, task_id, status::TEXT AS status, solution_text, \
    attempts_count, created_at, updated_at";

/// Added to `attempts_count` by every upsert.
const ATTEMPT_INCREMENT: i32 = 1;

/// Provides query operations for learner task progress.
pub struct TaskProgressRepo;

impl TaskProgressRepo {
    /// Record one submission for `(user_id, task_id)` in a single statement.
    ///
    /// Inserts the row on first submission. Afterwards the status and
    /// solution are overwritten and `attempts_count` grows by one. Running
    /// as one `INSERT .. ON CONFLICT` keeps concurrent submissions of the
    /// same key from losing an attempt.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertTaskProgress,
    ) -> Result<TaskProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO task_progress (user_id, task_id, status, solution_text, attempts_count) \
             VALUES ($1, $2, $3::edu_material_status, $4, $5) \
             ON CONFLICT ON CONSTRAINT unique_user_task_id \
             DO UPDATE SET \
                 status = EXCLUDED.status, \
                 solution_text = EXCLUDED.solution_text, \
                 attempts_count = task_progress.attempts_count + EXCLUDED.attempts_count, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskProgress>(&query)
            .bind(&input.user_id)
            .bind(&input.task_id)
            .bind(input.status.as_str())
            .bind(&input.solution_text)
            .bind(ATTEMPT_INCREMENT)
            .fetch_one(pool)
            .await
    }

    /// Find the progress row for a learner's task, if any.
    pub async fn find(
        pool: &PgPool,
        user_id: &str,
        task_id: &str,
    ) -> Result<Option<TaskProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM task_progress \
             WHERE user_id = $1 AND task_id = $2"
        );
        sqlx::query_as::<_, TaskProgress>(&query)
            .bind(user_id)
            .bind(task_id)
            .fetch_optional(pool)
            .await
    }
}
