//! Best-effort persistence of grading outcomes.
//!
//! By the time an outcome is recorded the learner already has their result,
//! so a failed write is logged and dropped rather than surfaced.

use handyman_core::progress::ProgressStatus;
use handyman_db::models::task_progress::{TaskProgress, UpsertTaskProgress};
use handyman_db::repositories::TaskProgressRepo;
use handyman_db::DbPool;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct ProgressRecorder {
    pool: DbPool,
}

impl ProgressRecorder {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Upsert the learner's progress on `task_id` from a backend status code.
    ///
    /// Returns the stored row, or `None` if the write failed.
    pub async fn record(
        &self,
        user_id: &str,
        task_id: &str,
        status_code: i32,
        solution_text: &str,
    ) -> Option<TaskProgress> {
        let input = UpsertTaskProgress {
            user_id: user_id.to_string(),
            task_id: task_id.to_string(),
            status: ProgressStatus::from_status_code(status_code),
            solution_text: solution_text.to_string(),
        };

        match TaskProgressRepo::upsert(&self.pool, &input).await {
            Ok(row) => {
                tracing::info!(
                    user_id,
                    task_id,
                    status = %input.status,
                    attempts = row.attempts_count,
                    "Updated task status for user"
                );
                Some(row)
            }
            Err(e) => {
                tracing::error!(
                    user_id,
                    task_id,
                    db_error = %e,
                    "Couldn't update task status for user"
                );
                None
            }
        }
    }

    /// Record on a detached task so the caller does not wait for the write.
    pub fn spawn_record(
        &self,
        user_id: String,
        task_id: String,
        status_code: i32,
        solution_text: String,
    ) -> JoinHandle<()> {
        let recorder = self.clone();
        tokio::spawn(async move {
            recorder
                .record(&user_id, &task_id, status_code, &solution_text)
                .await;
        })
    }
}
