//! Tests for the best-effort progress recorder.

use handyman_api::progress::ProgressRecorder;
use handyman_db::repositories::TaskProgressRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn zero_status_code_records_completed(pool: PgPool) {
    let recorder = ProgressRecorder::new(pool);

    let row = recorder
        .record("u1", "python101_2", 0, "print(1)")
        .await
        .expect("write should succeed");

    assert_eq!(row.status, "completed");
    assert_eq!(row.attempts_count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resubmission_overwrites_and_counts(pool: PgPool) {
    let recorder = ProgressRecorder::new(pool.clone());

    recorder.record("u1", "python101_2", 1, "print(0)").await.unwrap();
    let row = recorder.record("u1", "python101_2", 0, "print(1)").await.unwrap();

    assert_eq!(row.attempts_count, 2);
    assert_eq!(row.status, "completed");
    assert_eq!(row.solution_text, "print(1)");

    let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM task_progress WHERE user_id = $1")
        .bind("u1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn spawned_record_completes(pool: PgPool) {
    let recorder = ProgressRecorder::new(pool.clone());

    recorder
        .spawn_record("u2".into(), "rust_intro_0".into(), 3, "fn main() {}".into())
        .await
        .unwrap();

    let row = TaskProgressRepo::find(&pool, "u2", "rust_intro_0")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.status, "in_progress");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn write_failure_is_swallowed(pool: PgPool) {
    let recorder = ProgressRecorder::new(pool.clone());
    pool.close().await;

    let row = recorder.record("u1", "python101_2", 0, "print(1)").await;

    assert!(row.is_none());
}
