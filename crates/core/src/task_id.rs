//! Per-submission task identifiers.
//!
//! Convention: `{chapter_id}_{user_id}_{task_index}_{unix_nanos}`.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use crate::submission::TaskRunRequest;

/// Compose a task identifier from its parts.
///
/// ```
/// use handyman_core::task_id::compose_task_id;
///
/// assert_eq!(compose_task_id("python101", "u1", 2, 42), "python101_u1_2_42");
/// ```
pub fn compose_task_id(chapter_id: &str, user_id: &str, task_index: u64, nanos: i64) -> String {
    format!("{chapter_id}_{user_id}_{task_index}_{nanos}")
}

/// Hands out task identifiers stamped with the submission time.
///
/// Within one generator the nanosecond component is strictly increasing, so
/// two submissions of the same task never share an identifier even when the
/// clock does not advance between them.
#[derive(Debug, Default)]
pub struct TaskIdGenerator {
    last_nanos: AtomicI64,
}

impl TaskIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the identifier for `request`, reading the wall clock once.
    pub fn next_id(&self, request: &TaskRunRequest) -> String {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
        compose_task_id(
            &request.chapter_id,
            &request.user_id,
            request.task_index,
            self.advance(now),
        )
    }

    fn advance(&self, now: i64) -> i64 {
        let bump = |last: i64| if now > last { now } else { last.saturating_add(1) };
        let prev = self
            .last_nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(bump(last)))
            .unwrap_or_else(|last| last);
        bump(prev)
    }
}
