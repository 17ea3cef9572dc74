//! Learner progress status.
//!
//! The names must match the `edu_material_status` postgres enum created in
//! `20261001000001_create_task_progress.sql`.

use std::fmt;

/// The task was solved: the backend reported exit code 0.
pub const STATUS_COMPLETED: &str = "completed";

/// The task was attempted but not yet solved.
pub const STATUS_IN_PROGRESS: &str = "in_progress";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    Completed,
    InProgress,
}

impl ProgressStatus {
    /// Derive the status from a backend `error_code`: zero means solved.
    pub fn from_status_code(code: i32) -> Self {
        if code == 0 {
            ProgressStatus::Completed
        } else {
            ProgressStatus::InProgress
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProgressStatus::Completed => STATUS_COMPLETED,
            ProgressStatus::InProgress => STATUS_IN_PROGRESS,
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key under which a learner's progress on one task is stored.
///
/// Unlike the per-submission task identifier this carries no timestamp, so
/// every submission of the same task lands on the same row.
pub fn progress_task_key(chapter_id: &str, task_index: u64) -> String {
    format!("{chapter_id}_{task_index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_completed() {
        assert_eq!(ProgressStatus::from_status_code(0), ProgressStatus::Completed);
    }

    #[test]
    fn nonzero_is_in_progress() {
        for code in [1, -1, 2, 137, i32::MAX, i32::MIN] {
            assert_eq!(
                ProgressStatus::from_status_code(code),
                ProgressStatus::InProgress,
                "code {code}"
            );
        }
    }

    #[test]
    fn names_match_db_enum() {
        assert_eq!(ProgressStatus::Completed.as_str(), "completed");
        assert_eq!(ProgressStatus::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn task_key_has_no_timestamp() {
        assert_eq!(progress_task_key("python101", 2), "python101_2");
    }
}
