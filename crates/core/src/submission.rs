//! Submission request extraction.
//!
//! A submission arrives as three query parameters (`user_id`, `chapter_id`,
//! `task`) and the source code as the raw body. Validation is split in two
//! phases so the body is only consumed once the query is known to be good:
//!
//! 1. [`RunTaskQuery::validate`] checks the query and yields a [`TaskLocator`].
//! 2. [`TaskLocator::into_request`] checks the body and selects the
//!    environment, yielding a [`TaskRunRequest`].
//!
//! Each phase fails on the first invalid field, in the order above. A key
//! repeated in the query string keeps its first value.

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::error::CoreError;
use crate::progress::progress_task_key;

/// Raw query parameters of a submission, as received.
#[derive(Debug, Clone, Default)]
pub struct RunTaskQuery {
    pub user_id: Option<String>,
    pub chapter_id: Option<String>,
    pub task: Option<String>,
}

/// The validated query part of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLocator {
    pub user_id: String,
    pub chapter_id: String,
    pub task_index: u64,
}

/// A fully validated submission, ready to be relayed to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRunRequest {
    pub user_id: String,
    pub chapter_id: String,
    pub task_index: u64,
    pub source_code: String,
    pub environment: Environment,
}

/// Grading outcome reported by the execution backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRunResult {
    pub error_code: i32,
    pub output: String,
}

impl RunTaskQuery {
    /// Collect the known keys from decoded query pairs, first value wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "user_id" => &mut query.user_id,
                "chapter_id" => &mut query.chapter_id,
                "task" => &mut query.task,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    pub fn validate(self) -> Result<TaskLocator, CoreError> {
        let user_id =
            non_empty(self.user_id).ok_or_else(|| CoreError::validation("invalid user id"))?;
        let chapter_id =
            non_empty(self.chapter_id).ok_or_else(|| CoreError::validation("invalid chapter id"))?;

        let raw_task = self.task.unwrap_or_default();
        let task_index: u64 = raw_task.parse().map_err(|e| {
            tracing::warn!(task = %raw_task, error = %e, "Couldn't parse task index");
            CoreError::validation("invalid task id")
        })?;

        Ok(TaskLocator {
            user_id,
            chapter_id,
            task_index,
        })
    }
}

impl TaskLocator {
    /// Attach the submitted source and select the execution environment.
    pub fn into_request(self, body: &[u8]) -> Result<TaskRunRequest, CoreError> {
        if body.is_empty() {
            return Err(CoreError::validation("Empty source code"));
        }

        let environment = Environment::for_chapter(&self.chapter_id).ok_or_else(|| {
            CoreError::Validation(format!(
                "Couldn't specify container for chapter {}",
                self.chapter_id
            ))
        })?;

        Ok(TaskRunRequest {
            user_id: self.user_id,
            chapter_id: self.chapter_id,
            task_index: self.task_index,
            source_code: String::from_utf8_lossy(body).into_owned(),
            environment,
        })
    }
}

impl TaskRunRequest {
    /// Key of the progress row this submission updates.
    pub fn progress_key(&self) -> String {
        progress_task_key(&self.chapter_id, self.task_index)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
