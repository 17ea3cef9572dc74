//! REST client for the watchman `/check` endpoint.

use std::time::Duration;

use handyman_core::environment::Environment;
use handyman_core::submission::TaskRunResult;
use reqwest::StatusCode;
use serde::Serialize;

/// Upper bound for the health-check request to the backend.
const REACHABILITY_TIMEOUT: Duration = Duration::from_secs(2);

/// Outbound payload of a grading request.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRequest {
    pub container_type: Environment,
    pub source: String,
    pub task_id: String,
}

/// Errors from relaying a submission to the backend.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The HTTP request itself failed (connection refused, DNS, timeout).
    #[error("{0}")]
    Transport(reqwest::Error),

    /// The backend answered with something other than 200.
    #[error("HTTP error {0}")]
    Status(u16),

    /// The backend answered 200 but the body is not a grading result.
    #[error("Couldn't parse json body: {0}")]
    Decode(reqwest::Error),

    /// The caller gave up before the backend answered.
    #[error("request cancelled")]
    Cancelled,

    /// The outer response deadline passed before the relay finished.
    #[error("no reply within {}s", .0.as_secs())]
    TimedOut(Duration),

    /// The relay task panicked or was aborted.
    #[error("relay task failed: {0}")]
    Join(String),
}

/// HTTP client for the execution backend.
#[derive(Debug, Clone)]
pub struct WatchmanApi {
    client: reqwest::Client,
    check_url: String,
}

impl WatchmanApi {
    /// Create a client posting to `check_url`, giving up on any single call
    /// after `timeout`.
    pub fn new(check_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, check_url })
    }

    /// Whether anything answers HTTP at the check address.
    ///
    /// Any response counts, including 405 for the GET: only a transport
    /// failure means the backend is down.
    pub async fn is_reachable(&self) -> bool {
        let probe = self
            .client
            .get(&self.check_url)
            .timeout(REACHABILITY_TIMEOUT)
            .send()
            .await;
        match probe {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(url = %self.check_url, error = %e, "Watchman unreachable");
                false
            }
        }
    }

    /// Submit one grading request. Never retried.
    pub async fn check(&self, payload: &CheckRequest) -> Result<TaskRunResult, RelayError> {
        let response = self
            .client
            .post(&self.check_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(
                    task_id = %payload.task_id,
                    error = %e,
                    "Couldn't send request to watchman"
                );
                RelayError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(
                task_id = %payload.task_id,
                status = status.as_u16(),
                "Watchman returned non-200"
            );
            return Err(RelayError::Status(status.as_u16()));
        }

        response.json::<TaskRunResult>().await.map_err(|e| {
            tracing::warn!(task_id = %payload.task_id, error = %e, "Couldn't read watchman reply");
            if e.is_decode() {
                RelayError::Decode(e)
            } else {
                RelayError::Transport(e)
            }
        })
    }
}
