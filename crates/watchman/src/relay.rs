//! Cancellable relay of one submission to the backend.
//!
//! Each grading call runs on its own tokio task. The caller awaits the
//! returned handle and keeps a [`CancellationToken`]; cancelling the token
//! aborts the in-flight HTTP request instead of leaving it running after the
//! caller has stopped waiting.

use std::sync::Arc;

use handyman_core::submission::{TaskRunRequest, TaskRunResult};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::api::{CheckRequest, RelayError, WatchmanApi};

#[derive(Debug, Clone)]
pub struct WatchmanRelay {
    api: Arc<WatchmanApi>,
}

impl WatchmanRelay {
    pub fn new(api: WatchmanApi) -> Self {
        Self { api: Arc::new(api) }
    }

    /// Whether the backend answers at all; see [`WatchmanApi::is_reachable`].
    pub async fn backend_reachable(&self) -> bool {
        self.api.is_reachable().await
    }

    /// Start relaying `request` under `task_id` on a dedicated task.
    ///
    /// The task resolves exactly once: with the backend result, with the
    /// backend's error, or with [`RelayError::Cancelled`] if `cancel` fires
    /// first.
    pub fn spawn(
        &self,
        request: &TaskRunRequest,
        task_id: String,
        cancel: CancellationToken,
    ) -> JoinHandle<Result<TaskRunResult, RelayError>> {
        let api = Arc::clone(&self.api);
        let payload = CheckRequest {
            container_type: request.environment,
            source: request.source_code.clone(),
            task_id,
        };

        tokio::spawn(async move {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    tracing::info!(task_id = %payload.task_id, "Watchman call cancelled");
                    Err(RelayError::Cancelled)
                }
                result = api.check(&payload) => result,
            }
        })
    }

    /// Relay `request` and wait for the outcome.
    pub async fn run(
        &self,
        request: &TaskRunRequest,
        task_id: String,
        cancel: CancellationToken,
    ) -> Result<TaskRunResult, RelayError> {
        self.spawn(request, task_id, cancel)
            .await
            .map_err(|e| RelayError::Join(e.to_string()))?
    }
}
