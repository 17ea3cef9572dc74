use std::sync::Arc;
use std::time::Duration;

use handyman_core::task_id::TaskIdGenerator;
use handyman_watchman::{WatchmanApi, WatchmanRelay};

use crate::config::ServerConfig;
use crate::progress::ProgressRecorder;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: handyman_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Relay to the execution backend.
    pub relay: WatchmanRelay,
    /// Per-submission task identifier source.
    pub task_ids: Arc<TaskIdGenerator>,
    /// Best-effort progress persistence.
    pub progress: ProgressRecorder,
}

impl AppState {
    /// Wire the state from an open pool and the loaded configuration.
    ///
    /// The pool is shared by the health check and the progress recorder.
    pub fn new(pool: handyman_db::DbPool, config: ServerConfig) -> Result<Self, reqwest::Error> {
        let watchman = WatchmanApi::new(
            config.watchman_url.clone(),
            Duration::from_secs(config.watchman_timeout_secs),
        )?;

        Ok(Self {
            progress: ProgressRecorder::new(pool.clone()),
            pool,
            config: Arc::new(config),
            relay: WatchmanRelay::new(watchman),
            task_ids: Arc::new(TaskIdGenerator::new()),
        })
    }
}
