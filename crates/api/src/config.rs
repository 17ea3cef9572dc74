/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running next to a local watchman.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Full URL of the watchman check endpoint.
    pub watchman_url: String,
    /// Deadline for a single watchman call in seconds (default: `30`).
    pub watchman_timeout_secs: u64,
    /// Deadline for answering a submission in seconds (default: `40`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                       |
    /// |-------------------------|-------------------------------|
    /// | `HOST`                  | `127.0.0.1`                   |
    /// | `PORT`                  | `8080`                        |
    /// | `WATCHMAN_URL`          | `http://127.0.0.1:8000/check` |
    /// | `WATCHMAN_TIMEOUT_SECS` | `30`                          |
    /// | `REQUEST_TIMEOUT_SECS`  | `40`                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let watchman_url = std::env::var("WATCHMAN_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000/check".into());

        let watchman_timeout_secs: u64 = std::env::var("WATCHMAN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("WATCHMAN_TIMEOUT_SECS must be a valid u64");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "40".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            watchman_url,
            watchman_timeout_secs,
            request_timeout_secs,
        }
    }
}
