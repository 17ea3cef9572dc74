//! Client side of the execution backend ("watchman").
//!
//! [`api::WatchmanApi`] speaks the backend's HTTP protocol; [`relay::WatchmanRelay`]
//! runs one grading call on its own task so the caller can cancel it.

pub mod api;
pub mod relay;

pub use api::{CheckRequest, RelayError, WatchmanApi};
pub use relay::WatchmanRelay;
