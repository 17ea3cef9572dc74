//! Domain types and pure policy for the handyman submission gateway.
//!
//! Nothing in this crate performs I/O: request validation, environment
//! selection, task identifier composition and progress status derivation
//! all live here so the HTTP, database and backend layers share one
//! definition of each rule.

pub mod chapter_status;
pub mod environment;
pub mod error;
pub mod progress;
pub mod submission;
pub mod task_id;
