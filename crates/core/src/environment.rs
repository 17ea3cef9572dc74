//! Execution environment selection.
//!
//! Chapters are routed to an isolated runtime by the prefix of their
//! identifier (`python101` runs in the Python container, `rust_basics` in
//! the Rust one). The set of environments is closed: a chapter whose prefix
//! is not listed here is rejected rather than guessed at.

use std::fmt;

use serde::Serialize;

/// An isolated runtime the execution backend can run a submission in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Environment {
    #[serde(rename = "python_env")]
    Python,
    #[serde(rename = "rust_env")]
    Rust,
}

impl Environment {
    /// Every supported environment, in prefix-matching order.
    pub const ALL: [Environment; 2] = [Environment::Python, Environment::Rust];

    /// Chapter identifier prefix that selects this environment.
    pub fn chapter_prefix(self) -> &'static str {
        match self {
            Environment::Python => "python",
            Environment::Rust => "rust",
        }
    }

    /// Tag sent to the backend as `container_type`.
    pub fn container_type(self) -> &'static str {
        match self {
            Environment::Python => "python_env",
            Environment::Rust => "rust_env",
        }
    }

    /// Select the environment for a chapter, or `None` if no prefix matches.
    pub fn for_chapter(chapter_id: &str) -> Option<Environment> {
        Self::ALL
            .into_iter()
            .find(|env| chapter_id.starts_with(env.chapter_prefix()))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.container_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_prefix_selects_python() {
        assert_eq!(Environment::for_chapter("python101"), Some(Environment::Python));
        assert_eq!(Environment::for_chapter("python"), Some(Environment::Python));
    }

    #[test]
    fn rust_prefix_selects_rust() {
        assert_eq!(Environment::for_chapter("rust_ownership"), Some(Environment::Rust));
    }

    #[test]
    fn unknown_prefixes_are_rejected() {
        for chapter in ["go101", "cpp_intro", "Python101", "py101", "", " python101", "xrust"] {
            assert_eq!(Environment::for_chapter(chapter), None, "chapter {chapter:?}");
        }
    }

    #[test]
    fn container_type_matches_serde_tag() {
        for env in Environment::ALL {
            let json = serde_json::to_value(env).unwrap();
            assert_eq!(json, env.container_type());
        }
    }

    #[test]
    fn display_is_container_type() {
        assert_eq!(Environment::Rust.to_string(), "rust_env");
    }
}
