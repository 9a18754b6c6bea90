use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`CoreConfig::with_env_override`] callers
/// that have no variable of their own.
pub const SNAPSHOT_ENV_VAR: &str = "SEMANTIC_CORE_SNAPSHOT";

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    pub snapshot_path: PathBuf,
    /// Pretty-print the snapshot JSON.
    pub pretty: bool,
    /// Cap on phrases emitted by [`crate::report::meta_keywords`].
    pub meta_keyword_limit: usize,
}

impl CoreConfig {
    pub fn v0() -> Self {
        Self {
            snapshot_path: PathBuf::from("semantic_core.json"),
            pretty: true,
            meta_keyword_limit: 20,
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: path.into(),
            ..Self::v0()
        }
    }

    /// Take `snapshot_path` from `var` when it is set and non-empty.
    pub fn with_env_override(mut self, var: &str) -> Self {
        if let Ok(path) = std::env::var(var) {
            if !path.trim().is_empty() {
                self.snapshot_path = PathBuf::from(path);
            }
        }
        self
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::v0()
    }
}
