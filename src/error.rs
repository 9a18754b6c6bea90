use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Keyword phrase must not be empty")]
    EmptyPhrase,
    #[error("Unknown cluster: {0}")]
    UnknownCluster(String),
    #[error("Unknown priority: {0}")]
    UnknownPriority(String),
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("Keyword already exists: {0}")]
    DuplicatePhrase(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Caller supplied something the catalog cannot accept.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CoreError::EmptyPhrase
                | CoreError::UnknownCluster(_)
                | CoreError::UnknownPriority(_)
                | CoreError::InvalidField { .. }
                | CoreError::DuplicatePhrase(_)
        )
    }

    /// The snapshot could not be written. The in-memory mutation already happened.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, CoreError::Io(_) | CoreError::Serialization(_))
    }
}
