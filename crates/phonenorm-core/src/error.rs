use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("failed to parse {candidate:?}: {reason}")]
    Parse { candidate: String, reason: String },
}

impl NormalizeError {
    pub fn candidate(&self) -> &str {
        match self {
            NormalizeError::Parse { candidate, .. } => candidate,
        }
    }
}
