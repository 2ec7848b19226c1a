use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoSenseError {
    #[error("Notes directory does not exist: {path}")]
    InputNotFound { path: PathBuf },

    #[error("No .md documents found in: {path}")]
    EmptyInput { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepoSenseError>;

impl RepoSenseError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 2,
            Self::EmptyInput { .. } => 3,
            _ => 1,
        }
    }
}
