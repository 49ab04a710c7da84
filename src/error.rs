use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangesetError {
    #[error("Not a git repository (or any parent up to the filesystem root): {}", path.display())]
    RepositoryNotFound { path: PathBuf },

    #[error("Failed to read repository: {0}")]
    RepositoryAccess(#[source] git2::Error),

    #[error("Failed to compute diff: {0}")]
    DiffComputation(#[source] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ChangesetError>;
