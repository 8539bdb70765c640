use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{command} failed: {detail}")]
    Adapter { command: String, detail: String },

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("profile store error: {path}: {detail}")]
    Persistence { path: PathBuf, detail: String },

    #[error("not found: {0}")]
    NotFound(String),
}

impl Error {
    pub(crate) fn persistence(path: impl Into<PathBuf>, detail: impl std::fmt::Display) -> Self {
        Error::Persistence {
            path: path.into(),
            detail: detail.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
