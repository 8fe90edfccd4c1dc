use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeckitError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpeckitError>;
