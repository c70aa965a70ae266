use std::path::PathBuf;

use market::{ApiError, DraftError, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("session file {}: {source}", path.display())]
    SessionFile { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("invalid --utc-offset {0}: must be between -1439 and 1439 minutes")]
    InvalidOffset(i32),
    #[error("not logged in; run `neighbourcare login` first")]
    NotLoggedIn,
}
