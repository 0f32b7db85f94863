//! Image host errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageHostError {
    #[error("image host key is not configured")]
    MissingKey,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("image host rejected upload with status {0}")]
    Rejected(u16),

    #[error("image host did not confirm the upload: {0}")]
    Unconfirmed(String),
}
