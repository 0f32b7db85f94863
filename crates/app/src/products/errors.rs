//! Products API errors.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("unexpected response from catalog backend: {0}")]
    UnexpectedResponse(String),
}

impl ProductsApiError {
    /// Human-readable message supplied by the backend, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Http(_) | Self::UnexpectedResponse(_) => None,
        }
    }

    /// Build a rejection from a non-success status and its response body.
    pub(crate) fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected {
            status,
            message: rejection_message(body),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    message: Option<String>,
}

fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<RejectionBody>(body)
        .ok()
        .and_then(|body| body.message)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}
