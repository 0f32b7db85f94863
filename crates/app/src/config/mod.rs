//! Application configuration

use clap::Args;
use thiserror::Error;

use crate::config::{
    api::ApiConfig,
    images::ImageHostConfig,
    observability::LoggingConfig,
    session::SessionConfig,
};

pub mod api;
pub mod images;
pub mod observability;
pub mod session;

/// Settings shared by every command, read from flags or the environment.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Catalog backend settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Image host settings.
    #[command(flatten)]
    pub images: ImageHostConfig,

    /// Authoring session settings.
    #[command(flatten)]
    pub session: SessionConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A URL setting does not parse.
    #[error("invalid {setting} url {value:?}: {reason}")]
    InvalidUrl {
        /// Environment variable carrying the value
        setting: &'static str,

        /// Offending value
        value: String,

        /// Parser message
        reason: String,
    },

    /// The currency code is not an ISO 4217 code.
    #[error("unknown currency code {0:?}")]
    UnknownCurrency(String),
}

/// Check that `value` is an absolute URL.
pub(crate) fn validate_url(setting: &'static str, value: &str) -> Result<(), ConfigError> {
    reqwest::Url::parse(value)
        .map(|_| ())
        .map_err(|error| ConfigError::InvalidUrl {
            setting,
            value: value.to_string(),
            reason: error.to_string(),
        })
}
