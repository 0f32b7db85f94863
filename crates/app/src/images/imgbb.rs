//! imgbb-style image host client.

use async_trait::async_trait;
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::Deserialize;
use tracing::debug;

use crate::images::{ImageFile, ImageHost, ImageHostError};

/// Multipart field carrying the file.
const IMAGE_FIELD: &str = "image";

/// Client for hosts that take one multipart `image` per request and an API key as `?key=`.
#[derive(Debug, Clone)]
pub struct ImgbbClient {
    endpoint: String,
    key: Option<String>,
    http: Client,
}

impl ImgbbClient {
    /// Create a client for `endpoint`. Uploads fail with [`ImageHostError::MissingKey`] while
    /// no key is set.
    #[must_use]
    pub fn new(endpoint: &str, key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            key: key.filter(|key| !key.trim().is_empty()),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ImageHost for ImgbbClient {
    async fn upload(&self, file: &ImageFile) -> Result<String, ImageHostError> {
        let key = self.key.as_deref().ok_or(ImageHostError::MissingKey)?;

        debug!(file = %file.name, bytes = file.bytes.len(), "uploading image");

        let form = Form::new().part(
            IMAGE_FIELD,
            Part::bytes(file.bytes.clone()).file_name(file.name.clone()),
        );

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", key)])
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ImageHostError::Rejected(status.as_u16()));
        }

        confirmed_url(&body)
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,

    #[serde(default)]
    data: Option<UploadData>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    #[serde(default)]
    url: Option<String>,
}

/// Extract the hosted URL from an upload response; anything but a confirmed URL is a failure.
fn confirmed_url(body: &str) -> Result<String, ImageHostError> {
    let response: UploadResponse = serde_json::from_str(body)
        .map_err(|error| ImageHostError::Unconfirmed(error.to_string()))?;

    if !response.success {
        return Err(ImageHostError::Unconfirmed("success flag not set".to_string()));
    }

    response
        .data
        .and_then(|data| data.url)
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ImageHostError::Unconfirmed("response has no url".to_string()))
}
