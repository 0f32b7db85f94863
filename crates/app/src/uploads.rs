//! Upload coordinator
//!
//! Sends the files of one batch to the image host, strictly one after another.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::images::{ImageFile, ImageHost, ImageHostError};

/// The upload that stopped a batch.
#[derive(Debug, Error)]
#[error("failed to upload {file_name}")]
pub struct UploadError {
    /// Position of the failed file in the batch
    pub index: usize,

    /// Name of the failed file
    pub file_name: String,

    /// Host failure
    #[source]
    pub source: ImageHostError,
}

/// Uploads batches of images through an [`ImageHost`].
#[derive(Clone)]
pub struct UploadCoordinator {
    host: Arc<dyn ImageHost>,
}

impl UploadCoordinator {
    /// Coordinator backed by `host`.
    #[must_use]
    pub fn new(host: Arc<dyn ImageHost>) -> Self {
        Self { host }
    }

    /// Upload `files` in order and return their URLs in the same order.
    ///
    /// The first failure aborts the batch; later files are never sent.
    ///
    /// # Errors
    ///
    /// Returns an [`UploadError`] naming the file that failed.
    pub async fn upload_all(&self, files: &[ImageFile]) -> Result<Vec<String>, UploadError> {
        let mut urls = Vec::with_capacity(files.len());

        for (index, file) in files.iter().enumerate() {
            debug!(index, file = %file.name, "uploading batch file");

            match self.host.upload(file).await {
                Ok(url) => urls.push(url),
                Err(source) => {
                    warn!(index, file = %file.name, error = %source, "image upload failed");

                    return Err(UploadError {
                        index,
                        file_name: file.name.clone(),
                        source,
                    });
                }
            }
        }

        info!(count = urls.len(), "image batch uploaded");

        Ok(urls)
    }
}
