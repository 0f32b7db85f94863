//! Image hosting

use std::{io, path::Path};

use async_trait::async_trait;
use mockall::automock;

pub mod errors;
pub mod imgbb;

pub use errors::ImageHostError;
pub use imgbb::ImgbbClient;

/// A local image selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// File name shown while the upload is pending
    pub name: String,

    /// File contents
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Wrap in-memory contents.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read an image from disk.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read.
    pub async fn read(path: &Path) -> Result<Self, io::Error> {
        let bytes = tokio::fs::read(path).await?;

        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

        Ok(Self { name, bytes })
    }
}

#[automock]
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload one image and return its public URL.
    async fn upload(&self, file: &ImageFile) -> Result<String, ImageHostError>;
}
