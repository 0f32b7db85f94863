//! Authoring session errors.

use catalog::{
    draft::DraftError,
    lifecycle::{AuthoringState, LifecycleError},
    uploads::UploadBatchError,
};
use thiserror::Error;

use crate::{products::ProductsApiError, uploads::UploadError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{message}")]
    Hydration {
        message: String,

        #[source]
        source: ProductsApiError,
    },

    #[error("product cannot be edited while {0}")]
    NotEditable(AuthoringState),

    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("an image upload is already in progress")]
    UploadInFlight,

    #[error("no image upload is in progress")]
    NoUploadInFlight,

    #[error("image uploads are still in progress")]
    UploadPending,

    #[error("failed to upload images")]
    Upload(#[source] UploadError),

    #[error("failed to upload images")]
    UploadBatch(#[from] UploadBatchError),

    #[error("{message}")]
    Submission {
        message: String,

        #[source]
        source: ProductsApiError,
    },
}
