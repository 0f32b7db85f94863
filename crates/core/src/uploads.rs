//! Optimistic image uploads
//!
//! Selected files show up immediately as local previews. Each selection is one [`UploadBatch`]
//! that moves `Previewing → Uploading → {Reconciled | RolledBack}`: either all of its previews
//! are swapped for confirmed URLs, or all of them are discarded.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::draft::DraftStore;

/// Identifies the batch a local preview belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchId(u64);

/// One entry of the preview sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Placeholder for a file that is still being uploaded.
    Local {
        /// Owning batch
        batch: BatchId,

        /// Name of the selected file
        file_name: String,
    },

    /// Confirmed remote URL.
    Remote(String),
}

impl Preview {
    /// Remote URL, when confirmed.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Remote(url) => Some(url),
            Self::Local { .. } => None,
        }
    }

    /// Whether this is a placeholder awaiting upload.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }

    fn belongs_to(&self, id: BatchId) -> bool {
        matches!(self, Self::Local { batch, .. } if *batch == id)
    }
}

/// Ordered previews shown for a draft: confirmed photos followed by pending placeholders.
///
/// Two sequences are equal when they show the same entries; the batch counter is ignored.
#[derive(Debug, Clone, Default)]
pub struct PreviewSequence {
    entries: Vec<Preview>,
    next_batch: u64,
}

impl PreviewSequence {
    /// Empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence showing already-confirmed photos.
    pub fn from_photos(photos: &[String]) -> Self {
        Self {
            entries: photos.iter().cloned().map(Preview::Remote).collect(),
            next_batch: 0,
        }
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[Preview] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of placeholders still awaiting upload.
    pub fn pending(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_local()).count()
    }

    /// Append one placeholder per file and open a batch for them.
    pub fn stage<I, S>(&mut self, file_names: I) -> UploadBatch
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = BatchId(self.next_batch);
        self.next_batch = self.next_batch.wrapping_add(1);

        let before = self.entries.len();

        self.entries
            .extend(file_names.into_iter().map(|name| Preview::Local {
                batch: id,
                file_name: name.into(),
            }));

        UploadBatch {
            id,
            len: self.entries.len() - before,
            state: BatchState::Previewing,
        }
    }

    /// Remove a confirmed entry.
    ///
    /// Placeholders and out-of-range indices are left alone.
    pub fn remove(&mut self, index: usize) -> Option<Preview> {
        match self.entries.get(index) {
            Some(Preview::Remote(_)) => Some(self.entries.remove(index)),
            Some(Preview::Local { .. }) | None => None,
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl PartialEq for PreviewSequence {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for PreviewSequence {}

/// Progress of one upload batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    /// Placeholders shown, nothing sent yet.
    Previewing,

    /// Files are being sent.
    Uploading,

    /// Every file was confirmed.
    Reconciled,

    /// The batch was discarded.
    RolledBack,
}

impl Display for BatchState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Previewing => "previewing",
            Self::Uploading => "uploading",
            Self::Reconciled => "reconciled",
            Self::RolledBack => "rolled back",
        };

        f.write_str(name)
    }
}

/// Errors from driving an upload batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadBatchError {
    /// The batch is not in a state that allows the step.
    #[error("upload batch is {0}")]
    InvalidState(BatchState),

    /// A different number of URLs came back than files were staged.
    #[error("expected {expected} uploaded urls, got {actual}")]
    UrlCountMismatch {
        /// Staged files
        expected: usize,

        /// URLs received
        actual: usize,
    },
}

/// A set of files selected together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadBatch {
    id: BatchId,
    len: usize,
    state: BatchState,
}

impl UploadBatch {
    /// Batch identity.
    pub fn id(&self) -> BatchId {
        self.id
    }

    /// Number of files in the batch.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the batch has no files.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current state.
    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Whether the batch reached `Reconciled` or `RolledBack`.
    pub fn is_settled(&self) -> bool {
        matches!(self.state, BatchState::Reconciled | BatchState::RolledBack)
    }

    /// `Previewing → Uploading`.
    ///
    /// # Errors
    ///
    /// Returns [`UploadBatchError::InvalidState`] unless the batch is previewing.
    pub fn start(&mut self) -> Result<(), UploadBatchError> {
        if self.state != BatchState::Previewing {
            return Err(UploadBatchError::InvalidState(self.state));
        }

        self.state = BatchState::Uploading;

        Ok(())
    }

    /// `Uploading → Reconciled`: swap this batch's placeholders for `urls` in order and append
    /// the same URLs to the draft's photos.
    ///
    /// # Errors
    ///
    /// Returns [`UploadBatchError::InvalidState`] unless uploading, or
    /// [`UploadBatchError::UrlCountMismatch`] when `urls` does not cover every placeholder. Nothing
    /// is changed on error.
    pub fn reconcile(
        &mut self,
        previews: &mut PreviewSequence,
        store: &mut DraftStore,
        urls: Vec<String>,
    ) -> Result<(), UploadBatchError> {
        if self.state != BatchState::Uploading {
            return Err(UploadBatchError::InvalidState(self.state));
        }

        let slots = previews
            .entries
            .iter()
            .filter(|entry| entry.belongs_to(self.id))
            .count();

        if slots != urls.len() || slots != self.len {
            return Err(UploadBatchError::UrlCountMismatch {
                expected: self.len,
                actual: urls.len(),
            });
        }

        let mut confirmed = urls.iter();

        for entry in &mut previews.entries {
            if entry.belongs_to(self.id)
                && let Some(url) = confirmed.next()
            {
                *entry = Preview::Remote(url.clone());
            }
        }

        store.append_photos(urls);
        self.state = BatchState::Reconciled;

        Ok(())
    }

    /// `Previewing | Uploading → RolledBack`: discard every placeholder of this batch.
    ///
    /// # Errors
    ///
    /// Returns [`UploadBatchError::InvalidState`] when the batch already settled.
    pub fn roll_back(&mut self, previews: &mut PreviewSequence) -> Result<(), UploadBatchError> {
        if self.is_settled() {
            return Err(UploadBatchError::InvalidState(self.state));
        }

        previews.entries.retain(|entry| !entry.belongs_to(self.id));
        self.state = BatchState::RolledBack;

        Ok(())
    }
}
