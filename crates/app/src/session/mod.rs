//! Authoring session
//!
//! Drives one product draft through hydration, editing, image uploads and submission, and
//! announces the outcome to the rest of the application.

use std::{sync::Arc, time::Duration};

use catalog::{
    draft::{DraftError, DraftStore},
    lifecycle::{AuthoringState, Lifecycle, LifecycleAction, LifecycleError},
    products::ProductId,
    uploads::{PreviewSequence, UploadBatch},
};
use tokio::sync::broadcast;
use tracing::{debug, error, info};

use crate::{
    context::AppContext,
    images::ImageFile,
    products::ProductsApi,
    uploads::{UploadCoordinator, UploadError},
};

pub mod errors;
pub mod events;

pub use errors::SessionError;
pub use events::{PRODUCTS_CACHE_KEY, SessionEvent};

/// Shown when a product cannot be loaded and the backend gives no message.
pub const HYDRATION_FAILED: &str = "failed to load product";

/// Shown when a create is rejected without a backend message.
pub const CREATE_FAILED: &str = "failed to create product";

/// Shown when an update is rejected without a backend message.
pub const UPDATE_FAILED: &str = "failed to update product";

/// What a session submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    /// Author a new product.
    Create,

    /// Edit the persisted product with this identity.
    Edit(ProductId),
}

impl SessionMode {
    /// Identity of the edited product.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }

    fn submission_fallback(&self) -> &'static str {
        match self {
            Self::Create => CREATE_FAILED,
            Self::Edit(_) => UPDATE_FAILED,
        }
    }
}

/// One product being created or edited.
///
/// Keeps only the most recent error message; any successful operation clears it.
pub struct AuthoringSession {
    mode: SessionMode,
    lifecycle: Lifecycle,
    store: DraftStore,
    previews: PreviewSequence,
    batch: Option<UploadBatch>,
    error: Option<String>,
    products: Arc<dyn ProductsApi>,
    uploader: UploadCoordinator,
    events: broadcast::Sender<SessionEvent>,
    close_delay: Duration,
}

impl AuthoringSession {
    /// Session for a new product, ready for edits.
    ///
    /// # Errors
    ///
    /// Returns a lifecycle error if the session cannot be opened.
    pub fn for_create(ctx: &AppContext) -> Result<Self, SessionError> {
        let mut session = Self::with_mode(ctx, SessionMode::Create);
        session.lifecycle.open()?;

        Ok(session)
    }

    /// Session for an existing product. Nothing is editable until [`Self::hydrate`] succeeds.
    #[must_use]
    pub fn for_edit(ctx: &AppContext, id: ProductId) -> Self {
        Self::with_mode(ctx, SessionMode::Edit(id))
    }

    fn with_mode(ctx: &AppContext, mode: SessionMode) -> Self {
        Self {
            mode,
            lifecycle: Lifecycle::new(),
            store: DraftStore::new(),
            previews: PreviewSequence::new(),
            batch: None,
            error: None,
            products: Arc::clone(&ctx.products),
            uploader: UploadCoordinator::new(Arc::clone(&ctx.images)),
            events: ctx.events.clone(),
            close_delay: ctx.close_delay,
        }
    }

    /// Load the edited product into the draft.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Hydration`] when the product cannot be fetched, after which the
    /// session stays in `HydrationFailed`; or a lifecycle error outside an unstarted edit session.
    pub async fn hydrate(&mut self) -> Result<(), SessionError> {
        let Some(id) = self.mode.product_id().cloned() else {
            return Err(self.fail(
                LifecycleError::InvalidTransition {
                    state: self.state(),
                    action: LifecycleAction::BeginHydration,
                }
                .into(),
            ));
        };

        self.lifecycle.begin_hydration()?;

        debug!(product = %id, "hydrating draft");

        match self.products.get_product(&id).await {
            Ok(record) => {
                self.store = DraftStore::hydrated(&record);
                self.previews = PreviewSequence::from_photos(&self.store.draft().photos);
                self.lifecycle.finish_hydration(true)?;
                self.error = None;

                Ok(())
            }
            Err(source) => {
                self.lifecycle.finish_hydration(false)?;

                error!(product = %id, error = %source, "failed to load product");

                let message = source
                    .backend_message()
                    .unwrap_or(HYDRATION_FAILED)
                    .to_string();

                Err(self.fail(SessionError::Hydration { message, source }))
            }
        }
    }

    /// Apply a change to the draft.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotEditable`] unless the session is ready, or the draft error
    /// raised by `change`.
    pub fn edit<T, F>(&mut self, change: F) -> Result<T, SessionError>
    where
        F: FnOnce(&mut DraftStore) -> Result<T, DraftError>,
    {
        self.ensure_editable()?;

        match change(&mut self.store) {
            Ok(value) => {
                self.error = None;

                Ok(value)
            }
            Err(error) => Err(self.fail(error.into())),
        }
    }

    /// Show placeholders for the selected files and mark the batch as uploading.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UploadInFlight`] while an earlier batch is unsettled, or
    /// [`SessionError::NotEditable`] unless the session is ready.
    pub fn begin_upload<I, S>(&mut self, file_names: I) -> Result<(), SessionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ensure_editable()?;

        if self.batch.is_some() {
            return Err(self.fail(SessionError::UploadInFlight));
        }

        let mut batch = self.previews.stage(file_names);
        batch.start()?;

        debug!(files = batch.len(), "image batch staged");

        self.batch = Some(batch);
        self.error = None;

        Ok(())
    }

    /// Settle the in-flight batch: confirmed URLs replace its placeholders and join the photos;
    /// any failure discards all of its placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Upload`] for a failed upload, [`SessionError::UploadBatch`] when
    /// the URLs do not match the batch, or [`SessionError::NoUploadInFlight`].
    pub fn finish_upload(
        &mut self,
        outcome: Result<Vec<String>, UploadError>,
    ) -> Result<(), SessionError> {
        let Some(mut batch) = self.batch.take() else {
            return Err(self.fail(SessionError::NoUploadInFlight));
        };

        let settled = match outcome {
            Ok(urls) => match batch.reconcile(&mut self.previews, &mut self.store, urls) {
                Ok(()) => Ok(()),
                Err(error) => {
                    batch.roll_back(&mut self.previews)?;

                    Err(SessionError::UploadBatch(error))
                }
            },
            Err(error) => {
                batch.roll_back(&mut self.previews)?;

                Err(SessionError::Upload(error))
            }
        };

        match settled {
            Ok(()) => {
                self.error = None;

                Ok(())
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    /// Upload `files` as one batch and fold the outcome into the draft.
    ///
    /// # Errors
    ///
    /// See [`Self::begin_upload`] and [`Self::finish_upload`].
    pub async fn upload_images(&mut self, files: &[ImageFile]) -> Result<(), SessionError> {
        if files.is_empty() {
            return Ok(());
        }

        self.begin_upload(files.iter().map(|file| file.name.clone()))?;

        let outcome = self.uploader.upload_all(files).await;

        self.finish_upload(outcome)
    }

    /// Remove a confirmed image from the previews and the photos alike.
    ///
    /// Placeholders of an in-flight batch and out-of-range indices are ignored, as is every index
    /// unless the session is ready.
    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        if !self.state().is_editable() {
            return None;
        }

        self.previews.remove(index)?;
        self.error = None;

        self.store.remove_photo(index)
    }

    /// Validate and send the draft to the backend.
    ///
    /// On success a cache invalidation is broadcast at once and a close request after the close
    /// delay.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UploadPending`] while images are uploading, the first failing
    /// [`DraftError`] without any network call, or [`SessionError::Submission`] carrying the
    /// backend's message (or a create/update fallback) when the backend refuses.
    pub async fn submit(&mut self) -> Result<(), SessionError> {
        self.ensure_editable()?;

        if self.upload_pending() {
            return Err(self.fail(SessionError::UploadPending));
        }

        if let Err(error) = self.store.validate_for_submit() {
            debug!(%error, "draft is not submittable");

            return Err(self.fail(error.into()));
        }

        self.lifecycle.begin_submission()?;
        self.error = None;

        let payload = self.store.build_submission_payload();

        let result = match &self.mode {
            SessionMode::Create => self.products.create_product(&payload).await,
            SessionMode::Edit(id) => self.products.update_product(id, &payload).await,
        };

        match result {
            Ok(()) => {
                self.lifecycle.finish_submission(true)?;

                info!(external_id = %payload.external_id, "product submitted");

                self.emit(SessionEvent::CacheInvalidated {
                    key: PRODUCTS_CACHE_KEY,
                });
                self.schedule_close();

                Ok(())
            }
            Err(source) => {
                self.lifecycle.finish_submission(false)?;

                let message = source
                    .backend_message()
                    .unwrap_or(self.mode.submission_fallback())
                    .to_string();

                error!(
                    external_id = %payload.external_id,
                    error = %source,
                    "product submission failed"
                );

                Err(self.fail(SessionError::Submission { message, source }))
            }
        }
    }

    /// Give up authoring. A create-mode draft is discarded; an edit-mode draft is left as is.
    ///
    /// Returns `false`, changing nothing, while the session cannot close.
    pub fn abandon(&mut self) -> bool {
        if !self.can_close() {
            return false;
        }

        if self.mode == SessionMode::Create {
            self.store.reset();
            self.previews.clear();
            self.error = None;
        }

        true
    }

    /// What the session submits.
    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    /// Lifecycle state.
    pub fn state(&self) -> AuthoringState {
        self.lifecycle.state()
    }

    /// Draft and builders.
    pub fn store(&self) -> &DraftStore {
        &self.store
    }

    /// Image previews, confirmed first.
    pub fn previews(&self) -> &PreviewSequence {
        &self.previews
    }

    /// Most recent error message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether hydration or submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    /// Whether an image batch is unsettled.
    pub fn upload_pending(&self) -> bool {
        self.batch.is_some()
    }

    /// Whether the session may be closed now.
    pub fn can_close(&self) -> bool {
        !self.is_loading() && !self.upload_pending()
    }

    /// Receive events broadcast by this session.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn ensure_editable(&mut self) -> Result<(), SessionError> {
        let state = self.state();

        if state.is_editable() {
            return Ok(());
        }

        Err(self.fail(SessionError::NotEditable(state)))
    }

    fn fail(&mut self, error: SessionError) -> SessionError {
        self.error = Some(error.to_string());

        error
    }

    fn emit(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            debug!(?event, "no session event subscribers");
        }
    }

    fn schedule_close(&self) {
        let events = self.events.clone();
        let delay = self.close_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if events.send(SessionEvent::CloseRequested).is_err() {
                debug!("no session event subscribers");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use catalog::{draft::TextField, external_id, uploads::Preview};
    use testresult::TestResult;
    use tokio::{sync::broadcast::error::TryRecvError, time::Instant};

    use crate::{
        images::{ImageHostError, MockImageHost},
        products::{MockProductsApi, ProductsApiError},
        test::{context, image, product, submittable},
    };

    use super::*;

    #[tokio::test]
    async fn validation_failure_stays_ready_without_network() -> TestResult {
        let mut products = MockProductsApi::new();
        products.expect_create_product().never();

        let ctx = context(products, MockImageHost::new());
        let mut session = AuthoringSession::for_create(&ctx)?;

        let result = session.submit().await;

        assert!(
            matches!(result, Err(SessionError::Draft(DraftError::TitleRequired))),
            "expected title required, got {result:?}"
        );
        assert_eq!(session.state(), AuthoringState::Ready);
        assert_eq!(session.error(), Some("product title is required"));

        session.edit(|store| store.set_field(TextField::Title, "Halva"))?;

        assert_eq!(session.error(), None);

        Ok(())
    }

    #[tokio::test]
    async fn submit_refused_while_upload_pending() -> TestResult {
        let mut products = MockProductsApi::new();
        products.expect_create_product().never();

        let ctx = context(products, MockImageHost::new());
        let mut session = AuthoringSession::for_create(&ctx)?;
        session.edit(submittable)?;

        session.begin_upload(["a.png"])?;

        assert!(session.upload_pending());
        assert!(!session.can_close());
        assert!(!session.abandon());

        let result = session.submit().await;

        assert!(
            matches!(result, Err(SessionError::UploadPending)),
            "expected upload pending, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn successful_create_invalidates_cache_then_closes() -> TestResult {
        let mut products = MockProductsApi::new();

        products
            .expect_create_product()
            .once()
            .withf(|payload| {
                payload.title == "Halva" && external_id::is_generated(&payload.external_id)
            })
            .return_once(|_| Ok(()));

        products.expect_update_product().never();

        let ctx = context(products, MockImageHost::new());
        let mut events = ctx.subscribe();
        let mut session = AuthoringSession::for_create(&ctx)?;
        session.edit(submittable)?;

        let submitted_at = Instant::now();
        session.submit().await?;

        assert_eq!(session.state(), AuthoringState::Submitted);
        assert_eq!(
            events.recv().await?,
            SessionEvent::CacheInvalidated { key: "/product" }
        );
        assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

        assert_eq!(events.recv().await?, SessionEvent::CloseRequested);
        assert!(submitted_at.elapsed() >= Duration::from_millis(1_500));

        Ok(())
    }

    #[tokio::test]
    async fn rejected_create_surfaces_backend_message_and_keeps_code() -> TestResult {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&seen);

        let mut products = MockProductsApi::new();

        products
            .expect_create_product()
            .times(2)
            .returning(move |payload| {
                if let Ok(mut codes) = recorded.lock() {
                    codes.push(payload.external_id.clone());
                }

                Err(ProductsApiError::Rejected {
                    status: 409,
                    message: Some("Product ID already exists".to_string()),
                })
            });

        let ctx = context(products, MockImageHost::new());
        let mut events = ctx.subscribe();
        let mut session = AuthoringSession::for_create(&ctx)?;
        session.edit(submittable)?;

        for _ in 0..2 {
            let result = session.submit().await;

            assert!(
                matches!(
                    result,
                    Err(SessionError::Submission { ref message, .. })
                        if message == "Product ID already exists"
                ),
                "expected submission failure, got {result:?}"
            );
        }

        assert_eq!(session.state(), AuthoringState::Ready);
        assert_eq!(session.error(), Some("Product ID already exists"));
        assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

        let codes = seen.lock().map(|codes| codes.clone()).unwrap_or_default();

        assert_eq!(codes.len(), 2);
        assert_eq!(codes.first(), codes.get(1));

        Ok(())
    }

    #[tokio::test]
    async fn rejected_update_without_message_uses_fallback() -> TestResult {
        let mut products = MockProductsApi::new();

        products
            .expect_get_product()
            .once()
            .withf(|id| id.as_str() == "665f1c")
            .return_once(|id| Ok(product(id.as_str())));

        products
            .expect_update_product()
            .once()
            .withf(|id, payload| {
                id.as_str() == "665f1c" && payload.external_id == "PRD-LX2A1B-ABCDEFGH"
            })
            .return_once(|_, _| {
                Err(ProductsApiError::Rejected {
                    status: 500,
                    message: None,
                })
            });

        products.expect_create_product().never();

        let ctx = context(products, MockImageHost::new());
        let mut session = AuthoringSession::for_edit(&ctx, ProductId::new("665f1c"));
        session.hydrate().await?;

        let result = session.submit().await;

        assert!(
            matches!(
                result,
                Err(SessionError::Submission { ref message, .. }) if message == UPDATE_FAILED
            ),
            "expected update fallback, got {result:?}"
        );
        assert_eq!(session.error(), Some("failed to update product"));

        Ok(())
    }

    #[tokio::test]
    async fn hydration_failure_is_terminal() -> TestResult {
        let mut products = MockProductsApi::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsApiError::UnexpectedResponse("empty body".to_string())));

        products.expect_update_product().never();

        let ctx = context(products, MockImageHost::new());
        let mut session = AuthoringSession::for_edit(&ctx, ProductId::new("gone"));

        let result = session.hydrate().await;

        assert!(
            matches!(result, Err(SessionError::Hydration { .. })),
            "expected hydration failure, got {result:?}"
        );
        assert_eq!(session.state(), AuthoringState::HydrationFailed);
        assert_eq!(session.error(), Some("failed to load product"));

        let edit = session.edit(|store| store.set_field(TextField::Title, "x"));
        let submit = session.submit().await;

        assert!(
            matches!(edit, Err(SessionError::NotEditable(AuthoringState::HydrationFailed))),
            "expected not editable, got {edit:?}"
        );
        assert!(
            matches!(submit, Err(SessionError::NotEditable(AuthoringState::HydrationFailed))),
            "expected not editable, got {submit:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn hydration_failure_surfaces_backend_message() -> TestResult {
        let mut products = MockProductsApi::new();

        products.expect_get_product().once().return_once(|_| {
            Err(ProductsApiError::Rejected {
                status: 404,
                message: Some("Product not found".to_string()),
            })
        });

        let ctx = context(products, MockImageHost::new());
        let mut session = AuthoringSession::for_edit(&ctx, ProductId::new("gone"));

        let result = session.hydrate().await;

        assert!(
            matches!(
                result,
                Err(SessionError::Hydration { ref message, .. }) if message == "Product not found"
            ),
            "expected backend message, got {result:?}"
        );
        assert_eq!(session.error(), Some("Product not found"));
        assert_eq!(session.state(), AuthoringState::HydrationFailed);

        Ok(())
    }

    #[tokio::test]
    async fn hydration_locks_existing_code() -> TestResult {
        let mut products = MockProductsApi::new();

        products
            .expect_get_product()
            .once()
            .return_once(|id| Ok(product(id.as_str())));

        let ctx = context(products, MockImageHost::new());
        let mut session = AuthoringSession::for_edit(&ctx, ProductId::new("665f1c"));
        session.hydrate().await?;

        let result = session.edit(|store| store.set_field(TextField::ExternalId, "PRD-NEW"));

        assert!(
            matches!(result, Err(SessionError::Draft(DraftError::ExternalIdLocked))),
            "expected locked code, got {result:?}"
        );
        assert_eq!(session.previews().len(), 1);
        assert!(session.hydrate().await.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn failed_upload_rolls_back_the_batch() -> TestResult {
        let mut products = MockProductsApi::new();

        products
            .expect_get_product()
            .once()
            .return_once(|id| Ok(product(id.as_str())));

        let mut images = MockImageHost::new();

        images
            .expect_upload()
            .once()
            .withf(|file| file.name == "a.png")
            .return_once(|_| Ok("https://img.example/a.png".to_string()));

        images
            .expect_upload()
            .once()
            .withf(|file| file.name == "b.png")
            .return_once(|_| Err(ImageHostError::Rejected(413)));

        let ctx = context(products, images);
        let mut session = AuthoringSession::for_edit(&ctx, ProductId::new("665f1c"));
        session.hydrate().await?;

        let previews_before = session.previews().clone();
        let photos_before = session.store().draft().photos.clone();

        let result = session
            .upload_images(&[image("a.png"), image("b.png"), image("c.png")])
            .await;

        assert!(
            matches!(result, Err(SessionError::Upload(_))),
            "expected upload failure, got {result:?}"
        );
        assert_eq!(session.previews(), &previews_before);
        assert_eq!(session.store().draft().photos, photos_before);
        assert_eq!(session.error(), Some("failed to upload images"));
        assert!(!session.upload_pending());

        Ok(())
    }

    #[tokio::test]
    async fn successful_upload_appends_photos() -> TestResult {
        let mut images = MockImageHost::new();

        images
            .expect_upload()
            .times(2)
            .returning(|file| Ok(format!("https://img.example/{}", file.name)));

        let ctx = context(MockProductsApi::new(), images);
        let mut session = AuthoringSession::for_create(&ctx)?;

        session
            .upload_images(&[image("a.png"), image("b.png")])
            .await?;

        assert_eq!(
            session.store().draft().photos,
            vec!["https://img.example/a.png", "https://img.example/b.png"]
        );
        assert_eq!(
            session
                .previews()
                .entries()
                .iter()
                .filter_map(Preview::url)
                .collect::<Vec<_>>(),
            vec!["https://img.example/a.png", "https://img.example/b.png"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn second_batch_waits_for_the_first() -> TestResult {
        let ctx = context(MockProductsApi::new(), MockImageHost::new());
        let mut session = AuthoringSession::for_create(&ctx)?;

        session.begin_upload(["a.png"])?;

        let result = session.begin_upload(["b.png"]);

        assert!(
            matches!(result, Err(SessionError::UploadInFlight)),
            "expected upload in flight, got {result:?}"
        );

        session.finish_upload(Ok(vec!["https://img.example/a.png".to_string()]))?;
        session.begin_upload(["b.png"])?;

        Ok(())
    }

    #[tokio::test]
    async fn starting_an_upload_clears_the_last_error() -> TestResult {
        let mut products = MockProductsApi::new();
        products.expect_create_product().never();

        let ctx = context(products, MockImageHost::new());
        let mut session = AuthoringSession::for_create(&ctx)?;

        assert!(session.submit().await.is_err());
        assert_eq!(session.error(), Some("product title is required"));

        session.begin_upload(["a.png"])?;

        assert_eq!(session.error(), None);
        assert!(session.upload_pending());

        Ok(())
    }

    #[tokio::test]
    async fn remove_image_ignored_after_submission() -> TestResult {
        let mut products = MockProductsApi::new();
        products.expect_create_product().once().return_once(|_| Ok(()));

        let ctx = context(products, MockImageHost::new());
        let mut session = AuthoringSession::for_create(&ctx)?;
        session.edit(submittable)?;
        session.submit().await?;

        assert_eq!(session.state(), AuthoringState::Submitted);
        assert_eq!(session.remove_image(0), None);
        assert_eq!(
            session.store().draft().photos,
            vec!["https://img.example/halva.png"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_image_skips_placeholders() -> TestResult {
        let ctx = context(MockProductsApi::new(), MockImageHost::new());
        let mut session = AuthoringSession::for_create(&ctx)?;

        session.begin_upload(["a.png", "b.png"])?;
        session.finish_upload(Ok(vec![
            "https://img.example/a.png".to_string(),
            "https://img.example/b.png".to_string(),
        ]))?;
        session.begin_upload(["c.png"])?;

        assert_eq!(session.remove_image(2), None);
        assert_eq!(
            session.remove_image(0),
            Some("https://img.example/a.png".to_string())
        );
        assert_eq!(session.store().draft().photos, vec!["https://img.example/b.png"]);
        assert_eq!(session.previews().len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn abandon_resets_only_new_drafts() -> TestResult {
        let mut products = MockProductsApi::new();

        products
            .expect_get_product()
            .once()
            .return_once(|id| Ok(product(id.as_str())));

        let ctx = context(products, MockImageHost::new());

        let mut create = AuthoringSession::for_create(&ctx)?;
        create.edit(submittable)?;

        assert!(create.abandon());
        assert_eq!(create.store(), &DraftStore::new());

        let mut edit = AuthoringSession::for_edit(&ctx, ProductId::new("665f1c"));
        edit.hydrate().await?;

        assert!(edit.abandon());
        assert_eq!(edit.store().draft().title, "Chocolate");

        Ok(())
    }
}
