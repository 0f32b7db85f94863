//! App Context

use std::{sync::Arc, time::Duration};

use catalog::presenter::MoneyFormatter;
use tokio::sync::broadcast;

use crate::{
    config::{AppConfig, ConfigError, validate_url},
    images::{ImageHost, ImgbbClient},
    products::{HttpProductsApi, ProductsApi},
    session::SessionEvent,
};

/// Buffered session events per subscriber.
const EVENT_CAPACITY: usize = 16;

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsApi>,
    pub images: Arc<dyn ImageHost>,
    pub events: broadcast::Sender<SessionEvent>,
    pub close_delay: Duration,
    pub formatter: MoneyFormatter,
}

impl AppContext {
    /// Assemble a context from its collaborators.
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductsApi>,
        images: Arc<dyn ImageHost>,
        close_delay: Duration,
        formatter: MoneyFormatter,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            products,
            images,
            events,
            close_delay,
            formatter,
        }
    }

    /// Build application context with HTTP clients for the configured endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error when an endpoint URL or the currency code is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        validate_url("CATALOG_API_URL", &config.api.api_url)?;
        validate_url("IMAGE_HOST_URL", &config.images.image_host_url)?;

        let formatter = config.session.formatter()?;

        Ok(Self::new(
            Arc::new(HttpProductsApi::new(
                &config.api.api_url,
                config.api.api_token.clone(),
            )),
            Arc::new(ImgbbClient::new(
                &config.images.image_host_url,
                config.images.image_host_key.clone(),
            )),
            config.session.close_delay(),
            formatter,
        ))
    }

    /// Receive events broadcast by sessions built from this context.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}
