//! Session events

/// Cache key covering every product query.
pub const PRODUCTS_CACHE_KEY: &str = "/product";

/// Signals an authoring session broadcasts to the rest of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Cached data under `key` is stale.
    CacheInvalidated {
        /// Invalidated cache key
        key: &'static str,
    },

    /// The session is finished and its view can close.
    CloseRequested,
}
