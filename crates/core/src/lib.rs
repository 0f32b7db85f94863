//! Catalog
//!
//! Client-side product catalog authoring: the product draft store and its submission protocol,
//! optimistic image upload bookkeeping, and display derivations for persisted products.

pub mod coerce;
pub mod draft;
pub mod external_id;
pub mod lifecycle;
pub mod prelude;
pub mod presenter;
pub mod products;
pub mod sequences;
pub mod uploads;

mod wire;
