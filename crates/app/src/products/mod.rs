//! Products

pub mod client;
pub mod errors;

pub use client::*;
pub use errors::ProductsApiError;
