//! Catalog authoring application: backend and image host clients, upload coordination and
//! authoring sessions.

pub mod config;
pub mod context;
pub mod images;
pub mod observability;
pub mod products;
pub mod session;
pub mod uploads;

#[cfg(test)]
mod test;
