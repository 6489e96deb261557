//! quote_keeper: random inspirational quotes with per-user favorites.
//!
//! Two shapes share the same data and operations:
//!
//! - [`QuoteService`] over a [`UserStore`], exposed as JSON over HTTP by
//!   [`http`] (requires the `http` feature).
//! - [`local::LocalSession`], a single user's session mirrored to a
//!   key/value storage.

pub mod catalog;
pub mod config;
mod error;
pub mod local;
pub mod selection;
mod service;
pub mod store;

#[cfg(feature = "http")]
pub mod http;

pub use catalog::{Catalog, Quote};
pub use config::{Config, ConfigError};
pub use error::QuoteError;
pub use service::QuoteService;
pub use store::{InMemoryUserStore, UserState, UserStats, UserStore};
