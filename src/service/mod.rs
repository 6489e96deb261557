//! QuoteService: the catalog plus a user store behind one set of operations.
//!
//! Every HTTP handler is a thin adapter over one method here, so the same
//! behavior is reachable without a server.

mod quote_service;

pub use quote_service::QuoteService;
