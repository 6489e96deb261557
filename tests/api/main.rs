//! HTTP API integration tests.
//!
//! Each test starts its own axum server on an ephemeral port and exercises
//! it with reqwest.

mod quotes;
mod users;
