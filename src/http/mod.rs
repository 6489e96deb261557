//! JSON-over-HTTP transport for [`QuoteService`](crate::service::QuoteService).
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/quote?category=`: random quote, 404 when the pool is empty
//! - `GET /api/quotes?category=`: list quotes
//! - `POST /api/favorites`: `{userId, quote}`
//! - `GET /api/favorites/:userId`
//! - `DELETE /api/favorites/:userId/:quoteIndex`
//! - `POST /api/track-view`: `{userId}`
//! - `GET /api/stats/:userId`
//! - `GET /api/categories`
//! - `POST /api/users`: mint a session identifier
//! - `GET /api/health`
//!
//! Errors are `{ "error": message }` with the status from
//! [`QuoteError::status_code`](crate::QuoteError::status_code).
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use quote_keeper::{http, Catalog, InMemoryUserStore, QuoteService};
//!
//! let service = Arc::new(QuoteService::new(Catalog::builtin(), InMemoryUserStore::new()));
//! http::serve(service, "0.0.0.0:5000").await?;
//! ```

mod error;
mod handlers;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::service::QuoteService;
use crate::store::UserStore;

/// Build the axum `Router` for the quote API.
pub fn router<S: UserStore + 'static>(service: Arc<QuoteService<S>>) -> Router {
    Router::new()
        .route("/api/quote", get(handlers::random_quote::<S>))
        .route("/api/quotes", get(handlers::list_quotes::<S>))
        .route("/api/favorites", post(handlers::add_favorite::<S>))
        .route("/api/favorites/:user_id", get(handlers::favorites::<S>))
        .route(
            "/api/favorites/:user_id/:quote_index",
            delete(handlers::remove_favorite::<S>),
        )
        .route("/api/track-view", post(handlers::track_view::<S>))
        .route("/api/stats/:user_id", get(handlers::stats::<S>))
        .route("/api/categories", get(handlers::categories::<S>))
        .route("/api/users", post(handlers::create_user::<S>))
        .route("/api/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Serve the quote API at `addr` until Ctrl+C or SIGTERM.
pub async fn serve<S: UserStore + 'static>(
    service: Arc<QuoteService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = TcpListener::bind(addr).await?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
