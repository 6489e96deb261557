use std::sync::Arc;

use quote_keeper::{http, Config, InMemoryUserStore, QuoteService};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    let catalog = config.catalog()?;
    info!(
        quotes = catalog.len(),
        categories = catalog.categories().len(),
        "catalog loaded"
    );

    let service = Arc::new(QuoteService::new(catalog, InMemoryUserStore::new()));
    http::serve(service, &config.address()).await?;

    Ok(())
}
