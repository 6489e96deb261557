use tracing::debug;

use crate::catalog::{Catalog, Quote};
use crate::error::QuoteError;
use crate::selection::pick_random;
use crate::store::{UserStats, UserStore};

/// The catalog and the user store, shared by every request.
///
/// Generic over `S` so tests and alternative backends can swap the table.
pub struct QuoteService<S> {
    catalog: Catalog,
    store: S,
}

impl<S: UserStore> QuoteService<S> {
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// A uniformly random quote from the optionally filtered pool.
    ///
    /// Does not count as a view; callers track views separately.
    pub fn random_quote(&self, category: Option<&str>) -> Result<Quote, QuoteError> {
        let pool = self.catalog.pool(category);
        pick_random(&pool).cloned()
    }

    /// All quotes in the optionally filtered pool, in catalog order.
    pub fn list_quotes(&self, category: Option<&str>) -> Vec<Quote> {
        self.catalog.pool(category).into_iter().cloned().collect()
    }

    pub fn categories(&self) -> Vec<String> {
        self.catalog
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn add_favorite(
        &self,
        user_id: Option<&str>,
        quote: Option<Quote>,
    ) -> Result<usize, QuoteError> {
        let (user_id, quote) = match (present(user_id), quote) {
            (Some(user_id), Some(quote)) => (user_id, quote),
            _ => return Err(QuoteError::Validation("Missing userId or quote".to_string())),
        };
        self.store.add_favorite(user_id, quote)
    }

    pub fn favorites(&self, user_id: &str) -> Result<Vec<Quote>, QuoteError> {
        self.store.favorites(user_id)
    }

    /// Remove a favorite by the raw positional index from the request path.
    ///
    /// Only plain decimal digits are an index. An unknown user is reported
    /// before a malformed index.
    pub fn remove_favorite(&self, user_id: &str, raw_index: &str) -> Result<usize, QuoteError> {
        match parse_index(raw_index) {
            Some(index) => self.store.remove_favorite(user_id, index),
            None => {
                if !self.store.contains(user_id)? {
                    return Err(QuoteError::NotFound("User not found".to_string()));
                }
                debug!(user_id, raw_index, "rejected favorite index");
                Err(QuoteError::InvalidArgument(raw_index.to_string()))
            }
        }
    }

    pub fn remove_favorite_by_text(&self, user_id: &str, text: &str) -> Result<usize, QuoteError> {
        self.store.remove_favorite_by_text(user_id, text)
    }

    pub fn track_view(&self, user_id: Option<&str>) -> Result<u64, QuoteError> {
        let user_id =
            present(user_id).ok_or_else(|| QuoteError::Validation("Missing userId".to_string()))?;
        self.store.record_view(user_id)
    }

    pub fn stats(&self, user_id: &str) -> Result<UserStats, QuoteError> {
        self.store.stats(user_id)
    }

    /// Mint a new session and return its identifier.
    pub fn create_user(&self) -> Result<String, QuoteError> {
        let (user_id, _) = self.store.create_session()?;
        Ok(user_id)
    }
}

/// `str::parse` also takes a leading `+`.
fn parse_index(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Treat blank identifiers as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
