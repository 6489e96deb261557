use super::{UserState, UserStats};
use crate::catalog::Quote;
use crate::error::QuoteError;

/// Storage for per-user state.
///
/// Each method is one atomic transition of a single user's record, or a
/// pure read. Write paths create the record on first use; read paths
/// (`stats`, `favorites`, `contains`) never do.
pub trait UserStore: Send + Sync {
    /// Return the user's state, creating an empty record if absent.
    fn get_or_create(&self, id: &str) -> Result<UserState, QuoteError>;

    /// Mint a fresh identifier and store an empty record under it.
    fn create_session(&self) -> Result<(String, UserState), QuoteError>;

    /// View and favorites counts; zeros for an unknown user.
    fn stats(&self, id: &str) -> Result<UserStats, QuoteError>;

    /// The user's favorites in insertion order; empty for an unknown user.
    fn favorites(&self, id: &str) -> Result<Vec<Quote>, QuoteError>;

    /// Append `quote` unless a favorite with the same text exists.
    /// Returns the new favorites count.
    fn add_favorite(&self, id: &str, quote: Quote) -> Result<usize, QuoteError>;

    /// Remove the favorite at `index`. Returns the new favorites count.
    ///
    /// Indices are positional: any earlier removal shifts them.
    fn remove_favorite(&self, id: &str, index: usize) -> Result<usize, QuoteError>;

    /// Remove the favorite whose text equals `text`. Returns the new count.
    fn remove_favorite_by_text(&self, id: &str, text: &str) -> Result<usize, QuoteError>;

    /// Increment the view counter by one. Returns the new count.
    fn record_view(&self, id: &str) -> Result<u64, QuoteError>;

    fn contains(&self, id: &str) -> Result<bool, QuoteError>;

    fn len(&self) -> Result<usize, QuoteError>;

    fn is_empty(&self) -> Result<bool, QuoteError> {
        Ok(self.len()? == 0)
    }
}
