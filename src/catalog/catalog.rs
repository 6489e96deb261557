use std::collections::HashSet;
use std::path::Path;

use super::{builtin, Quote};
use crate::error::QuoteError;

/// Filter value that selects the whole catalog.
pub const ALL_CATEGORIES: &str = "all";

/// Immutable, ordered list of quotes. Loaded once, shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    quotes: Vec<Quote>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The twenty quotes shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_quotes(builtin::quotes())
    }

    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// Load a catalog from a JSON array of `{text, author, category}` objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, QuoteError> {
        let bytes = std::fs::read(path.as_ref())?;
        let quotes: Vec<Quote> = serde_json::from_slice(&bytes)?;
        Ok(Self::from_quotes(quotes))
    }

    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.quotes
            .iter()
            .map(|q| q.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.quotes.iter().any(|q| q.category == category)
    }

    /// Quotes whose category equals `category`, in catalog order.
    /// An unknown category yields an empty list, not an error.
    pub fn filter_by_category(&self, category: &str) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| q.category == category).collect()
    }

    /// Resolve an optional filter into a pool.
    ///
    /// `None`, `""` and `"all"` select everything.
    pub fn pool(&self, filter: Option<&str>) -> Vec<&Quote> {
        match filter {
            Some(category) if !category.is_empty() && category != ALL_CATEGORIES => {
                self.filter_by_category(category)
            }
            _ => self.quotes.iter().collect(),
        }
    }
}
