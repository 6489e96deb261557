use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::catalog::Quote;
use crate::error::QuoteError;

/// One user's favorites and view counter.
///
/// Serializes as `{favorites, viewCount}` (plus `createdAt` when set), which
/// is also the record the local session persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    #[serde(default, deserialize_with = "valid_items")]
    pub favorites: Vec<Quote>,
    #[serde(default, deserialize_with = "or_default")]
    pub view_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A null or mistyped field reads as its default.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keep the entries that parse; anything but an array reads as empty.
fn valid_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Read-only counters for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub view_count: u64,
    pub favorites_count: usize,
}

impl UserState {
    /// An empty record stamped with the current time.
    pub fn created_now() -> Self {
        Self {
            created_at: Some(Utc::now()),
            ..Self::default()
        }
    }

    pub fn stats(&self) -> UserStats {
        UserStats {
            view_count: self.view_count,
            favorites_count: self.favorites.len(),
        }
    }

    pub fn has_favorite(&self, quote: &Quote) -> bool {
        self.favorites.iter().any(|fav| fav.same_text(quote))
    }

    /// Append unless a favorite with the same text is present.
    pub fn add_favorite(&mut self, quote: Quote) -> Result<usize, QuoteError> {
        if self.has_favorite(&quote) {
            return Err(QuoteError::AlreadyExists);
        }
        self.favorites.push(quote);
        Ok(self.favorites.len())
    }

    /// Order-preserving removal by position; state is untouched on error.
    pub fn remove_favorite(&mut self, index: usize) -> Result<usize, QuoteError> {
        if index >= self.favorites.len() {
            return Err(QuoteError::InvalidArgument(index.to_string()));
        }
        self.favorites.remove(index);
        Ok(self.favorites.len())
    }

    pub fn remove_favorite_by_text(&mut self, text: &str) -> Result<usize, QuoteError> {
        let index = self
            .favorites
            .iter()
            .position(|fav| fav.text == text)
            .ok_or_else(|| QuoteError::NotFound("Quote not in favorites".to_string()))?;
        self.favorites.remove(index);
        Ok(self.favorites.len())
    }

    pub fn record_view(&mut self) -> u64 {
        self.view_count += 1;
        self.view_count
    }
}
