use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use super::{new_user_id, UserState, UserStats, UserStore};
use crate::catalog::Quote;
use crate::error::QuoteError;

const USER_NOT_FOUND: &str = "User not found";

/// Process-wide user table backed by a `HashMap` behind a `RwLock`.
///
/// Clone-friendly via `Arc`; clones share the same table. Entries are never
/// evicted.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<String, UserState>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, UserState>>, QuoteError> {
        self.users.read().map_err(|_| QuoteError::Storage("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, UserState>>, QuoteError> {
        self.users.write().map_err(|_| QuoteError::Storage("write"))
    }

    /// Run `f` against the user's record, creating it first if needed.
    fn upsert_with<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut UserState) -> Result<T, QuoteError>,
    ) -> Result<T, QuoteError> {
        let mut users = self.write()?;
        let state = users
            .entry(id.to_string())
            .or_insert_with(UserState::created_now);
        f(state)
    }

    /// Run `f` against an existing record; unknown users are `NotFound`.
    fn update_with<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut UserState) -> Result<T, QuoteError>,
    ) -> Result<T, QuoteError> {
        let mut users = self.write()?;
        let state = users
            .get_mut(id)
            .ok_or_else(|| QuoteError::NotFound(USER_NOT_FOUND.to_string()))?;
        f(state)
    }
}

impl UserStore for InMemoryUserStore {
    fn get_or_create(&self, id: &str) -> Result<UserState, QuoteError> {
        self.upsert_with(id, |state| Ok(state.clone()))
    }

    fn create_session(&self) -> Result<(String, UserState), QuoteError> {
        let mut users = self.write()?;
        loop {
            let id = new_user_id();
            if let Entry::Vacant(slot) = users.entry(id.clone()) {
                let state = slot.insert(UserState::created_now()).clone();
                info!(user_id = %id, "user session created");
                return Ok((id, state));
            }
        }
    }

    fn stats(&self, id: &str) -> Result<UserStats, QuoteError> {
        let users = self.read()?;
        Ok(users.get(id).map(UserState::stats).unwrap_or_default())
    }

    fn favorites(&self, id: &str) -> Result<Vec<Quote>, QuoteError> {
        let users = self.read()?;
        Ok(users
            .get(id)
            .map(|state| state.favorites.clone())
            .unwrap_or_default())
    }

    fn add_favorite(&self, id: &str, quote: Quote) -> Result<usize, QuoteError> {
        let count = self.upsert_with(id, |state| state.add_favorite(quote))?;
        debug!(user_id = %id, favorites = count, "favorite added");
        Ok(count)
    }

    fn remove_favorite(&self, id: &str, index: usize) -> Result<usize, QuoteError> {
        let count = self.update_with(id, |state| state.remove_favorite(index))?;
        debug!(user_id = %id, index, favorites = count, "favorite removed");
        Ok(count)
    }

    fn remove_favorite_by_text(&self, id: &str, text: &str) -> Result<usize, QuoteError> {
        let count = self.update_with(id, |state| state.remove_favorite_by_text(text))?;
        debug!(user_id = %id, favorites = count, "favorite removed by text");
        Ok(count)
    }

    fn record_view(&self, id: &str) -> Result<u64, QuoteError> {
        let views = self.upsert_with(id, |state| Ok(state.record_view()))?;
        debug!(user_id = %id, views, "view recorded");
        Ok(views)
    }

    fn contains(&self, id: &str) -> Result<bool, QuoteError> {
        Ok(self.read()?.contains_key(id))
    }

    fn len(&self) -> Result<usize, QuoteError> {
        Ok(self.read()?.len())
    }
}
