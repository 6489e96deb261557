use event_emitter_rs::EventEmitter;
use tracing::warn;

use super::storage::{KeyValueStorage, DATA_KEY, THEME_KEY};
use super::theme::Theme;
use crate::catalog::{Catalog, Quote, ALL_CATEGORIES};
use crate::error::QuoteError;
use crate::selection::pick_random;
use crate::store::{UserState, UserStats};

/// Emitted with the shown quote as JSON after every successful pick.
pub const QUOTE_SHOWN: &str = "QuoteShown";
/// Emitted with the new favorites count, as decimal text, after an add or remove.
pub const FAVORITES_CHANGED: &str = "FavoritesChanged";
/// Emitted with `dark` or `light` after a toggle.
pub const THEME_CHANGED: &str = "ThemeChanged";

/// A single user's browsing session over the catalog.
///
/// State is loaded from storage once in [`LocalSession::open`] and written
/// back after each mutation. Listeners registered with [`LocalSession::on`]
/// are the rendering hooks; `emit` waits for them before returning.
pub struct LocalSession<S> {
    catalog: Catalog,
    storage: S,
    state: UserState,
    theme: Theme,
    category: String,
    current: Option<Quote>,
    emitter: EventEmitter,
}

impl<S: KeyValueStorage> LocalSession<S> {
    /// Restore the saved view count, favorites and theme.
    ///
    /// A record that is not JSON at all is logged and replaced by an empty
    /// one. Inside a readable record, a bad field only resets that field.
    pub fn open(catalog: Catalog, storage: S) -> Result<Self, QuoteError> {
        let state = match storage.get(DATA_KEY)? {
            Some(raw) => serde_json::from_str::<UserState>(&raw).unwrap_or_else(|e| {
                warn!("discarding unreadable {DATA_KEY}: {e}");
                UserState::default()
            }),
            None => UserState::default(),
        };

        let theme = match storage.get(THEME_KEY)? {
            Some(raw) => raw.parse().unwrap_or_default(),
            None => Theme::default(),
        };

        Ok(Self {
            catalog,
            storage,
            state,
            theme,
            category: ALL_CATEGORIES.to_string(),
            current: None,
            emitter: EventEmitter::new(),
        })
    }

    /// Register a listener for one of [`QUOTE_SHOWN`], [`FAVORITES_CHANGED`]
    /// or [`THEME_CHANGED`].
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn current(&self) -> Option<&Quote> {
        self.current.as_ref()
    }

    pub fn favorites(&self) -> &[Quote] {
        &self.state.favorites
    }

    pub fn stats(&self) -> UserStats {
        self.state.stats()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Pick a quote from the current category, make it current and count
    /// the view.
    ///
    /// An empty category is `NotFound` and leaves the current quote and the
    /// view count untouched.
    pub fn new_quote(&mut self) -> Result<&Quote, QuoteError> {
        let quote = {
            let pool = self.catalog.pool(Some(self.category.as_str()));
            pick_random(&pool)?.clone()
        };

        let mut next = self.state.clone();
        next.record_view();
        self.commit(next)?;
        self.emit(QUOTE_SHOWN, serde_json::to_string(&quote)?);

        Ok(&*self.current.insert(quote))
    }

    /// Switch category, then pick a quote from it.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<&Quote, QuoteError> {
        self.category = category.into();
        self.new_quote()
    }

    /// Add the current quote to favorites.
    pub fn favorite_current(&mut self) -> Result<usize, QuoteError> {
        let quote = self.current.clone().ok_or(QuoteError::NoCurrentQuote)?;
        let mut next = self.state.clone();
        let count = next.add_favorite(quote)?;
        self.commit(next)?;
        self.emit(FAVORITES_CHANGED, count.to_string());
        Ok(count)
    }

    /// Remove a favorite by position; later indices shift down by one.
    pub fn remove_favorite(&mut self, index: usize) -> Result<usize, QuoteError> {
        let mut next = self.state.clone();
        let count = next.remove_favorite(index)?;
        self.commit(next)?;
        self.emit(FAVORITES_CHANGED, count.to_string());
        Ok(count)
    }

    /// The current quote as `"<text>" - <author>`, for copy and share.
    pub fn share_text(&self) -> Result<String, QuoteError> {
        self.current
            .as_ref()
            .map(Quote::to_string)
            .ok_or(QuoteError::NoCurrentQuote)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, QuoteError> {
        let next = self.theme.toggled();
        self.storage.set(THEME_KEY, next.as_str())?;
        self.theme = next;
        self.emit(THEME_CHANGED, self.theme.to_string());
        Ok(self.theme)
    }

    /// Persist `next`, then make it the live state. A failed write leaves
    /// the session as it was.
    fn commit(&mut self, next: UserState) -> Result<(), QuoteError> {
        let raw = serde_json::to_string(&next)?;
        self.storage.set(DATA_KEY, &raw)?;
        self.state = next;
        Ok(())
    }

    /// Listeners all take a `String`, so every payload is sent as one.
    fn emit(&mut self, event: &str, payload: String) {
        for handle in self.emitter.emit(event, payload) {
            if handle.join().is_err() {
                warn!("{event} listener panicked");
            }
        }
    }
}
