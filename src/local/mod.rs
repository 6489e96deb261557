//! Client-local variant: one user's quote browsing state, held in-process
//! and mirrored to a key/value storage after every mutation.
//!
//! Storage layout matches the browser page it replaces:
//! - `quoteData`: JSON `{ "viewCount": n, "favorites": [...] }`
//! - `theme`: `dark` or `light`

mod session;
mod storage;
mod theme;

pub use session::{LocalSession, FAVORITES_CHANGED, QUOTE_SHOWN, THEME_CHANGED};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, DATA_KEY, THEME_KEY};
pub use theme::Theme;
