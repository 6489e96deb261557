//! Per-user state: favorites and view counters keyed by an opaque identifier.
//!
//! `UserStore` is the seam the service is generic over;
//! `InMemoryUserStore` is the process-wide table the HTTP server runs on.
//! Identifier possession is the only access control.

mod in_memory;
mod session_id;
mod store;
mod user_state;

pub use in_memory::InMemoryUserStore;
pub use session_id::new_user_id;
pub use store::UserStore;
pub use user_state::{UserState, UserStats};
