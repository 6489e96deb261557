use chrono::Utc;
use uuid::Uuid;

/// Mint a session identifier: `user_<unix millis>_<uuid v4>`.
///
/// The random suffix keeps ids minted in the same millisecond distinct.
pub fn new_user_id() -> String {
    format!(
        "user_{}_{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}
