use thiserror::Error;

/// Every failure the catalog, the user store and the local session can report.
///
/// Messages double as the `error` field of HTTP responses, except for the
/// internal variants which are logged and rendered generically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// A required field was missing, blank or malformed.
    #[error("{0}")]
    Validation(String),

    /// Unknown user, or no quote matched the requested pool.
    #[error("{0}")]
    NotFound(String),

    /// The quote (matched by text) is already among the user's favorites.
    #[error("Quote already in favorites")]
    AlreadyExists,

    /// A favorite index that is not a number in `[0, len)`; carries the raw value.
    #[error("Invalid quote index")]
    InvalidArgument(String),

    /// Local session action that needs a shown quote before one was picked.
    #[error("Please get a quote first!")]
    NoCurrentQuote,

    #[error("user store lock poisoned during {0}")]
    Storage(&'static str),

    #[error("internal error: {0}")]
    Internal(String),
}

impl QuoteError {
    /// Map this error to an HTTP status code.
    ///
    /// Duplicate favorites answer 400, not 409; existing clients expect it.
    pub fn status_code(&self) -> u16 {
        match self {
            QuoteError::Validation(_) => 400,
            QuoteError::NotFound(_) => 404,
            QuoteError::AlreadyExists => 400,
            QuoteError::InvalidArgument(_) => 400,
            QuoteError::NoCurrentQuote => 400,
            QuoteError::Storage(_) => 500,
            QuoteError::Internal(_) => 500,
        }
    }

    /// Whether this error hides its details from callers.
    pub fn is_internal(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::Internal(err.to_string())
    }
}

impl From<std::io::Error> for QuoteError {
    fn from(err: std::io::Error) -> Self {
        QuoteError::Internal(err.to_string())
    }
}
