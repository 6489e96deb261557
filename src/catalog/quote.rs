use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable quote. Two quotes are the same favorite when their `text` matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub category: String,
}

impl Quote {
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            category: category.into(),
        }
    }

    /// Equality by text, the only identity favorites have.
    pub fn same_text(&self, other: &Quote) -> bool {
        self.text == other.text
    }
}

/// Renders as `"<text>" - <author>`, the copy/share format.
impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}
