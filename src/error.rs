// User-facing error taxonomy for the two pipeline actions.
//
// Everything below the pipeline returns anyhow errors with context; the
// pipeline sorts failures into these variants so the CLI can print one
// clear message per case.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordRankError {
    /// The URL was malformed, unreachable, or returned a non-success status.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: anyhow::Error,
    },
    /// The document had no start-of-book marker line with a title.
    #[error("no book was found at {url}")]
    NoTitleFound { url: String },
    /// Every token in the body was excluded, or the body was empty.
    #[error("no words found in \"{title}\"")]
    NoWordsFound { title: String },
    /// Title lookup missed.
    #[error("title not found: \"{0}\"")]
    NotFound(String),
    /// The store could not be opened, queried, or written.
    #[error("storage error")]
    Storage(#[source] anyhow::Error),
}

impl WordRankError {
    /// One-line message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            WordRankError::InvalidUrl { .. } => "Invalid URL.".to_string(),
            WordRankError::NoTitleFound { .. } => "No book was found.".to_string(),
            WordRankError::NoWordsFound { .. } => "No words found.".to_string(),
            WordRankError::NotFound(_) => {
                "Title not found in database. Try entering the URL for the book.".to_string()
            }
            WordRankError::Storage(e) => format!("A storage error occurred: {e:#}"),
        }
    }
}
