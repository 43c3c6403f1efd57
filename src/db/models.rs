// Data models: Rust structs that map to database rows.
//
// Kept apart from the queries so the pipeline and output layers can use
// them without depending on rusqlite.

use serde::{Deserialize, Serialize};

use crate::text::rank::WordCount;

/// A title's stored top-N ranking. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    pub title: String,
    pub url: String,
    /// Ranked words in stored rank order (highest count first)
    pub words: Vec<WordCount>,
}

/// One row of the title listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleSummary {
    pub id: i64,
    pub title: String,
    pub url: String,
    /// Number of ranked words stored for this title
    pub word_count: u32,
    pub created_at: String,
}

/// What happened when a ranking was submitted for storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// Title and words were written in one transaction
    Stored { title_id: i64 },
    /// The title was already present; nothing was written
    AlreadyExists { title_id: i64 },
}

impl StoreOutcome {
    pub fn title_id(&self) -> i64 {
        match self {
            StoreOutcome::Stored { title_id } | StoreOutcome::AlreadyExists { title_id } => {
                *title_id
            }
        }
    }

    pub fn was_stored(&self) -> bool {
        matches!(self, StoreOutcome::Stored { .. })
    }
}

/// Row counts across both tables, for status output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub titles: i64,
    pub word_rows: i64,
}
