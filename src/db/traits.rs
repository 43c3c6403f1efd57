// Database trait: the persistence gateway the pipeline talks to.
//
// Implementor: SqliteDatabase. Methods are async so the pipeline can hold
// an `Arc<dyn Database>` next to the async document source; the SQLite
// work inside each call is synchronous and short.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{RankedResult, StoreOutcome, StoreStats, TitleSummary};
use crate::text::rank::WordCount;

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Rankings ---

    /// Store a title's ranking. A no-op returning `AlreadyExists` when the
    /// title (compared case-insensitively) is already stored.
    async fn store_ranking(
        &self,
        title: &str,
        url: &str,
        words: &[WordCount],
    ) -> Result<StoreOutcome>;

    /// Load a title's ranking, matching the title case-insensitively.
    async fn lookup_ranking(&self, title: &str) -> Result<Option<RankedResult>>;

    // --- Listing ---

    /// All stored titles, alphabetically.
    async fn list_titles(&self) -> Result<Vec<TitleSummary>>;

    /// Row counts across both tables.
    async fn stats(&self) -> Result<StoreStats>;
}
