// Lookup pipeline: title -> stored ranking.

use tracing::{debug, error};

use crate::db::models::RankedResult;
use crate::db::Database;
use crate::error::WordRankError;

/// Look up a stored ranking by title, ignoring case.
///
/// Surrounding whitespace in `title` is ignored; a blank title never matches.
pub async fn run(db: &dyn Database, title: &str) -> Result<RankedResult, WordRankError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(WordRankError::NotFound(String::new()));
    }

    match db.lookup_ranking(title).await {
        Ok(Some(result)) => {
            debug!(title = %result.title, words = result.words.len(), "Lookup hit");
            Ok(result)
        }
        Ok(None) => Err(WordRankError::NotFound(title.to_string())),
        Err(e) => {
            error!(error = %format!("{e:#}"), title, "Lookup failed");
            Err(WordRankError::Storage(e))
        }
    }
}
