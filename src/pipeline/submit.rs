// Submit pipeline: URL -> fetch -> extract -> rank -> store -> show.
//
// 1. Validate and fetch the URL
// 2. Lowercase the document and isolate the title and body
// 3. Rank the body's words and keep the top N
// 4. Store the ranking unless the title is already present
// 5. Read the stored ranking back, which is what the user sees

use tracing::{error, info, warn};

use crate::db::models::{RankedResult, StoreOutcome};
use crate::db::Database;
use crate::error::WordRankError;
use crate::fetch::client::validate_url;
use crate::fetch::traits::DocumentSource;
use crate::text;
use crate::text::stopwords::ExcludedWords;

/// The stored ranking for a submitted URL and whether this call wrote it.
#[derive(Debug, Clone)]
pub struct Submission {
    pub result: RankedResult,
    pub outcome: StoreOutcome,
}

/// Run the whole fetch+rank+store cycle for one URL.
///
/// When the title is already stored nothing is written and the existing
/// ranking is returned with `StoreOutcome::AlreadyExists`.
pub async fn run(
    source: &dyn DocumentSource,
    db: &dyn Database,
    excluded: &ExcludedWords,
    url: &str,
    limit: usize,
) -> Result<Submission, WordRankError> {
    let url = url.trim();

    validate_url(url).map_err(|e| WordRankError::InvalidUrl {
        url: url.to_string(),
        source: e,
    })?;

    let raw = source.fetch(url).await.map_err(|e| {
        warn!(url, error = %format!("{e:#}"), "Fetch failed");
        WordRankError::InvalidUrl {
            url: url.to_string(),
            source: e,
        }
    })?;

    let analysis = text::analyze(&raw, excluded, Some(limit));

    let Some(title) = analysis.title else {
        info!(url, "No title marker in document");
        return Err(WordRankError::NoTitleFound {
            url: url.to_string(),
        });
    };

    if analysis.words.is_empty() {
        info!(url, title = %title, "No words survived exclusion");
        return Err(WordRankError::NoWordsFound { title });
    }

    info!(
        title = %title,
        bounded = analysis.bounded,
        words = analysis.words.len(),
        top_word = %analysis.words[0].word,
        top_count = analysis.words[0].count,
        "Ranked document"
    );

    let outcome = db
        .store_ranking(&title, url, &analysis.words)
        .await
        .map_err(|e| storage_error(e, &title))?;

    let result = db
        .lookup_ranking(&title)
        .await
        .map_err(|e| storage_error(e, &title))?
        .ok_or_else(|| {
            storage_error(
                anyhow::anyhow!("ranking for \"{title}\" missing right after store"),
                &title,
            )
        })?;

    Ok(Submission { result, outcome })
}

fn storage_error(e: anyhow::Error, title: &str) -> WordRankError {
    error!(error = %format!("{e:#}"), title, "Storage operation failed");
    WordRankError::Storage(e)
}
