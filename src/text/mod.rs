// Text core: markup stripping, body extraction, stopwords and frequency
// ranking.
//
// Everything here is pure: no I/O, no shared state.

pub mod extract;
pub mod markup;
pub mod rank;
pub mod stopwords;

use serde::Serialize;

use self::rank::WordCount;
use self::stopwords::ExcludedWords;

/// Case-normalize a raw document before extraction.
///
/// Markers, titles and tokens are all matched against the lowercased text.
pub fn normalize(document: &str) -> String {
    document.to_lowercase()
}

/// Title and ranking produced from one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub title: Option<String>,
    pub words: Vec<WordCount>,
    /// Whether the body was bounded by both markers
    pub bounded: bool,
}

/// Strip markup, normalize, extract and rank a raw document in one pass.
///
/// `limit` of `None` keeps every distinct word.
pub fn analyze(raw: &str, excluded: &ExcludedWords, limit: Option<usize>) -> Analysis {
    let document = normalize(&markup::to_plain_text(raw));
    let extraction = extract::extract(&document);
    let words = match limit {
        Some(n) => rank::rank(extraction.body, excluded, n),
        None => rank::count_words(extraction.body, excluded),
    };
    Analysis {
        title: extraction.title,
        words,
        bounded: extraction.bounded,
    }
}
