// Excluded words: the stopword set filtered out before ranking.
//
// The builtin list is small: articles, pronouns, conjunctions and
// prepositions that would otherwise fill every top-ten list. The larger
// English list comes from the `stop-words` crate.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// The fixed exclusion list. Entries keep their trailing punctuation
/// (`mr.`, `"i`) because tokens are never stripped of punctuation.
pub const BUILTIN_EXCLUDED: &[&str] = &[
    "mr.", "an", "him", "\"i", "for", "with", "but", "as", "on", "this", "so", "by", "that",
    "it", "his", "i", "her", "a", "you", "he", "she", "at", "in", "or", "to", "of", "and", "the",
];

/// Which exclusion list to rank against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwordList {
    /// The small fixed list (default)
    Builtin,
    /// Builtin plus the full English list from `stop-words`
    English,
}

/// A case-insensitive set of words dropped before counting.
#[derive(Debug, Clone, Default)]
pub struct ExcludedWords {
    words: HashSet<String>,
}

impl ExcludedWords {
    /// Build a set from arbitrary words. Entries are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_EXCLUDED)
    }

    pub fn english() -> Self {
        let mut set = Self::builtin();
        let extra: Vec<String> = get(LANGUAGE::English);
        set.words.extend(extra.into_iter().map(|w| w.to_lowercase()));
        set
    }

    pub fn for_list(list: StopwordList) -> Self {
        match list {
            StopwordList::Builtin => Self::builtin(),
            StopwordList::English => Self::english(),
        }
    }

    /// Whether `token` is excluded, ignoring case.
    pub fn contains(&self, token: &str) -> bool {
        if self.words.contains(token) {
            return true;
        }
        // Most tokens arrive already lowercased; only allocate when some
        // character changes under lowercasing (titlecase letters included).
        token.chars().any(|c| c.to_lowercase().ne(std::iter::once(c)))
            && self.words.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_no_duplicates_after_lowercasing() {
        let set = ExcludedWords::builtin();
        assert_eq!(set.len(), BUILTIN_EXCLUDED.len());
    }

    #[test]
    fn test_contains_ignores_case() {
        let set = ExcludedWords::from_words(["The", "ON"]);
        assert!(set.contains("the"));
        assert!(set.contains("THE"));
        assert!(set.contains("On"));
        assert!(!set.contains("cat"));
    }

    #[test]
    fn test_contains_lowercases_titlecase_letters() {
        // U+01C5 is titlecase, not uppercase, but still lowercases to U+01C6.
        assert!(!'\u{1c5}'.is_uppercase());
        let set = ExcludedWords::from_words(["\u{1c6}ungla"]);
        assert!(set.contains("\u{1c5}ungla"));
        assert!(set.contains("\u{1c4}UNGLA"));
    }

    #[test]
    fn test_builtin_keeps_punctuated_entries() {
        let set = ExcludedWords::builtin();
        assert!(set.contains("mr."));
        assert!(set.contains("\"i"));
        assert!(!set.contains("mr"));
    }

    #[test]
    fn test_this_and_so_are_separate_entries() {
        let set = ExcludedWords::builtin();
        assert!(set.contains("this"));
        assert!(set.contains("so"));
        assert!(!set.contains("thisso"));
    }

    #[test]
    fn test_english_is_a_superset_of_builtin() {
        let english = ExcludedWords::english();
        for word in BUILTIN_EXCLUDED {
            assert!(english.contains(word), "missing {word}");
        }
        assert!(english.len() > BUILTIN_EXCLUDED.len());
    }
}
