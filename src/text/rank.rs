// Frequency ranker: whitespace tokenization, counting, top-N ranking.
//
// Tokens are whatever sits between runs of whitespace. Punctuation is kept,
// so "whale," and "whale" are different words. Stored rankings depend on
// this tokenization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::stopwords::ExcludedWords;

/// One ranked word and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Count every non-excluded token and return them all, most frequent first.
///
/// Words with equal counts keep the order in which they first appear in
/// `body`, so the same input always produces the same ranking.
pub fn count_words(body: &str, excluded: &ExcludedWords) -> Vec<WordCount> {
    // Index into `counts` by token; `counts` itself is in first-seen order.
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u32)> = Vec::new();

    for token in body.split_whitespace() {
        if excluded.contains(token) {
            continue;
        }
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    // Stable sort keeps first-occurrence order among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(word, count)| WordCount::new(word, count))
        .collect()
}

/// The top `limit` words of `body`. Empty when nothing survives exclusion.
pub fn rank(body: &str, excluded: &ExcludedWords, limit: usize) -> Vec<WordCount> {
    let mut ranked = count_words(body, excluded);
    ranked.truncate(limit);
    ranked
}

/// Whether counts never increase from one position to the next.
pub fn is_ranked(words: &[WordCount]) -> bool {
    words.windows(2).all(|pair| pair[0].count >= pair[1].count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excluded(words: &[&str]) -> ExcludedWords {
        ExcludedWords::from_words(words)
    }

    #[test]
    fn test_rank_worked_example() {
        let ranked = rank(
            "the cat sat on the mat the cat ran",
            &excluded(&["the", "on"]),
            10,
        );
        assert_eq!(
            ranked,
            vec![
                WordCount::new("cat", 2),
                WordCount::new("sat", 1),
                WordCount::new("mat", 1),
                WordCount::new("ran", 1),
            ]
        );
    }

    #[test]
    fn test_rank_truncates_to_limit() {
        let ranked = rank("a b c d e f a b a", &ExcludedWords::default(), 2);
        assert_eq!(ranked, vec![WordCount::new("a", 3), WordCount::new("b", 2)]);
    }

    #[test]
    fn test_zero_limit_is_empty() {
        assert!(rank("whale whale", &ExcludedWords::default(), 0).is_empty());
    }

    #[test]
    fn test_punctuation_is_part_of_the_token() {
        let ranked = count_words("whale, whale whale.", &ExcludedWords::default());
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0], WordCount::new("whale,", 1));
    }

    #[test]
    fn test_counting_is_case_sensitive_but_exclusion_is_not() {
        let ranked = count_words("The the Cat cat cat", &excluded(&["the"]));
        assert_eq!(
            ranked,
            vec![WordCount::new("cat", 2), WordCount::new("Cat", 1)]
        );
    }

    #[test]
    fn test_only_excluded_words_gives_empty_ranking() {
        assert!(rank("the of and", &ExcludedWords::builtin(), 10).is_empty());
        assert!(rank("   \n\t ", &ExcludedWords::builtin(), 10).is_empty());
    }

    #[test]
    fn test_is_ranked() {
        assert!(is_ranked(&[]));
        assert!(is_ranked(&[WordCount::new("a", 2), WordCount::new("b", 2)]));
        assert!(!is_ranked(&[WordCount::new("a", 1), WordCount::new("b", 2)]));
    }
}
