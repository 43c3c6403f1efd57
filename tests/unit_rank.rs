// Unit tests for the frequency ranker and the excluded-word set.
//
// Ordering, truncation, determinism, and exclusion behaviour, including the
// builtin list against realistic prose.

use wordrank::text::rank::{count_words, is_ranked, rank, WordCount};
use wordrank::text::stopwords::ExcludedWords;
use wordrank::text::{analyze, normalize};

fn wc(word: &str, count: u32) -> WordCount {
    WordCount::new(word, count)
}

const PROSE: &str = "It was the best of times, it was the worst of times, it was the age of \
                     wisdom, it was the age of foolishness, it was the epoch of belief, it was \
                     the epoch of incredulity, it was the season of Light, it was the season of \
                     Darkness, it was the spring of hope, it was the winter of despair";

// ============================================================
// Ordering and ties
// ============================================================

#[test]
fn worked_example_breaks_ties_by_first_occurrence() {
    let excluded = ExcludedWords::from_words(["the", "on"]);
    let ranked = rank("the cat sat on the mat the cat ran", &excluded, 10);
    assert_eq!(
        ranked,
        vec![wc("cat", 2), wc("sat", 1), wc("mat", 1), wc("ran", 1)]
    );
}

#[test]
fn ranking_is_non_increasing_and_bounded() {
    let excluded = ExcludedWords::builtin();
    for limit in [0, 1, 3, 10, 100] {
        let ranked = rank(PROSE, &excluded, limit);
        assert!(ranked.len() <= limit);
        assert!(is_ranked(&ranked), "not ranked for limit {limit}: {ranked:?}");
    }
}

#[test]
fn ranking_is_deterministic() {
    let excluded = ExcludedWords::builtin();
    let first = rank(PROSE, &excluded, 10);
    for _ in 0..20 {
        assert_eq!(rank(PROSE, &excluded, 10), first);
    }
}

#[test]
fn prose_top_words_with_builtin_list() {
    let ranked = rank(&normalize(PROSE), &ExcludedWords::builtin(), 4);
    assert_eq!(
        ranked,
        vec![wc("was", 10), wc("times,", 2), wc("age", 2), wc("epoch", 2)]
    );
}

#[test]
fn words_are_unique_within_a_ranking() {
    let ranked = count_words(PROSE, &ExcludedWords::builtin());
    let mut words: Vec<&str> = ranked.iter().map(|w| w.word.as_str()).collect();
    let before = words.len();
    words.sort_unstable();
    words.dedup();
    assert_eq!(words.len(), before);
}

#[test]
fn count_words_totals_every_surviving_token() {
    let ranked = count_words("a b c b c c", &ExcludedWords::default());
    let total: u32 = ranked.iter().map(|w| w.count).sum();
    assert_eq!(total, 6);
    assert_eq!(ranked, vec![wc("c", 3), wc("b", 2), wc("a", 1)]);
}

#[test]
fn fewer_distinct_words_than_limit_returns_all() {
    let ranked = rank("whale whale ship", &ExcludedWords::default(), 10);
    assert_eq!(ranked, vec![wc("whale", 2), wc("ship", 1)]);
}

// ============================================================
// Tokenization
// ============================================================

#[test]
fn splits_on_any_whitespace_run() {
    let ranked = count_words("whale\n\n\twhale   ship\r\nship", &ExcludedWords::default());
    assert_eq!(ranked, vec![wc("whale", 2), wc("ship", 2)]);
}

#[test]
fn punctuation_makes_distinct_tokens() {
    let ranked = count_words("sea sea, sea. sea", &ExcludedWords::default());
    assert_eq!(ranked, vec![wc("sea", 2), wc("sea,", 1), wc("sea.", 1)]);
}

// ============================================================
// Exclusion
// ============================================================

#[test]
fn mixed_case_excluded_list_still_excludes() {
    let excluded = ExcludedWords::from_words(["I", "The"]);
    let ranked = count_words("i I the THE whale", &excluded);
    assert_eq!(ranked, vec![wc("whale", 1)]);
}

#[test]
fn only_stopwords_gives_empty_ranking() {
    let ranked = rank("the and of to a in", &ExcludedWords::builtin(), 10);
    assert!(ranked.is_empty());
}

#[test]
fn english_list_excludes_more_than_builtin() {
    let body = "we were there when they came";
    let builtin = count_words(body, &ExcludedWords::builtin());
    let english = count_words(body, &ExcludedWords::english());
    assert!(english.len() < builtin.len());
}

// ============================================================
// analyze: normalize + extract + rank
// ============================================================

#[test]
fn analyze_lowercases_before_counting() {
    let analysis = analyze("Whale WHALE whale Ship", &ExcludedWords::builtin(), Some(10));
    assert_eq!(analysis.title, None);
    assert!(!analysis.bounded);
    assert_eq!(analysis.words, vec![wc("whale", 3), wc("ship", 1)]);
}

#[test]
fn analyze_without_limit_keeps_everything() {
    let analysis = analyze("a b c d e f g h i j k l", &ExcludedWords::default(), None);
    assert_eq!(analysis.words.len(), 12);
}
