use crate::text_processing::tokenize;
use gxhash::HashSet;
use std::time::Instant;
use tracing::debug;

/// Word-overlap estimate between two texts, as a percentage 0-100.
///
/// Case-insensitive bag overlap: every token of A that occurs anywhere
/// in B counts as a match, duplicates in A counting once each against
/// a single occurrence in B. Order and multiplicity in B are ignored.
pub fn word_similarity(text_a: &str, text_b: &str) -> u8 {
    let start = Instant::now();

    let lower_a = text_a.to_lowercase();
    let lower_b = text_b.to_lowercase();
    let words_a = tokenize(&lower_a);
    let words_b = tokenize(&lower_b);

    if words_a.is_empty() && words_b.is_empty() {
        return 100;
    }
    if words_a.is_empty() || words_b.is_empty() {
        return 0;
    }

    let vocabulary_b: HashSet<&str> = words_b.iter().copied().collect();
    let matches = words_a
        .iter()
        .filter(|word| vocabulary_b.contains(*word))
        .count();

    let total_words = words_a.len().max(words_b.len());
    let score = (matches as f64 / total_words as f64 * 100.0).round() as u8;

    debug!(
        words_a = words_a.len(),
        words_b = words_b.len(),
        matches,
        score,
        duration_ms = start.elapsed().as_millis() as u64,
        "word similarity computed"
    );

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_overlap() {
        // the, cat match; sat does not. 2 of 3.
        assert_eq!(word_similarity("the cat sat", "the cat ran"), 67);
    }

    #[test]
    fn test_identical_sentences() {
        assert_eq!(word_similarity("the cat sat", "the cat sat"), 100);
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(word_similarity("one two", "three four"), 0);
    }

    #[test]
    fn test_both_sides_empty() {
        assert_eq!(word_similarity("", ""), 100);
        assert_eq!(word_similarity("  \n\t ", " "), 100);
    }

    #[test]
    fn test_one_side_empty() {
        assert_eq!(word_similarity("", "some words"), 0);
        assert_eq!(word_similarity("some words", ""), 0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(word_similarity("The CAT", "the cat"), 100);
    }

    #[test]
    fn test_duplicates_each_count_against_one_occurrence() {
        // Bag overlap, not multiset intersection: all three "cat"
        // tokens match the single "cat" in B.
        assert_eq!(word_similarity("cat cat cat", "cat dog"), 100);
    }

    #[test]
    fn test_rounding() {
        // 1 match of max(7, 1) words -> 14.29 rounds to 14.
        assert_eq!(word_similarity("a b c d e f g", "a"), 14);
    }

    #[test]
    fn test_whitespace_runs_and_newlines_delimit_words() {
        assert_eq!(word_similarity("the\ncat\t sat", "the cat sat"), 100);
    }
}
