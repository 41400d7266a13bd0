//! # Adjacent Pair Frequency Counting
//!
//! Recomputed in full each training iteration: every word's token
//! sequence is re-derived from characters by replaying the merge list,
//! and adjacent pairs are counted weighted by word frequency.
//!
//! With the `rayon` feature, counting fans out across words and the
//! per-word maps are summed; summation is associative and
//! order-independent, so the result is identical to the serial path.

use crate::bpe::merge::apply_merges;
use crate::bpe::word_count::WordCounts;
use crate::types::{PairCountMap, SymbolPair};

/// Counts frequency-weighted adjacent token pairs across all words.
pub fn count_pairs(
    words: &WordCounts,
    merges: &[SymbolPair],
) -> PairCountMap {
    #[cfg(feature = "rayon")]
    {
        count_pairs_parallel(words, merges)
    }
    #[cfg(not(feature = "rayon"))]
    {
        count_pairs_serial(words, merges)
    }
}

#[cfg_attr(feature = "rayon", allow(dead_code))]
fn count_pairs_serial(
    words: &WordCounts,
    merges: &[SymbolPair],
) -> PairCountMap {
    let mut pairs = PairCountMap::default();
    for (word, count) in words.iter() {
        accumulate_word(&mut pairs, word, count, merges);
    }
    pairs
}

#[cfg(feature = "rayon")]
fn count_pairs_parallel(
    words: &WordCounts,
    merges: &[SymbolPair],
) -> PairCountMap {
    use rayon::prelude::*;

    words
        .as_map()
        .par_iter()
        .map(|(word, &count)| {
            let mut local = PairCountMap::default();
            accumulate_word(&mut local, word, count, merges);
            local
        })
        .reduce(PairCountMap::default, |mut acc, local| {
            for (pair, count) in local {
                *acc.entry(pair).or_default() += count;
            }
            acc
        })
}

fn accumulate_word(
    pairs: &mut PairCountMap,
    word: &str,
    count: u64,
    merges: &[SymbolPair],
) {
    let tokens = apply_merges(word, merges);
    for adjacent in tokens.windows(2) {
        *pairs
            .entry((adjacent[0].clone(), adjacent[1].clone()))
            .or_default() += count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::WordSplitter;
    use crate::types::TokenStr;

    fn pair(
        left: &str,
        right: &str,
    ) -> SymbolPair {
        (TokenStr::from(left), TokenStr::from(right))
    }

    #[test]
    fn test_counts_are_frequency_weighted() {
        let splitter = WordSplitter::new();
        let words = WordCounts::from_corpus(&splitter, ["ab ab ab"]).unwrap();

        let pairs = count_pairs(&words, &[]);
        // "▁ab" occurs 3 times: (▁, a) and (a, b) each weighted by 3.
        assert_eq!(pairs.get(&pair("▁", "a")).copied(), Some(3));
        assert_eq!(pairs.get(&pair("a", "b")).copied(), Some(3));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_counts_aggregate_across_words() {
        let splitter = WordSplitter::new();
        let words = WordCounts::from_corpus(&splitter, ["ab", "ac"]).unwrap();

        let pairs = count_pairs(&words, &[]);
        assert_eq!(pairs.get(&pair("▁", "a")).copied(), Some(2));
        assert_eq!(pairs.get(&pair("a", "b")).copied(), Some(1));
        assert_eq!(pairs.get(&pair("a", "c")).copied(), Some(1));
    }

    #[test]
    fn test_merges_change_the_pair_space() {
        let splitter = WordSplitter::new();
        let words = WordCounts::from_corpus(&splitter, ["ab"]).unwrap();

        let merges = vec![pair("a", "b")];
        let pairs = count_pairs(&words, &merges);
        assert_eq!(pairs.get(&pair("▁", "ab")).copied(), Some(1));
        assert_eq!(pairs.get(&pair("a", "b")), None);
    }

    #[test]
    fn test_fully_merged_words_produce_no_pairs() {
        let splitter = WordSplitter::new();
        let words = WordCounts::from_corpus(&splitter, ["ab"]).unwrap();

        let merges = vec![pair("a", "b"), pair("▁", "ab")];
        assert!(count_pairs(&words, &merges).is_empty());
    }

    #[test]
    fn test_empty_table_produces_no_pairs() {
        let splitter = WordSplitter::new();
        let words = WordCounts::from_corpus(&splitter, Vec::<&str>::new()).unwrap();
        assert!(count_pairs(&words, &[]).is_empty());
    }
}
