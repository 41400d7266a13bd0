//! # Word Frequency Table

use crate::WORD_BOUNDARY;
use crate::segment::WordSplitter;
use crate::types::{TokenStr, WordCountMap};
use compact_str::format_compact;

/// Prefixes a word with the [`WORD_BOUNDARY`] marker.
pub fn mark_word(word: &str) -> TokenStr {
    format_compact!("{WORD_BOUNDARY}{word}")
}

/// `{ marked word -> count }` frequency table over a training corpus.
///
/// Built once per training run; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordCounts {
    counts: WordCountMap,
}

impl WordCounts {
    /// Builds the table from corpus documents.
    ///
    /// Each document is split into whitespace-delimited words, each
    /// word is boundary-marked, and counts of identical marked words
    /// are summed. Fails if the regex engine reports a match error.
    pub fn from_corpus<I, S>(
        splitter: &WordSplitter,
        corpus: I,
    ) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = WordCountMap::default();
        for text in corpus {
            for word in splitter.try_words(text.as_ref())? {
                *counts.entry(mark_word(word)).or_default() += 1;
            }
        }
        Ok(Self { counts })
    }

    /// The number of distinct marked words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if the table contains no words.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(marked word, count)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&TokenStr, u64)> {
        self.counts.iter().map(|(w, &c)| (w, c))
    }

    /// The underlying count map.
    pub(crate) fn as_map(&self) -> &WordCountMap {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_word() {
        assert_eq!(mark_word("hello"), "▁hello");
    }

    #[test]
    fn test_counts_are_summed() {
        let splitter = WordSplitter::new();
        let counts =
            WordCounts::from_corpus(&splitter, ["hello world", "hello there", "world peace"]).unwrap();

        assert_eq!(counts.len(), 4);
        assert_eq!(counts.as_map().get("▁hello").copied(), Some(2));
        assert_eq!(counts.as_map().get("▁world").copied(), Some(2));
        assert_eq!(counts.as_map().get("▁there").copied(), Some(1));
        assert_eq!(counts.as_map().get("▁peace").copied(), Some(1));
    }

    #[test]
    fn test_whitespace_only_corpus_is_empty() {
        let splitter = WordSplitter::new();
        let counts = WordCounts::from_corpus(&splitter, ["   ", "\n\t"]).unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn test_repeated_word_in_one_document() {
        let splitter = WordSplitter::new();
        let counts = WordCounts::from_corpus(&splitter, ["go go go"]).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.as_map().get("▁go").copied(), Some(3));
    }
}
