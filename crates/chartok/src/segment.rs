//! # Whitespace Word Segmentation

use crate::WORD_PATTERN;
use crate::validators::expect_pattern;
use fancy_regex::Regex;

/// Splits text into whitespace-delimited words with a compiled pattern.
#[derive(Debug, Clone)]
pub struct WordSplitter {
    pattern: Regex,
}

impl Default for WordSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSplitter {
    /// Creates a splitter over the crate's [`WORD_PATTERN`].
    pub fn new() -> Self {
        Self {
            pattern: expect_pattern(WORD_PATTERN),
        }
    }

    /// The word spans of `text`, left to right.
    ///
    /// Fails if the regex engine reports a match error.
    pub fn try_words<'a>(
        &self,
        text: &'a str,
    ) -> anyhow::Result<Vec<&'a str>> {
        let mut words = Vec::new();
        for mat in self.pattern.find_iter(text) {
            words.push(mat?.as_str());
        }
        Ok(words)
    }

    /// The word spans of `text`, for encode paths with no error channel.
    ///
    /// `\S+` has no backtracking; an engine error ends the scan.
    pub fn words<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        self.pattern
            .find_iter(text)
            .map_while(Result::ok)
            .map(|m| m.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_basic() {
        let splitter = WordSplitter::new();
        assert_eq!(splitter.words("hello world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_try_words_matches_words() {
        let splitter = WordSplitter::new();
        for text in ["hello world", "", "  a \t b "] {
            assert_eq!(splitter.try_words(text).unwrap(), splitter.words(text));
        }
    }

    #[test]
    fn test_words_collapses_whitespace() {
        let splitter = WordSplitter::new();
        assert_eq!(
            splitter.words("  hello \t world\nagain  "),
            vec!["hello", "world", "again"]
        );
    }

    #[test]
    fn test_words_empty_text() {
        let splitter = WordSplitter::new();
        assert!(splitter.words("").is_empty());
        assert!(splitter.words("   \n\t ").is_empty());
    }

    #[test]
    fn test_words_multibyte() {
        let splitter = WordSplitter::new();
        assert_eq!(splitter.words("héllo wörld"), vec!["héllo", "wörld"]);
    }
}
