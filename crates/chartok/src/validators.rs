//! Validators for tokenizer configuration options.

use crate::{MAX_VOCAB_SIZE, MIN_VOCAB_SIZE};
use fancy_regex::Regex;

/// Validates and returns a BPE target vocab size, ensuring it falls in
/// the supported `[MIN_VOCAB_SIZE, MAX_VOCAB_SIZE]` range.
pub fn try_vocab_size(vocab_size: usize) -> anyhow::Result<usize> {
    if !(MIN_VOCAB_SIZE..=MAX_VOCAB_SIZE).contains(&vocab_size) {
        Err(anyhow::anyhow!(
            "vocab_size ({vocab_size}) must be between {MIN_VOCAB_SIZE} and {MAX_VOCAB_SIZE}"
        ))
    } else {
        Ok(vocab_size)
    }
}

/// Validates and compiles a word-split regex pattern.
pub fn try_pattern(pattern: &str) -> anyhow::Result<Regex> {
    Regex::new(pattern)
        .map_err(|_| anyhow::anyhow!("regex pattern compilation failed: {pattern}"))
}

/// Compiles a word-split pattern, panicking if it fails to compile.
///
/// Intended for the crate's own known-good patterns.
pub fn expect_pattern<S: AsRef<str>>(pattern: S) -> Regex {
    try_pattern(pattern.as_ref()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_vocab_size_bounds() {
        assert!(try_vocab_size(99).is_err());
        assert_eq!(try_vocab_size(100).unwrap(), 100);
        assert_eq!(try_vocab_size(1000).unwrap(), 1000);
        assert_eq!(try_vocab_size(50_000).unwrap(), 50_000);
        assert!(try_vocab_size(50_001).is_err());
        assert!(try_vocab_size(0).is_err());
    }

    #[test]
    fn test_try_pattern() {
        assert!(try_pattern(r"\S+").is_ok());
        assert!(try_pattern(r"(").is_err());
    }

    #[test]
    #[should_panic(expected = "regex pattern compilation failed")]
    fn test_expect_pattern_bad() {
        let _ = expect_pattern(r"(");
    }
}
