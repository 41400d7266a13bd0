//! # Tokenizer Capability Trait

use crate::types::TokenId;
use std::path::Path;

/// Common capability interface over the tokenizer variants.
///
/// Encoding never fails: text the vocabulary cannot represent resolves
/// to the reserved `<UNK>` id, and decoding an unrecognized id emits a
/// literal `?`.
pub trait TextTokenizer {
    /// Encodes text into a sequence of token ids.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<TokenId>;

    /// Decodes a sequence of token ids back into text.
    ///
    /// The four reserved special tokens are omitted from the output.
    fn decode(
        &self,
        ids: &[TokenId],
    ) -> String;

    /// The number of tokens in the vocabulary.
    fn vocab_size(&self) -> usize;

    /// Saves the tokenizer to a type-tagged JSON file.
    fn save_to_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> anyhow::Result<()>;

    /// Loads a tokenizer of this kind from a type-tagged JSON file.
    ///
    /// Fails with a format error if the file's type tag names a
    /// different tokenizer kind; no partial state is applied.
    fn load_from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self>
    where
        Self: Sized;
}

/// Summary statistics for a tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerStats {
    /// The number of tokens in the vocabulary.
    pub vocab_size: usize,

    /// The number of reserved special tokens present.
    pub special_tokens: usize,

    /// The number of learned merges; zero for dictionary tokenizers.
    pub merge_count: usize,

    /// The configured target vocabulary size, if any.
    pub target_vocab_size: Option<usize>,
}
