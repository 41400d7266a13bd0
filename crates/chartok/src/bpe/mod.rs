//! # Byte-Pair-Encoding Tokenizer
//!
//! Training learns a vocabulary and an ordered merge list from a
//! corpus; encoding replays the merge list over each marked word with
//! the same derivation primitive used during training.

pub mod merge;
pub mod pair_count;
pub mod trainer;
pub mod word_count;

pub use merge::apply_merges;
pub use trainer::{BpeTrainer, TrainedBpe};
pub use word_count::WordCounts;

use crate::WORD_BOUNDARY;
use crate::io::{self, BPE_TYPE_TAG, BpeTokenizerFile};
use crate::segment::WordSplitter;
use crate::tokenizer::{TextTokenizer, TokenizerStats};
use crate::types::{SymbolPair, TokenId, TokenStr};
use crate::validators;
use crate::vocab::{TokenVocab, UNK_ID, is_special_token};
use std::path::Path;

/// A byte-pair-encoding tokenizer.
///
/// Until [`BpeTokenizer::train`] is called the vocabulary holds only
/// the four reserved special tokens and every encode resolves to
/// `<UNK>` ids.
#[derive(Debug, Clone)]
pub struct BpeTokenizer {
    target_vocab_size: usize,
    vocab: TokenVocab,
    merges: Vec<SymbolPair>,
    splitter: WordSplitter,
}

impl BpeTokenizer {
    /// Creates an untrained tokenizer with the given target vocab size.
    ///
    /// Fails if `target_vocab_size` is outside
    /// `[MIN_VOCAB_SIZE, MAX_VOCAB_SIZE]`.
    pub fn new(target_vocab_size: usize) -> anyhow::Result<Self> {
        validators::try_vocab_size(target_vocab_size)?;
        Ok(Self {
            target_vocab_size,
            vocab: TokenVocab::with_specials(),
            merges: Vec::new(),
            splitter: WordSplitter::new(),
        })
    }

    /// Trains the tokenizer on a corpus, replacing any prior state.
    ///
    /// Fails with an input error if the corpus is empty; no state is
    /// mutated in that case.
    pub fn train<I, S>(
        &mut self,
        corpus: I,
    ) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let TrainedBpe { vocab, merges } = BpeTrainer::new(self.target_vocab_size)?.train(corpus)?;
        self.vocab = vocab;
        self.merges = merges;
        Ok(())
    }

    /// The learned vocabulary (read-only view).
    pub fn vocab(&self) -> &TokenVocab {
        &self.vocab
    }

    /// The learned merges, in learned order (read-only view).
    pub fn merges(&self) -> &[SymbolPair] {
        &self.merges
    }

    /// The configured target vocabulary size.
    pub fn target_vocab_size(&self) -> usize {
        self.target_vocab_size
    }

    /// Summary statistics.
    pub fn stats(&self) -> TokenizerStats {
        TokenizerStats {
            vocab_size: self.vocab.len(),
            special_tokens: self
                .vocab
                .iter()
                .filter(|(t, _)| is_special_token(t))
                .count(),
            merge_count: self.merges.len(),
            target_vocab_size: Some(self.target_vocab_size),
        }
    }

    fn from_parts(
        target_vocab_size: usize,
        vocab: TokenVocab,
        merges: Vec<SymbolPair>,
    ) -> anyhow::Result<Self> {
        validators::try_vocab_size(target_vocab_size)?;
        Ok(Self {
            target_vocab_size,
            vocab,
            merges,
            splitter: WordSplitter::new(),
        })
    }
}

impl TextTokenizer for BpeTokenizer {
    fn encode(
        &self,
        text: &str,
    ) -> Vec<TokenId> {
        let mut ids = Vec::new();
        for word in self.splitter.words(text) {
            let marked = word_count::mark_word(word);
            for token in apply_merges(&marked, &self.merges) {
                // Unseen characters resolve to <UNK>.
                ids.push(self.vocab.lookup(&token).unwrap_or(UNK_ID));
            }
        }
        ids
    }

    fn decode(
        &self,
        ids: &[TokenId],
    ) -> String {
        let mut out = String::new();
        for &id in ids {
            match self.vocab.get_token(id) {
                Some(token) if is_special_token(token) => {}
                Some(token) => out.push_str(token),
                None => out.push('?'),
            }
        }
        out.replace(WORD_BOUNDARY, " ").trim().to_string()
    }

    fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    fn save_to_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> anyhow::Result<()> {
        let file = BpeTokenizerFile {
            vocab: self.vocab.to_entries(),
            merges: self
                .merges
                .iter()
                .map(|(l, r)| (l.to_string(), r.to_string()))
                .collect(),
            vocab_size: self.target_vocab_size,
            kind: BPE_TYPE_TAG.to_string(),
        };
        io::write_json(&file, path.as_ref())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let file: BpeTokenizerFile = io::read_json(path.as_ref())?;
        io::expect_type_tag(&file.kind, BPE_TYPE_TAG)?;

        let vocab = TokenVocab::from_entries(file.vocab);
        let merges = file
            .merges
            .into_iter()
            .map(|(l, r)| (TokenStr::from(l), TokenStr::from(r)))
            .collect();
        Self::from_parts(file.vocab_size, vocab, merges)
    }
}
