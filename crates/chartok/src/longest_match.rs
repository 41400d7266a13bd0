//! # Greedy Longest-Match Tokenizer

use crate::io::{self, SIMPLE_TYPE_TAG, SimpleTokenizerFile};
use crate::tokenizer::{TextTokenizer, TokenizerStats};
use crate::types::{TokenId, TokenStr};
use crate::vocab::{TokenVocab, UNK_ID, is_special_token};
use std::fmt;
use std::path::Path;

/// A dictionary tokenizer using greedy longest-match scanning.
///
/// At each scan position the longest vocabulary-recognized substring is
/// emitted; if not even a single character matches, one `<UNK>` id is
/// emitted and the scan advances one character.
///
/// The reference scan is O(n²) in the text length; scan positions are
/// always char boundaries, so multi-byte text is handled correctly.
#[derive(Debug, Clone)]
pub struct LongestMatchTokenizer {
    vocab: TokenVocab,
}

impl LongestMatchTokenizer {
    /// Creates a tokenizer over a fixed vocabulary.
    ///
    /// [`TokenVocab`] construction guarantees `<UNK>` is present.
    pub fn new(vocab: TokenVocab) -> Self {
        Self { vocab }
    }

    /// Creates a tokenizer from `{ token -> id }` entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, TokenId)>,
        S: AsRef<str>,
    {
        Self::new(TokenVocab::from_entries(entries))
    }

    /// The tokenizer's vocabulary (read-only view).
    pub fn vocab(&self) -> &TokenVocab {
        &self.vocab
    }

    /// Produces the parallel (token, id) views of a tokenization, for
    /// diagnostic display.
    pub fn trace(
        &self,
        text: &str,
    ) -> TokenizationTrace {
        let ids = self.encode(text);
        let pieces = ids
            .iter()
            .map(|&id| TokenStr::from(self.vocab.token_of(id)))
            .collect();
        TokenizationTrace {
            text: text.to_string(),
            pieces,
            ids,
        }
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
            merge_count: 0,
            target_vocab_size: None,
        }
    }
}

impl TextTokenizer for LongestMatchTokenizer {
    fn encode(
        &self,
        text: &str,
    ) -> Vec<TokenId> {
        // Char boundary offsets, including the end of the text.
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain([text.len()])
            .collect();

        let mut ids = Vec::new();
        let mut i = 0;
        while i + 1 < bounds.len() {
            let start = bounds[i];
            let mut best: Option<(usize, TokenId)> = None;
            for j in (i + 1)..bounds.len() {
                if let Some(id) = self.vocab.lookup(&text[start..bounds[j]]) {
                    // Longer always supersedes.
                    best = Some((j, id));
                }
            }
            match best {
                Some((j, id)) => {
                    ids.push(id);
                    i = j;
                }
                None => {
                    ids.push(UNK_ID);
                    i += 1;
                }
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
        out
    }

    fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    fn save_to_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> anyhow::Result<()> {
        let file = SimpleTokenizerFile {
            vocab: self.vocab.to_entries(),
            kind: SIMPLE_TYPE_TAG.to_string(),
        };
        io::write_json(&file, path.as_ref())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let file: SimpleTokenizerFile = io::read_json(path.as_ref())?;
        io::expect_type_tag(&file.kind, SIMPLE_TYPE_TAG)?;
        Ok(Self::from_entries(file.vocab))
    }
}

/// Parallel (token, id) views of one tokenization.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizationTrace {
    /// The input text.
    pub text: String,

    /// The matched token strings, in scan order.
    pub pieces: Vec<TokenStr>,

    /// The emitted token ids, in scan order.
    pub ids: Vec<TokenId>,
}

impl fmt::Display for TokenizationTrace {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Input:  {:?}", self.text)?;
        writeln!(f, "Tokens: {:?}", self.pieces)?;
        write!(f, "IDs:    {:?}", self.ids)
    }
}
