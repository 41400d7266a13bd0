//! # chartok
//!
//! Reference character-level tokenizers, converting text to integer
//! token-id sequences and back.
//!
//! Two strategies are provided behind the [`TextTokenizer`] trait:
//!
//! - [`LongestMatchTokenizer`]: greedy longest-match against a fixed
//!   `{token -> id}` vocabulary.
//! - [`BpeTokenizer`]: byte-pair encoding; learns a vocabulary and an
//!   ordered merge list from a corpus, and replays the merge list at
//!   encode time.
//!
//! # Training Example
//!
//! ```
//! use chartok::{BpeTokenizer, TextTokenizer};
//!
//! let mut tokenizer = BpeTokenizer::new(200)?;
//! tokenizer.train(["hello world", "hello there", "world peace"])?;
//!
//! let ids = tokenizer.encode("hello world");
//! assert_eq!(tokenizer.decode(&ids), "hello world");
//! # Ok::<(), anyhow::Error>(())
//! ```
#![warn(missing_docs, unused)]

pub mod bpe;
pub mod io;
pub mod longest_match;
pub mod segment;
pub mod tokenizer;
pub mod types;
pub mod validators;
pub mod vocab;

pub use bpe::BpeTokenizer;
pub use longest_match::LongestMatchTokenizer;
pub use tokenizer::{TextTokenizer, TokenizerStats};
pub use vocab::TokenVocab;

/// Word-boundary marker prepended to each whitespace-delimited word
/// before BPE tokenization.
pub const WORD_BOUNDARY: char = '▁';

/// Regex pattern for splitting text into words.
pub const WORD_PATTERN: &str = r"\S+";

/// Default target vocabulary size for BPE training.
pub const DEFAULT_VOCAB_SIZE: usize = 1000;

/// Minimum supported BPE target vocabulary size.
pub const MIN_VOCAB_SIZE: usize = 100;

/// Maximum supported BPE target vocabulary size.
pub const MAX_VOCAB_SIZE: usize = 50_000;

/// Default value for parallel pair counting; based on the `rayon` feature.
#[cfg(feature = "rayon")]
pub const DEFAULT_PARALLEL: bool = true;
/// Default value for parallel pair counting; based on the `rayon` feature.
#[cfg(not(feature = "rayon"))]
pub const DEFAULT_PARALLEL: bool = false;
