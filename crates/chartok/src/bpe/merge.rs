//! # Merge Replay
//!
//! A merge rule is an ordered `(left, right)` pair of token strings;
//! wherever `left` is immediately followed by `right`, both are
//! replaced by their concatenation. The merge list is the canonical
//! derivation history of every multi-character token, and must be
//! replayed in learned order.

use crate::types::{SymbolPair, TokenStr};
use compact_str::format_compact;

/// Derives a word's current token sequence by replaying `merges` in
/// learned order over its character sequence.
///
/// Full re-derivation, shared by training and encoding so both observe
/// identical token sequences.
pub fn apply_merges(
    word: &str,
    merges: &[SymbolPair],
) -> Vec<TokenStr> {
    let mut tokens: Vec<TokenStr> = word.chars().map(|c| format_compact!("{c}")).collect();

    for (left, right) in merges {
        if tokens.len() < 2 {
            break;
        }
        let mut next = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            if i + 1 < tokens.len() && tokens[i] == *left && tokens[i + 1] == *right {
                next.push(concat_pair(left, right));
                i += 2;
            } else {
                next.push(tokens[i].clone());
                i += 1;
            }
        }
        tokens = next;
    }

    tokens
}

/// Concatenates a merge pair into its replacement token.
pub fn concat_pair(
    left: &str,
    right: &str,
) -> TokenStr {
    format_compact!("{left}{right}")
}
