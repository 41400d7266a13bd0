//! # Common Types

use ahash::AHashMap;
use compact_str::CompactString;

/// Integer token identifier.
pub type TokenId = u32;

/// Token string type.
pub type TokenStr = CompactString;

/// An ordered pair of adjacent tokens.
pub type SymbolPair = (TokenStr, TokenStr);

/// Map of `{ token -> id }`.
pub type TokenToIdMap = AHashMap<TokenStr, TokenId>;

/// Map of `{ id -> token }`.
pub type IdToTokenMap = AHashMap<TokenId, TokenStr>;

/// Map of `{ marked word -> count }`.
pub type WordCountMap = AHashMap<TokenStr, u64>;

/// Map of `{ (left, right) -> count }`.
pub type PairCountMap = AHashMap<SymbolPair, u64>;

/// Check if a type is `Send`.
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: S) {}

/// Check if a type is `Sync`.
#[cfg(test)]
pub(crate) fn check_is_sync<S: Sync>(_: S) {}
