//! # Token Vocabulary

use crate::types::{IdToTokenMap, TokenId, TokenStr, TokenToIdMap};
use crate::vocab::specials::{SPECIAL_TOKENS, UNK_ID, UNK_TOKEN};
use std::collections::BTreeMap;

/// Bijective `{ token <-> id }` vocabulary.
///
/// The reverse map is maintained alongside the forward map, and
/// [`UNK_TOKEN`] is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenVocab {
    token_to_id: TokenToIdMap,
    id_to_token: IdToTokenMap,
}

impl Default for TokenVocab {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenVocab {
    /// Creates a vocabulary containing only [`UNK_TOKEN`].
    pub fn new() -> Self {
        Self::from_entries(std::iter::empty::<(&str, TokenId)>())
    }

    /// Creates a vocabulary seeded with the four reserved special tokens.
    pub fn with_specials() -> Self {
        Self::from_entries(SPECIAL_TOKENS)
    }

    /// Builds a vocabulary from caller-supplied `{ token -> id }` entries.
    ///
    /// [`UNK_TOKEN`] is inserted at [`UNK_ID`] if absent. Binding a token
    /// or id that is already bound evicts the conflicting entry, so the
    /// mapping stays a bijection.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, TokenId)>,
        S: AsRef<str>,
    {
        let mut vocab = TokenVocab {
            token_to_id: TokenToIdMap::default(),
            id_to_token: IdToTokenMap::default(),
        };
        for (token, id) in entries {
            vocab.bind(TokenStr::from(token.as_ref()), id);
        }
        if !vocab.contains(UNK_TOKEN) {
            vocab.bind(TokenStr::from(UNK_TOKEN), UNK_ID);
        }
        vocab
    }

    fn bind(
        &mut self,
        token: TokenStr,
        id: TokenId,
    ) {
        if let Some(old_id) = self.token_to_id.remove(&token) {
            self.id_to_token.remove(&old_id);
        }
        if let Some(old_token) = self.id_to_token.remove(&id) {
            self.token_to_id.remove(&old_token);
        }
        self.id_to_token.insert(id, token.clone());
        self.token_to_id.insert(token, id);
    }

    /// The number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.token_to_id.len()
    }

    /// Returns `true` if the vocabulary contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.token_to_id.is_empty()
    }

    /// Returns `true` if the vocabulary contains `token`.
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// The id of `token`, falling back to [`UNK_ID`] if absent.
    pub fn id_of(
        &self,
        token: &str,
    ) -> TokenId {
        self.lookup(token).unwrap_or(UNK_ID)
    }

    /// The id of `token`, if present.
    pub fn lookup(
        &self,
        token: &str,
    ) -> Option<TokenId> {
        self.token_to_id.get(token).copied()
    }

    /// The token bound to `id`, falling back to [`UNK_TOKEN`] if absent.
    pub fn token_of(
        &self,
        id: TokenId,
    ) -> &str {
        self.get_token(id).map_or(UNK_TOKEN, |t| t.as_str())
    }

    /// The token bound to `id`, if present.
    pub fn get_token(
        &self,
        id: TokenId,
    ) -> Option<&TokenStr> {
        self.id_to_token.get(&id)
    }

    /// Inserts `token` with the next free id.
    ///
    /// No-op if `token` is already present; returns its id either way.
    pub fn insert(
        &mut self,
        token: &str,
    ) -> TokenId {
        if let Some(id) = self.lookup(token) {
            return id;
        }
        let mut id = self.len() as TokenId;
        while self.id_to_token.contains_key(&id) {
            id += 1;
        }
        self.bind(TokenStr::from(token), id);
        id
    }

    /// Iterates over `(token, id)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&TokenStr, TokenId)> {
        self.token_to_id.iter().map(|(t, &id)| (t, id))
    }

    /// An owned `{ token -> id }` snapshot, ordered by token.
    pub fn to_entries(&self) -> BTreeMap<String, TokenId> {
        self.iter().map(|(t, id)| (t.to_string(), id)).collect()
    }
}
