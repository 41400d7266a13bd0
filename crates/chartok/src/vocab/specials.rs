//! # Reserved Special Tokens

use crate::types::TokenId;

/// Unknown-token string.
pub const UNK_TOKEN: &str = "<UNK>";

/// Unknown-token id.
pub const UNK_ID: TokenId = 0;

/// Padding-token string.
pub const PAD_TOKEN: &str = "<PAD>";

/// Padding-token id.
pub const PAD_ID: TokenId = 1;

/// Beginning-of-sequence token string.
pub const BOS_TOKEN: &str = "<BOS>";

/// Beginning-of-sequence token id.
pub const BOS_ID: TokenId = 2;

/// End-of-sequence token string.
pub const EOS_TOKEN: &str = "<EOS>";

/// End-of-sequence token id.
pub const EOS_ID: TokenId = 3;

/// The four reserved special tokens, in id order.
pub const SPECIAL_TOKENS: [(&str, TokenId); 4] = [
    (UNK_TOKEN, UNK_ID),
    (PAD_TOKEN, PAD_ID),
    (BOS_TOKEN, BOS_ID),
    (EOS_TOKEN, EOS_ID),
];

/// Returns `true` if `token` is one of the four reserved special tokens.
pub fn is_special_token(token: &str) -> bool {
    SPECIAL_TOKENS.iter().any(|&(t, _)| t == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_ids_are_contiguous() {
        for (i, &(_, id)) in SPECIAL_TOKENS.iter().enumerate() {
            assert_eq!(id, i as TokenId);
        }
    }

    #[test]
    fn test_is_special_token() {
        assert!(is_special_token(UNK_TOKEN));
        assert!(is_special_token(PAD_TOKEN));
        assert!(is_special_token(BOS_TOKEN));
        assert!(is_special_token(EOS_TOKEN));

        assert!(!is_special_token("hello"));
        assert!(!is_special_token("<unk>"));
        assert!(!is_special_token(""));
    }
}
