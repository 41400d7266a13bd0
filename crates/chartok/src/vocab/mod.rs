//! # Vocabulary

pub mod specials;
pub mod token_vocab;

pub use specials::{
    BOS_ID, BOS_TOKEN, EOS_ID, EOS_TOKEN, PAD_ID, PAD_TOKEN, SPECIAL_TOKENS, UNK_ID, UNK_TOKEN,
    is_special_token,
};
pub use token_vocab::TokenVocab;
