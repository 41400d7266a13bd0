//! # Tokenizer Persistence
//!
//! Tokenizers persist as one JSON object per file, carrying a `"type"`
//! tag naming the tokenizer kind. Loading into the wrong kind fails
//! fast with a format error.

use crate::types::TokenId;
use anyhow::{Context, bail};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Type tag recorded for [`crate::LongestMatchTokenizer`] files.
pub const SIMPLE_TYPE_TAG: &str = "SimpleTokenizer";

/// Type tag recorded for [`crate::BpeTokenizer`] files.
pub const BPE_TYPE_TAG: &str = "BPETokenizer";

/// File form of a dictionary tokenizer.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SimpleTokenizerFile {
    pub(crate) vocab: BTreeMap<String, TokenId>,
    #[serde(rename = "type")]
    pub(crate) kind: String,
}

/// File form of a BPE tokenizer.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct BpeTokenizerFile {
    pub(crate) vocab: BTreeMap<String, TokenId>,
    pub(crate) merges: Vec<(String, String)>,
    pub(crate) vocab_size: usize,
    #[serde(rename = "type")]
    pub(crate) kind: String,
}

/// Writes `value` as pretty-printed JSON to `path`.
pub(crate) fn write_json<T: Serialize>(
    value: &T,
    path: &Path,
) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Reads a JSON value from `path`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("malformed tokenizer file {}", path.display()))
}

/// Checks a loaded type tag against the expected tokenizer kind.
pub(crate) fn expect_type_tag(
    found: &str,
    expected: &str,
) -> anyhow::Result<()> {
    if found != expected {
        bail!("expected type tag {expected:?}, found {found:?}");
    }
    Ok(())
}
