//! # BPE Trainer

use crate::bpe::merge::concat_pair;
use crate::bpe::pair_count::count_pairs;
use crate::bpe::word_count::WordCounts;
use crate::segment::WordSplitter;
use crate::types::SymbolPair;
use crate::validators;
use crate::vocab::TokenVocab;
use anyhow::bail;
use core::cmp::Ordering;
use std::collections::BTreeSet;

/// A candidate pair for one training iteration.
///
/// Max-first by count; ties resolve to the lexicographically smallest
/// pair, so selection is deterministic regardless of map iteration
/// order.
#[derive(Debug, Eq, PartialEq)]
pub struct MergeCandidate {
    /// Aggregate frequency of this pair across the corpus.
    pub count: u64,

    /// The pair to merge.
    pub pair: SymbolPair,
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MergeCandidate {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

/// The artifacts of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedBpe {
    /// The learned vocabulary.
    pub vocab: TokenVocab,

    /// The learned merges, in learned order.
    pub merges: Vec<SymbolPair>,
}

/// Drives the iterative merge-learning loop.
#[derive(Debug, Clone)]
pub struct BpeTrainer {
    target_vocab_size: usize,
    splitter: WordSplitter,
}

impl BpeTrainer {
    /// Creates a trainer with the given target vocab size.
    ///
    /// Fails if `target_vocab_size` is outside the supported range.
    pub fn new(target_vocab_size: usize) -> anyhow::Result<Self> {
        validators::try_vocab_size(target_vocab_size)?;
        Ok(Self {
            target_vocab_size,
            splitter: WordSplitter::new(),
        })
    }

    /// The configured target vocabulary size.
    pub fn target_vocab_size(&self) -> usize {
        self.target_vocab_size
    }

    /// Learns a vocabulary and merge list from a corpus.
    ///
    /// Fails with an input error if the corpus contains no documents.
    /// Training may stop below the target size once no adjacent pair
    /// remains to merge.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, corpus)))]
    pub fn train<I, S>(
        &self,
        corpus: I,
    ) -> anyhow::Result<TrainedBpe>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let corpus: Vec<S> = corpus.into_iter().collect();
        if corpus.is_empty() {
            bail!("cannot train on an empty corpus");
        }

        log::info!(
            "Starting BPE training on {} documents: target vocab size {}",
            corpus.len(),
            self.target_vocab_size
        );

        let words = WordCounts::from_corpus(&self.splitter, corpus.iter().map(AsRef::as_ref))?;
        log::info!("Counted {} unique words", words.len());

        let mut vocab = TokenVocab::with_specials();

        // Seed with every distinct character, in lexicographic order so
        // initial ids are reproducible across runs.
        let chars: BTreeSet<char> = words.iter().flat_map(|(word, _)| word.chars()).collect();
        let mut buf = [0u8; 4];
        for c in chars {
            vocab.insert(c.encode_utf8(&mut buf));
        }
        log::info!("Character-level vocab size: {}", vocab.len());

        let mut merges: Vec<SymbolPair> = Vec::new();

        while vocab.len() < self.target_vocab_size {
            let pair_counts = count_pairs(&words, &merges);

            let Some(best) = pair_counts
                .into_iter()
                .map(|(pair, count)| MergeCandidate { count, pair })
                .max()
            else {
                // No more pairs to merge.
                break;
            };

            let (left, right) = best.pair;
            vocab.insert(&concat_pair(&left, &right));
            merges.push((left, right));

            if vocab.len() % 100 == 0 {
                log::info!("Vocab size: {} / {}", vocab.len(), self.target_vocab_size);
            }
        }

        log::info!(
            "Finished training: {} merges learned, final vocab size {}",
            merges.len(),
            vocab.len()
        );

        Ok(TrainedBpe { vocab, merges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenStr;
    use crate::vocab::SPECIAL_TOKENS;

    fn pair(
        left: &str,
        right: &str,
    ) -> SymbolPair {
        (TokenStr::from(left), TokenStr::from(right))
    }

    #[test]
    fn test_new_validates_target() {
        assert!(BpeTrainer::new(99).is_err());
        assert!(BpeTrainer::new(100).is_ok());
    }

    #[test]
    fn test_empty_corpus_is_an_input_error() {
        let trainer = BpeTrainer::new(100).unwrap();
        let err = trainer.train(Vec::<&str>::new()).unwrap_err();
        assert!(err.to_string().contains("empty corpus"));
    }

    #[test]
    fn test_whitespace_corpus_trains_to_specials_only() {
        let trainer = BpeTrainer::new(100).unwrap();
        let trained = trainer.train(["   ", "\t\n"]).unwrap();
        assert_eq!(trained.vocab.len(), 4);
        assert!(trained.merges.is_empty());
    }

    #[test]
    fn test_training_scenario() {
        let trainer = BpeTrainer::new(100).unwrap();
        let trained = trainer
            .train(["hello world", "hello there", "world peace"])
            .unwrap();

        assert!(trained.vocab.len() <= 100);
        assert!(!trained.merges.is_empty());

        for &(token, id) in &SPECIAL_TOKENS {
            assert_eq!(trained.vocab.lookup(token), Some(id));
        }
    }

    #[test]
    fn test_merge_count_accounts_for_vocab_growth() {
        let trainer = BpeTrainer::new(100).unwrap();
        let corpus = ["hello world", "hello there", "world peace"];
        let trained = trainer.train(corpus).unwrap();

        let chars: BTreeSet<char> = corpus
            .iter()
            .flat_map(|text| text.split_whitespace())
            .flat_map(|word| crate::bpe::word_count::mark_word(word).chars().collect::<Vec<_>>())
            .collect();

        assert_eq!(
            trained.vocab.len(),
            SPECIAL_TOKENS.len() + chars.len() + trained.merges.len()
        );
    }

    #[test]
    fn test_training_is_deterministic() {
        let corpus = [
            "the quick brown fox jumps over the lazy dog",
            "the quick brown fox",
            "lazy dogs sleep all day",
            "a quick brown dog",
        ];

        let a = BpeTrainer::new(120).unwrap().train(corpus).unwrap();
        let b = BpeTrainer::new(120).unwrap().train(corpus).unwrap();

        assert_eq!(a.merges, b.merges);
        assert_eq!(a.vocab, b.vocab);
    }

    #[test]
    fn test_vocab_never_exceeds_target() {
        let trainer = BpeTrainer::new(100).unwrap();
        let trained = trainer
            .train(["many many words in a long sentence of words and more words"])
            .unwrap();
        assert!(trained.vocab.len() <= 100);
    }

    #[test]
    fn test_first_merge_is_the_most_frequent_pair() {
        // (▁, a) and (a, b) tie at 4; (a, b) is lexicographically
        // smaller since '▁' sorts above ASCII letters.
        let trainer = BpeTrainer::new(100).unwrap();
        let trained = trainer.train(["ab ab ab ab xy"]).unwrap();
        assert_eq!(trained.merges[0], pair("a", "b"));
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        // Every adjacency occurs exactly once; the smallest pair wins.
        let candidates = [
            MergeCandidate {
                count: 1,
                pair: pair("b", "c"),
            },
            MergeCandidate {
                count: 1,
                pair: pair("a", "b"),
            },
            MergeCandidate {
                count: 2,
                pair: pair("z", "z"),
            },
        ];

        let best = candidates.iter().max().unwrap();
        assert_eq!(best.pair, pair("z", "z"));

        let tied = candidates[..2].iter().max().unwrap();
        assert_eq!(tied.pair, pair("a", "b"));
    }

    #[test]
    fn test_merge_candidate_ordering() {
        let high = MergeCandidate {
            count: 5,
            pair: pair("z", "z"),
        };
        let low = MergeCandidate {
            count: 1,
            pair: pair("a", "a"),
        };
        assert!(high > low);

        let small_pair = MergeCandidate {
            count: 1,
            pair: pair("a", "b"),
        };
        let large_pair = MergeCandidate {
            count: 1,
            pair: pair("b", "a"),
        };
        // Equal counts order the smaller pair higher.
        assert!(small_pair > large_pair);
    }
}
