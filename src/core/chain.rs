/// Chain builder — turns a source text into a second-order Markov chain.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::schema::pair::{PairKey, Successor, Token};

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("source text has {tokens} token(s); at least 2 are needed to form a pair")]
    EmptySource { tokens: usize },
}

/// A built chain: every consecutive word pair of the source mapped to the
/// successors observed after it.
///
/// Successor lists keep duplicates, so a continuation seen three times is
/// three times as likely to be drawn. The model is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ChainModel {
    transitions: FxHashMap<PairKey, Vec<Successor>>,
    /// All keys, sorted and unique.
    keys: Vec<PairKey>,
}

impl ChainModel {
    /// Assemble a model from explicit entries. Entries sharing a key are
    /// concatenated in the order given.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (PairKey, Vec<Successor>)>,
    {
        let mut transitions: FxHashMap<PairKey, Vec<Successor>> = FxHashMap::default();
        for (key, successors) in entries {
            transitions.entry(key).or_default().extend(successors);
        }
        Self::from_transitions(transitions)
    }

    fn from_transitions(transitions: FxHashMap<PairKey, Vec<Successor>>) -> Self {
        let mut keys: Vec<PairKey> = transitions.keys().cloned().collect();
        keys.sort_unstable();
        ChainModel { transitions, keys }
    }

    /// Number of distinct pair keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Distinct keys in sorted order.
    pub fn keys(&self) -> &[PairKey] {
        &self.keys
    }

    pub fn contains(&self, key: &PairKey) -> bool {
        self.transitions.contains_key(key)
    }

    pub fn successors(&self, key: &PairKey) -> Option<&[Successor]> {
        self.transitions.get(key).map(Vec::as_slice)
    }

    /// Total recorded successors across all keys, duplicates included.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(Vec::len).sum()
    }

    /// Entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, &[Successor])> + '_ {
        self.keys.iter().filter_map(move |key| {
            self.transitions
                .get(key)
                .map(|successors| (key, successors.as_slice()))
        })
    }

    /// Render the chain as pretty RON, keys sorted, for inspection.
    pub fn to_ron_pretty(&self) -> Result<String, ron::Error> {
        let ordered: BTreeMap<&PairKey, &[Successor]> = self.iter().collect();
        ron::ser::to_string_pretty(&ordered, ron::ser::PrettyConfig::default())
    }
}

/// Split text into tokens on whitespace. No case folding or punctuation
/// handling: `"Sam-I-am!"` stays one token.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Build the chain for `text`.
///
/// Every pair `(tokens[i], tokens[i+1])` becomes a key; its successor list
/// receives `tokens[i+2]`, or [`Successor::End`] for the final pair. Repeated
/// pairs accumulate successors rather than overwrite them.
pub fn build_chain(text: &str) -> Result<ChainModel, ChainError> {
    let tokens = tokenize(text);
    if tokens.len() < 2 {
        return Err(ChainError::EmptySource {
            tokens: tokens.len(),
        });
    }

    let mut transitions: FxHashMap<PairKey, Vec<Successor>> = FxHashMap::default();
    for (i, window) in tokens.windows(2).enumerate() {
        let key = PairKey::new(window[0].clone(), window[1].clone());
        let next = tokens
            .get(i + 2)
            .map_or(Successor::End, |word| Successor::word(word.clone()));
        transitions.entry(key).or_default().push(next);
    }

    let model = ChainModel::from_transitions(transitions);
    log::debug!(
        "built chain: {} tokens, {} distinct pairs, {} transitions",
        tokens.len(),
        model.len(),
        model.transition_count()
    );
    Ok(model)
}
