/// Text generator — random walk over a built chain.

use rand::Rng;
use thiserror::Error;

use crate::core::chain::ChainModel;
use crate::schema::pair::PairKey;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("chain has no pairs to start from")]
    EmptyModel,
    #[error("pair {key} has no recorded successors")]
    CorruptModel { key: PairKey },
    #[error("walk did not terminate within {steps} words")]
    WalkTooLong { steps: usize },
    #[error("start pair {key} is not in the chain")]
    UnknownStart { key: PairKey },
}

/// Source of the uniform draws the walk makes.
///
/// Implemented for every [`rand::Rng`]; tests can supply a scripted chooser
/// to force a particular path through the chain.
pub trait Chooser {
    /// Pick an index in `0..len`. Never called with `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> Chooser for R {
    fn choose_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Limits applied to a single walk.
///
/// The default is unbounded: a chain from [`build_chain`](crate::core::chain::build_chain)
/// always reaches its end-marker eventually, however long the walk. A cap is
/// opt-in, for hand-built chains that may cycle forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkConfig {
    /// Maximum words emitted before failing with `WalkTooLong`.
    pub max_steps: Option<usize>,
}

impl WalkConfig {
    pub fn unbounded() -> Self {
        WalkConfig { max_steps: None }
    }

    pub fn bounded(max_steps: usize) -> Self {
        WalkConfig {
            max_steps: Some(max_steps),
        }
    }
}

/// Walks a [`ChainModel`] to produce text. Borrows the model read-only.
pub struct TextGenerator<'a> {
    model: &'a ChainModel,
    config: WalkConfig,
}

impl<'a> TextGenerator<'a> {
    pub fn new(model: &'a ChainModel) -> Self {
        TextGenerator {
            model,
            config: WalkConfig::default(),
        }
    }

    pub fn with_config(mut self, config: WalkConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate text starting from a pair drawn uniformly from the sorted
    /// key list.
    pub fn generate<C>(&self, chooser: &mut C) -> Result<String, GenerateError>
    where
        C: Chooser + ?Sized,
    {
        let keys = self.model.keys();
        if keys.is_empty() {
            return Err(GenerateError::EmptyModel);
        }
        let start = &keys[chooser.choose_index(keys.len()) % keys.len()];
        self.walk(start, chooser)
    }

    /// Generate text starting from a given pair.
    pub fn generate_from<C>(&self, start: &PairKey, chooser: &mut C) -> Result<String, GenerateError>
    where
        C: Chooser + ?Sized,
    {
        if self.model.is_empty() {
            return Err(GenerateError::EmptyModel);
        }
        if !self.model.contains(start) {
            return Err(GenerateError::UnknownStart { key: start.clone() });
        }
        self.walk(start, chooser)
    }

    /// Walk from `start` until the end-marker is drawn or the next pair is
    /// missing from the chain. The start pair itself is not emitted.
    fn walk<C>(&self, start: &PairKey, chooser: &mut C) -> Result<String, GenerateError>
    where
        C: Chooser + ?Sized,
    {
        let mut emitted: Vec<&'a str> = Vec::new();
        let mut current = start.clone();

        while let Some(successors) = self.model.successors(&current) {
            if successors.is_empty() {
                return Err(GenerateError::CorruptModel { key: current });
            }
            let pick = &successors[chooser.choose_index(successors.len()) % successors.len()];
            let Some(word) = pick.as_word() else {
                log::trace!("{current} drew end-marker");
                break;
            };

            if self.config.max_steps.is_some_and(|max| emitted.len() >= max) {
                return Err(GenerateError::WalkTooLong {
                    steps: emitted.len(),
                });
            }

            log::trace!("{current} -> {word:?}");
            emitted.push(word);
            current = current.advance(word);
        }

        log::debug!("walk from {start} emitted {} words", emitted.len());
        Ok(emitted.join(" "))
    }
}

/// Generate text from `model` with the default [`WalkConfig`].
pub fn generate_text<C>(model: &ChainModel, chooser: &mut C) -> Result<String, GenerateError>
where
    C: Chooser + ?Sized,
{
    TextGenerator::new(model).generate(chooser)
}
