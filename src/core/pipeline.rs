/// The generation pipeline: read → build chain → walk.
///
/// Wires the source reader, chain builder and text generator together behind
/// a single engine that owns the random source.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::chain::{build_chain, ChainError, ChainModel};
use crate::core::generator::{GenerateError, TextGenerator, WalkConfig};
use crate::core::source::{read_source, SourceError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    RonSer(#[from] ron::Error),
}

/// Engine settings, loadable from a RON file such as
/// `(seed: Some(42), max_steps: Some(500))`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub seed: Option<u64>,
    pub max_steps: Option<usize>,
}

impl EngineConfig {
    /// Load a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<EngineConfig, PipelineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a config from a RON string.
    pub fn parse_ron(input: &str) -> Result<EngineConfig, PipelineError> {
        Ok(ron::from_str(input)?)
    }
}

/// Builds text from source texts. Built via `MarkovEngine::builder()`.
pub struct MarkovEngine {
    rng: StdRng,
    walk: WalkConfig,
    generation_count: u64,
}

/// Builder for constructing a `MarkovEngine`.
#[derive(Debug, Default)]
pub struct MarkovEngineBuilder {
    seed: Option<u64>,
    walk: Option<WalkConfig>,
}

impl MarkovEngine {
    pub fn builder() -> MarkovEngineBuilder {
        MarkovEngineBuilder::default()
    }

    /// Number of texts generated so far.
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    /// Walk limits in effect.
    pub fn walk_config(&self) -> WalkConfig {
        self.walk
    }

    /// Build a chain from `text` and generate from it.
    pub fn generate_from_text(&mut self, text: &str) -> Result<String, PipelineError> {
        let model = build_chain(text)?;
        self.generate_from_model(&model)
    }

    /// Read the file at `path`, build its chain and generate from it.
    pub fn generate_from_path(&mut self, path: &Path) -> Result<String, PipelineError> {
        let text = read_source(path)?;
        self.generate_from_text(&text)
    }

    /// Generate from an already built chain.
    pub fn generate_from_model(&mut self, model: &ChainModel) -> Result<String, PipelineError> {
        let text = TextGenerator::new(model)
            .with_config(self.walk)
            .generate(&mut self.rng)?;
        self.generation_count += 1;
        Ok(text)
    }
}

impl MarkovEngineBuilder {
    /// Seed the random source for reproducible output.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn walk(mut self, walk: WalkConfig) -> Self {
        self.walk = Some(walk);
        self
    }

    /// Apply a loaded config. Values set here replace earlier builder calls
    /// only where the config provides them.
    pub fn config(mut self, config: &EngineConfig) -> Self {
        if let Some(seed) = config.seed {
            self.seed = Some(seed);
        }
        if let Some(max_steps) = config.max_steps {
            self.walk = Some(WalkConfig::bounded(max_steps));
        }
        self
    }

    pub fn build(self) -> MarkovEngine {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        MarkovEngine {
            rng,
            walk: self.walk.unwrap_or_default(),
            generation_count: 0,
        }
    }
}
