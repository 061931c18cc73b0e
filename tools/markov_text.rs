/// Markov Text — generate text from a source file's word-pair chain.
///
/// Usage: markov-text <INPUT> [--seed <n>] [--max-steps <n>] [--config <file.ron>] [--show-chain]
use clap::Parser;
use markov_text::core::chain::build_chain;
use markov_text::core::pipeline::{EngineConfig, MarkovEngine, PipelineError};
use markov_text::core::source::read_source;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "markov-text", version, about = "Generate text from a second-order Markov chain")]
struct Cli {
    /// Source text file to build the chain from
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Random seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum words to emit before giving up on a walk
    #[arg(short = 'm', long)]
    max_steps: Option<usize>,

    /// RON config file with `seed` and `max_steps`
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the chain as RON instead of generating
    #[arg(long)]
    show_chain: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, PipelineError> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load_from_ron(path)?,
        None => EngineConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.max_steps.is_some() {
        config.max_steps = cli.max_steps;
    }

    let text = read_source(&cli.input)?;
    let model = build_chain(&text)?;
    log::info!(
        "chain from '{}': {} pairs, {} transitions",
        cli.input.display(),
        model.len(),
        model.transition_count()
    );

    if cli.show_chain {
        return Ok(model.to_ron_pretty()?);
    }

    let mut engine = MarkovEngine::builder().config(&config).build();
    engine.generate_from_model(&model)
}
