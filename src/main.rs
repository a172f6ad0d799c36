//! Word Scramble - CLI
//!
//! Unscramble words against the clock in a TUI, or inspect the catalog.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    catalog::{WordCatalog, loader::load_from_file},
    commands::{classify_words, summarize_catalog},
    game::{GameConfig, RoundController, Session},
    output::{print_catalog_summary, print_classifications},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Unscramble the word before time runs out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seconds on the clock for each round
    #[arg(short = 't', long, global = true, default_value = "30", value_parser = parse_seconds)]
    seconds: NonZeroU32,

    /// Seed for word selection and shuffling (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Catalog file with one 'word|hint' per line (built-in list if omitted)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Show the rarity tier of one or more words
    Classify {
        /// Words to classify
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Summarize the word catalog by tier
    Catalog {
        /// List every entry, not just tier counts
        #[arg(short, long)]
        list: bool,
    },
}

/// Longest round the CLI accepts
const MAX_ROUND_SECONDS: u32 = 600;

/// Parse `--seconds`, accepting 1 through `MAX_ROUND_SECONDS`
fn parse_seconds(raw: &str) -> Result<NonZeroU32, String> {
    let seconds: u32 = raw
        .parse()
        .map_err(|e| format!("'{raw}' is not a number of seconds: {e}"))?;
    NonZeroU32::new(seconds)
        .filter(|s| s.get() <= MAX_ROUND_SECONDS)
        .ok_or_else(|| format!("round length must be between 1 and {MAX_ROUND_SECONDS} seconds"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let interactive = matches!(command, Commands::Play);

    init_logging(cli.log_file.as_deref(), interactive)?;

    let catalog = load_catalog(cli.wordlist.as_deref())?;
    info!(entries = catalog.len(), "catalog loaded");

    match command {
        Commands::Play => {
            let config = GameConfig::default().with_round_seconds(cli.seconds);
            run_play_command(catalog, config, cli.seed)
        }
        Commands::Classify { words } => run_classify_command(&words),
        Commands::Catalog { list } => {
            run_catalog_command(&catalog, list);
            Ok(())
        }
    }
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so in interactive mode events are written only
/// when a log file was given.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
    }
    Ok(())
}

/// Load the catalog from a file, or fall back to the embedded list
fn load_catalog(path: Option<&Path>) -> Result<WordCatalog> {
    match path {
        Some(path) => {
            let entries = load_from_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            Ok(WordCatalog::new(entries))
        }
        None => Ok(WordCatalog::embedded()),
    }
}

fn run_play_command(catalog: WordCatalog, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let session = Session::new(RoundController::new(catalog, config, rng));
    run_tui(App::new(session))
}

fn run_classify_command(words: &[String]) -> Result<()> {
    let results = classify_words(words).map_err(|e| anyhow::anyhow!(e))?;
    print_classifications(&results);
    Ok(())
}

fn run_catalog_command(catalog: &WordCatalog, list: bool) {
    let summary = summarize_catalog(catalog);
    print_catalog_summary(&summary, list);
}
