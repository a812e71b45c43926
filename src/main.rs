//! Russian Wordle - CLI
//!
//! Interactive terminal game over a Russian five-letter dictionary, with a
//! history-consistent computer move on empty input.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

use wordle_ru::commands::{run_check, run_play};
use wordle_ru::game::{SeededSampler, ThreadSampler};
use wordle_ru::wordlists::load_from_file;

#[derive(Parser)]
#[command(
    name = "wordle_ru",
    about = "Terminal Wordle over a Russian five-letter dictionary",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the dictionary file, one word per line
    #[arg(short, long, global = true, default_value = "data/words_ru.txt")]
    dictionary: PathBuf,

    /// Seed for reproducible answer selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Path to the debug log file
    #[arg(long, global = true, default_value = "wordle.log")]
    log_file: PathBuf,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Play an interactive game (default)
    Play,

    /// Validate a dictionary file and report its size
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Check => run_check(&cli.dictionary),
    }
}

/// Route all log output to the configured file
///
/// The sink is owned here; library code only emits through the facade.
fn init_logging(path: &Path) -> Result<()> {
    let sink = File::create(path)
        .with_context(|| format!("cannot create log file at {}", path.display()))?;

    WriteLogger::init(LevelFilter::Debug, Config::default(), sink)
        .context("logger already initialized")?;
    Ok(())
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let dictionary = load_from_file(&cli.dictionary)
        .with_context(|| format!("cannot load dictionary from {}", cli.dictionary.display()))?;

    match cli.seed {
        Some(seed) => run_play(&dictionary, &mut SeededSampler::new(seed)),
        None => run_play(&dictionary, &mut ThreadSampler),
    }
}
