//! Wordle Game - CLI
//!
//! Play a Wordle-style game in the terminal, inspect statistics, or check feedback rules.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{check_guess, run_play},
    core::Language,
    game::{Game, GameConfig},
    output::{formatters::feedback_row, print_stats},
    stats::{FileStore, StatsStore},
    wordlists::{WordRepository, loader::load_repository},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle-style word guessing game with hints and per-language statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language: en or de (default: last used, then en)
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Directory where statistics and the language preference are stored
    #[arg(long, global = true, default_value = ".wordle")]
    stats_dir: PathBuf,

    /// Directory with <lang>/answers.txt and <lang>/valid.txt replacing the built-in lists
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for reproducible word and hint selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Show statistics
    Stats {
        /// Show every language instead of only the active one
        #[arg(short, long)]
        all: bool,
    },

    /// Show the feedback for a guess against a target
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn load_words(dir: Option<&Path>) -> Result<WordRepository> {
    match dir {
        Some(dir) => load_repository(dir)
            .with_context(|| format!("failed to load word lists from {}", dir.display())),
        None => Ok(WordRepository::embedded()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let language = cli
        .lang
        .as_deref()
        .map(str::parse::<Language>)
        .transpose()?;

    let config = GameConfig::default();
    let store = FileStore::open(&cli.stats_dir)
        .with_context(|| format!("failed to open {}", cli.stats_dir.display()))?;
    let stats = StatsStore::new(store, config.max_guesses);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let words = load_words(cli.words.as_deref())?;
            let rng = cli
                .seed
                .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            let mut game = Game::new(words, stats, rng, config, language)?;
            run_play(&mut game)
        }
        Commands::Stats { all } => {
            if all {
                for lang in Language::ALL {
                    print_stats(lang, &stats.load(lang), None);
                }
            } else {
                let lang = language
                    .or_else(|| stats.load_language())
                    .unwrap_or_default();
                print_stats(lang, &stats.load(lang), None);
            }
            Ok(())
        }
        Commands::Check { guess, target } => {
            let result = check_guess(&guess, &target, language.unwrap_or_default())
                .map_err(|e| anyhow::anyhow!(e))?;
            println!(
                "{}  {}",
                feedback_row(&result.guess, &result.feedback),
                result.feedback
            );
            Ok(())
        }
    }
}
