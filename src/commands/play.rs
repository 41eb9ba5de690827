//! Line-based interactive play
//!
//! Each line is either a guess or a `:command`.

use crate::core::Language;
use crate::game::{Game, Outcome};
use crate::output::{print_board, print_hint, print_keyboard, print_outcome, print_stats};
use crate::stats::KeyValueStore;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Guess(String),
    Hint,
    GiveUp,
    NewGame,
    Stats,
    Language(String),
    Help,
    Quit,
}

impl PlayCommand {
    /// Parse a line; anything not starting with ':' is a guess
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let Some(command) = line.strip_prefix(':') else {
            return Some(Self::Guess(line.to_string()));
        };

        let mut parts = command.split_whitespace();
        let command = match parts.next()?.to_lowercase().as_str() {
            "hint" | "h" => Self::Hint,
            "giveup" | "give-up" | "g" => Self::GiveUp,
            "new" | "n" => Self::NewGame,
            "stats" | "s" => Self::Stats,
            "lang" | "l" => Self::Language(parts.next()?.to_string()),
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Help,
        };
        Some(command)
    }
}

fn print_help() {
    println!("Type a word and press Enter to guess.");
    println!("Commands: :hint, :giveup, :new, :stats, :lang <en|de>, :quit\n");
}

/// Run the interactive loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if terminal I/O fails, if a new game cannot draw a target,
/// or if the language preference cannot be saved.
pub fn run_play<S: KeyValueStore, R: Rng>(game: &mut Game<S, R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║               W O R D L E            ║");
    println!("╚══════════════════════════════════════╝\n");
    print_help();
    announce(game);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", ">".bright_cyan());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        let Some(command) = PlayCommand::parse(&line) else {
            continue;
        };

        match command {
            PlayCommand::Guess(word) => guess(game, &word),
            PlayCommand::Hint => match game.request_hint() {
                Ok(Some(hint)) => print_hint(hint),
                Ok(None) => println!("The game is over. Type :new to play again."),
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            PlayCommand::GiveUp => {
                if let Some(outcome) = game.give_up() {
                    print_outcome(outcome, game.session());
                    print_stats(game.language(), &game.stats(), None);
                }
            }
            PlayCommand::NewGame => {
                game.new_game()?;
                announce(game);
            }
            PlayCommand::Stats => print_stats(game.language(), &game.stats(), None),
            PlayCommand::Language(code) => match code.parse::<Language>() {
                Ok(language) => match game.set_language(language) {
                    Ok(()) => announce(game),
                    Err(e) => println!("{}", e.to_string().yellow()),
                },
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            PlayCommand::Help => print_help(),
            PlayCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn announce<S: KeyValueStore, R: Rng>(game: &Game<S, R>) {
    let session = game.session();
    println!(
        "New {} game: {} letters, {} guesses.",
        game.language(),
        session.word_length(),
        session.max_guesses()
    );
}

/// Type a whole word through the per-key interface and submit it
fn guess<S: KeyValueStore, R: Rng>(game: &mut Game<S, R>, word: &str) {
    if game.session().is_over() {
        println!("The game is over. Type :new to play again.");
        return;
    }
    if word.chars().count() > game.session().word_length() {
        println!("{}", "Too many letters".yellow());
        return;
    }

    while game.delete_letter() {}
    for key in word.chars() {
        game.append_letter(key);
    }

    match game.submit() {
        Ok(Some(submission)) => {
            print_board(game.session());
            print_keyboard(game.language(), game.session().keyboard());

            if let Some(outcome) = submission.outcome {
                print_outcome(outcome, game.session());
                let highlight = match outcome {
                    Outcome::Won { guesses } => Some(guesses),
                    Outcome::Lost => None,
                };
                print_stats(game.language(), &game.stats(), highlight);
            }
        }
        Ok(None) => {}
        Err(e) => println!("{}", e.to_string().yellow()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_guess() {
        assert_eq!(
            PlayCommand::parse("  Crane \n"),
            Some(PlayCommand::Guess("Crane".to_string()))
        );
    }

    #[test]
    fn parse_commands() {
        assert_eq!(PlayCommand::parse(":hint"), Some(PlayCommand::Hint));
        assert_eq!(PlayCommand::parse(":GIVEUP"), Some(PlayCommand::GiveUp));
        assert_eq!(PlayCommand::parse(":n"), Some(PlayCommand::NewGame));
        assert_eq!(PlayCommand::parse(":stats"), Some(PlayCommand::Stats));
        assert_eq!(PlayCommand::parse(":q"), Some(PlayCommand::Quit));
        assert_eq!(
            PlayCommand::parse(":lang de"),
            Some(PlayCommand::Language("de".to_string()))
        );
        assert_eq!(PlayCommand::parse(":what"), Some(PlayCommand::Help));
    }

    #[test]
    fn parse_blank_and_incomplete() {
        assert_eq!(PlayCommand::parse("   "), None);
        assert_eq!(PlayCommand::parse(":"), None);
        assert_eq!(PlayCommand::parse(":lang"), None);
    }
}
