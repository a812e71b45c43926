//! Interactive game mode
//!
//! Line-oriented prompt loop: the player types a word, or presses Enter on an
//! empty line to let the computer play the first dictionary word consistent
//! with the clues so far.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use crate::core::{Clue, Marker};
use crate::game::{Dictionary, Game, GameError, Sampler};
use crate::{MAX_STEPS, WORD_LENGTH};

/// Run one interactive game to completion
///
/// # Errors
///
/// Returns an error if the dictionary is empty or on an I/O error reading
/// user input. Rejected guesses are reported and retried without consuming
/// an attempt.
pub fn run_play<S: Sampler>(dictionary: &Dictionary, sampler: &mut S) -> Result<()> {
    let mut game = Game::new(dictionary, sampler)?;

    println!("\nGuess the {WORD_LENGTH}-letter word. You have {MAX_STEPS} attempts.");
    println!("Press Enter on an empty line to let the computer move.\n");

    while !game.is_finished() {
        let prompt = format!("Attempts left: {}. Your word: ", game.remaining_steps());
        let input = read_line(&prompt)?;

        if input.is_empty() {
            if !play_suggestion(&mut game) {
                break;
            }
        } else {
            play_word(&mut game, &input);
        }
    }

    print_result(&game);
    Ok(())
}

/// Let the computer take the turn
///
/// Returns false when no candidate is consistent with the history and the
/// round has to end.
fn play_suggestion(game: &mut Game<'_>) -> bool {
    let Some(suggestion) = game.suggest() else {
        println!("No word in the dictionary is consistent with the clues so far.");
        return false;
    };

    let word = suggestion.text().to_string();
    println!("Suggestion (computer move): {word}");
    play_word(game, &word);
    true
}

/// Feed one word into the game and print the outcome
fn play_word(game: &mut Game<'_>, word: &str) {
    match game.make_guess(word) {
        Ok(clue) => {
            println!("{word}");
            println!("{}", render_clue(clue));
        }
        Err(err @ (GameError::InvalidWord(_) | GameError::WordNotInDictionary(_))) => {
            log::warn!("rejected guess: {err}");
            println!("{err}");
        }
        Err(err) => {
            // The loop stops at is_finished, so GameOver is out of reach here
            log::error!("unexpected engine error: {err}");
            println!("{err}");
        }
    }
}

/// Render a clue with terminal colors, one character per position
fn render_clue(clue: Clue) -> String {
    clue.markers()
        .iter()
        .map(|&marker| {
            let ch = marker.as_char().to_string();
            match marker {
                Marker::Hit => ch.green().bold().to_string(),
                Marker::Present => ch.yellow().to_string(),
                Marker::Miss => ch.dimmed().to_string(),
            }
        })
        .collect()
}

/// Print the finished game: the move history and the win or loss message
fn print_result(game: &Game<'_>) {
    if !game.guesses().is_empty() {
        println!("\nYour game:");
        for (i, (word, clue)) in game.guesses().iter().zip(game.clues()).enumerate() {
            println!("  {}. {word} {}", i + 1, render_clue(*clue));
        }
        println!();
    }

    if game.is_won() {
        println!(
            "{} {}",
            "Congratulations! You guessed the word:".bright_green().bold(),
            game.answer()
        );
    } else {
        println!("Out of attempts. The hidden word was: {}", game.answer());
    }
}

/// Read one line from standard input, trimmed
fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
