//! Game state and move handling
//!
//! Owns the hidden answer, the attempt counter, and the guess/clue history.
//! The suggester walks the dictionary in insertion order and proposes the
//! first candidate consistent with every recorded clue.

use super::{Dictionary, GameError, Sampler};
use crate::MAX_STEPS;
use crate::core::{Clue, Word};

/// A single game against a hidden answer
///
/// Holds a shared read-only reference to the dictionary; the history and the
/// answer are owned. The sampler is consumed once, at construction, to pick
/// the answer.
#[derive(Debug)]
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    answer: Word,
    remaining_steps: usize,
    guesses: Vec<Word>,
    clues: Vec<Clue>,
}

impl<'a> Game<'a> {
    /// Start a new game with an answer sampled uniformly from the dictionary
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if the dictionary has no words.
    pub fn new<S: Sampler>(dictionary: &'a Dictionary, sampler: &mut S) -> Result<Self, GameError> {
        if dictionary.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        let answer = dictionary.words()[sampler.pick(dictionary.len())].clone();
        log::debug!("answer selected from {} candidates", dictionary.len());

        Ok(Self {
            dictionary,
            answer,
            remaining_steps: MAX_STEPS,
            guesses: Vec::new(),
            clues: Vec::new(),
        })
    }

    /// Get the number of attempts left
    #[inline]
    #[must_use]
    pub const fn remaining_steps(&self) -> usize {
        self.remaining_steps
    }

    /// Get the hidden answer
    ///
    /// Callers are expected to look only after `is_finished` returns true;
    /// the engine does not enforce this.
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Get the accepted guesses in move order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Get the clues parallel to `guesses`
    #[inline]
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Check whether the last accepted guess equals the answer
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.guesses.last() == Some(&self.answer)
    }

    /// Check whether the game is over (won, or out of attempts)
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining_steps == 0 || self.is_won()
    }

    /// Play one guess and get its clue
    ///
    /// The raw input is normalized before validation, so case, surrounding
    /// whitespace, and `ё` are accepted. On success the pair is appended to
    /// the history and one attempt is consumed. Every precondition is checked
    /// before any mutation: a rejected guess changes nothing.
    ///
    /// # Errors
    /// - `GameError::GameOver` if no attempts remain.
    /// - `GameError::InvalidWord` if the normalized input is not 5 letters.
    /// - `GameError::WordNotInDictionary` if the word is not a member.
    pub fn make_guess(&mut self, raw: &str) -> Result<Clue, GameError> {
        if self.remaining_steps == 0 {
            return Err(GameError::GameOver);
        }

        let word = Word::new(raw)?;

        if !self.dictionary.contains(&word) {
            return Err(GameError::WordNotInDictionary(word.text().to_string()));
        }

        let clue = Clue::compute(&word, &self.answer);
        log::info!(
            "guess {word} -> {clue}, {} attempts left",
            self.remaining_steps - 1
        );

        self.guesses.push(word);
        self.clues.push(clue);
        self.remaining_steps -= 1;

        Ok(clue)
    }

    /// Propose the next guess consistent with the whole history
    ///
    /// Scans the dictionary in insertion order and returns the first word
    /// that has not been guessed yet and would have produced every recorded
    /// clue had it been the answer. Returns `None` when no candidate
    /// survives. Deterministic: the same dictionary order and history always
    /// yield the same proposal.
    #[must_use]
    pub fn suggest(&self) -> Option<&'a Word> {
        let suggestion = self
            .dictionary
            .words()
            .iter()
            .find(|candidate| !self.guesses.contains(candidate) && self.matches_history(candidate));

        match suggestion {
            Some(word) => log::debug!("suggesting {word}"),
            None => log::debug!("no suggestion consistent with history"),
        }
        suggestion
    }

    /// Check that `candidate` reproduces every recorded clue when paired
    /// with its recorded guess
    fn matches_history(&self, candidate: &Word) -> bool {
        self.guesses
            .iter()
            .zip(&self.clues)
            .all(|(guess, clue)| Clue::compute(guess, candidate) == *clue)
    }
}
