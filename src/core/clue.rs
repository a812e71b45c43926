//! Clue calculation and representation
//!
//! A clue encodes the feedback for a guess as one marker per position:
//! - `+` — the letter is in the correct position (hit)
//! - `^` — the letter occurs elsewhere in the answer (present)
//! - `-` — the letter does not occur, or all its copies are accounted for (miss)
//!
//! The printed form is the five markers concatenated in position order, e.g.
//! `"+-^--"`.

use super::Word;
use crate::WORD_LENGTH;
use std::fmt;

/// Feedback marker for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Correct letter in the correct position
    Hit,
    /// Letter occurs in the answer at a different position
    Present,
    /// Letter does not occur in the answer
    Miss,
}

impl Marker {
    /// The wire character for this marker
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Hit => '+',
            Self::Present => '^',
            Self::Miss => '-',
        }
    }
}

/// Feedback for a full guess
///
/// A fixed-length sequence of markers, one per letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clue {
    markers: [Marker; WORD_LENGTH],
}

impl Clue {
    /// Calculate the clue when `guess` is played against `answer`
    ///
    /// Implements the Wordle duplicate-letter rule as a two-pass scan:
    /// 1. First pass: mark exact hits and consume those answer letters.
    /// 2. Second pass: mark present-but-misplaced letters from the remaining
    ///    pool; everything else is a miss.
    ///
    /// A guess carrying more copies of a letter than the answer has left gets
    /// only as many `^` marks as there are unconsumed copies; extra copies are
    /// `-` even when some copies of that letter are hits elsewhere.
    ///
    /// # Examples
    /// ```
    /// use wordle_ru::core::{Clue, Word};
    ///
    /// let guess = Word::new("столб").unwrap();
    /// let answer = Word::new("слово").unwrap();
    /// let clue = Clue::compute(&guess, &answer);
    ///
    /// // с hits, о hits, л is misplaced, т and б are absent
    /// assert_eq!(clue.to_string(), "+-+^-");
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, answer: &Word) -> Self {
        let mut markers = [Marker::Miss; WORD_LENGTH];
        let mut available = answer.char_counts();

        // First pass: exact hits consume their answer letter
        // Allow: index needed to access guess[i], answer[i], and set markers[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == answer.chars()[i] {
                markers[i] = Marker::Hit;

                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters draw from the remaining pool
        // Allow: index needed to access guess[i] and check/set markers[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if markers[i] == Marker::Miss {
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    markers[i] = Marker::Present;
                    *count -= 1;
                }
            }
        }

        Self { markers }
    }

    /// Get the per-position markers
    #[inline]
    #[must_use]
    pub const fn markers(&self) -> &[Marker; WORD_LENGTH] {
        &self.markers
    }

    /// Check whether every position is a hit (winning clue)
    #[must_use]
    pub fn is_all_hits(&self) -> bool {
        self.markers.iter().all(|&m| m == Marker::Hit)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for marker in self.markers {
            write!(f, "{}", marker.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(guess: &str, answer: &str) -> String {
        Clue::compute(&Word::new(guess).unwrap(), &Word::new(answer).unwrap()).to_string()
    }

    #[test]
    fn exact_match_is_all_hits() {
        assert_eq!(clue("слово", "слово"), "+++++");

        let word = Word::new("слово").unwrap();
        assert!(Clue::compute(&word, &word).is_all_hits());
    }

    #[test]
    fn disjoint_letters_are_all_misses() {
        let result = clue("абвгд", "ежзик");
        assert_eq!(result, "-----");
    }

    #[test]
    fn wire_format_uses_only_clue_characters() {
        for (guess, answer) in [
            ("слово", "сосна"),
            ("столб", "слово"),
            ("ааабв", "аабвг"),
            ("мороз", "мороз"),
        ] {
            let result = clue(guess, answer);
            assert_eq!(result.chars().count(), 5);
            assert!(result.chars().all(|c| matches!(c, '+' | '^' | '-')));
        }
    }

    #[test]
    fn duplicate_guess_letters_beyond_answer_count_are_misses() {
        // Answer has two а (both hit); the third а in the guess has no
        // unmatched copy left and must be a miss. б and в are misplaced.
        assert_eq!(clue("ааабв", "аабвг"), "++-^^");
    }

    #[test]
    fn present_marks_bounded_by_answer_count() {
        // Answer "сосна" has a single о; the guess "опора" carries two
        // misplaced о, of which only the first earns a present mark.
        assert_eq!(clue("опора", "сосна"), "^---+");
    }

    #[test]
    fn hit_takes_priority_over_present() {
        // The о hits at positions 2 and 4 consume both answer о, so the
        // leading copies in the guess are misses rather than presents.
        assert_eq!(clue("ооово", "слово"), "--+++");
    }

    #[test]
    fn misplaced_letter_is_present() {
        assert_eq!(clue("слово", "сосна"), "+-^--");
    }

    #[test]
    fn self_match_is_all_hits_for_repeated_letters() {
        for word in ["ааааа", "мороз", "сосна"] {
            assert_eq!(clue(word, word), "+++++");
        }
    }

    #[test]
    fn marker_wire_characters() {
        assert_eq!(Marker::Hit.as_char(), '+');
        assert_eq!(Marker::Present.as_char(), '^');
        assert_eq!(Marker::Miss.as_char(), '-');
    }

    #[test]
    fn compute_is_deterministic() {
        let guess = Word::new("слово").unwrap();
        let answer = Word::new("сосна").unwrap();

        let first = Clue::compute(&guess, &answer);
        let second = Clue::compute(&guess, &answer);
        assert_eq!(first, second);
    }
}
