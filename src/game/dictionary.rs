//! Game dictionary
//!
//! An ordered, deduplicated collection of playable words. Iteration order is
//! first-occurrence order from the source lines; the suggester's determinism
//! contract depends on it, so it is part of this type's API rather than an
//! accident of storage.

use rustc_hash::FxHashSet;

use super::GameError;
use crate::core::Word;

/// The set of playable words
///
/// Construction normalizes every line, keeps only 5-letter results, and drops
/// duplicates preserving the first occurrence. Membership is answered by a
/// hash set kept alongside the order-preserving sequence.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw lines
    ///
    /// Lines that do not normalize to exactly 5 letters (including blank
    /// lines) are skipped; repeated words keep their first position.
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if no admissible word remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_ru::game::Dictionary;
    ///
    /// let dictionary = Dictionary::from_lines(["Слово", "слово", "шофёр"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for line in lines {
            let Ok(word) = Word::new(line.as_ref()) else {
                continue;
            };
            if index.insert(word.text().to_string()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        log::info!("dictionary ready: {} words", words.len());
        Ok(Self { words, index })
    }

    /// Get the words in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check membership of an already-normalized word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.text())
    }

    /// Get the number of playable words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary has no words
    ///
    /// Unreachable through `from_lines`, which rejects an empty result.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_and_dedups_preserving_order() {
        let dictionary =
            Dictionary::from_lines(["Слово", "слово", "шофёр", "ШОФер", "миР"]).unwrap();

        let words: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(words, ["слово", "шофер"]);
    }

    #[test]
    fn short_words_are_excluded() {
        let dictionary = Dictionary::from_lines(["мир", "слово", "да"]).unwrap();
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.words()[0].text(), "слово");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dictionary = Dictionary::from_lines(["", "   ", "слово", "\t"]).unwrap();
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let dictionary = Dictionary::from_lines(["сосна", "слово", "столб"]).unwrap();

        let words: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(words, ["сосна", "слово", "столб"]);
    }

    #[test]
    fn every_word_is_its_own_normal_form() {
        use crate::core::normalize;

        let dictionary = Dictionary::from_lines(["СЛОВО", "шофёр", "Мороз"]).unwrap();
        for word in dictionary.words() {
            assert_eq!(normalize(word.text()), word.text());
            assert_eq!(word.chars().len(), 5);
        }
    }

    #[test]
    fn contains_is_case_and_yo_insensitive_via_word() {
        let dictionary = Dictionary::from_lines(["шофёр"]).unwrap();

        assert!(dictionary.contains(&Word::new("ШОФЕР").unwrap()));
        assert!(dictionary.contains(&Word::new("шофёр").unwrap()));
        assert!(!dictionary.contains(&Word::new("слово").unwrap()));
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(
            Dictionary::from_lines(Vec::<String>::new()).unwrap_err(),
            GameError::EmptyDictionary
        );
    }

    #[test]
    fn input_with_no_admissible_words_fails() {
        assert_eq!(
            Dictionary::from_lines(["мир", "да", ""]).unwrap_err(),
            GameError::EmptyDictionary
        );
    }
}
