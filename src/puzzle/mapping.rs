//! Letter to digit assignments

use crate::puzzle::Puzzle;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

/// Error returned when a set of pairs is not a bijection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("letter '{0}' is assigned more than once")]
    DuplicateLetter(char),
    #[error("digit {digit} is shared by '{first}' and '{second}'")]
    SharedDigit { digit: u32, first: char, second: char },
}

/// An injective map from letters to digits.
///
/// Digits are plain integers: when a puzzle has more than ten letters the
/// range widens past 9 and a "digit" renders as several decimal characters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mapping {
    digits: BTreeMap<char, u32>,
}

impl Mapping {
    /// Build a mapping, rejecting repeated letters and shared digits.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (char, u32)>,
    {
        let mut digits = BTreeMap::new();
        let mut owners: BTreeMap<u32, char> = BTreeMap::new();

        for (letter, digit) in pairs {
            if digits.insert(letter, digit).is_some() {
                return Err(MappingError::DuplicateLetter(letter));
            }
            if let Some(&first) = owners.get(&digit) {
                return Err(MappingError::SharedDigit {
                    digit,
                    first,
                    second: letter,
                });
            }
            owners.insert(digit, letter);
        }

        Ok(Self { digits })
    }

    /// Digit assigned to `letter`
    pub fn digit(&self, letter: char) -> Option<u32> {
        self.digits.get(&letter).copied()
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Iterate over `(letter, digit)` pairs in letter order
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.digits.iter().map(|(&l, &d)| (l, d))
    }

    /// Concatenate the decimal renderings of each letter's digit.
    ///
    /// Returns `None` if the word uses a letter the mapping does not cover.
    pub fn numeral(&self, word: &str) -> Option<String> {
        let mut numeral = String::with_capacity(word.len());
        for ch in word.chars() {
            numeral.push_str(&self.digit(ch)?.to_string());
        }
        Some(numeral)
    }

    /// Check that the mapping covers exactly the puzzle's letters and that no
    /// leading letter maps to zero.
    pub fn is_valid_for(&self, puzzle: &Puzzle) -> bool {
        let expected: BTreeSet<char> = puzzle.letters().iter().copied().collect();
        self.digits.len() == expected.len()
            && self.digits.keys().all(|l| expected.contains(l))
            && puzzle
                .leading_letters()
                .iter()
                .all(|l| self.digit(*l).is_some_and(|d| d != 0))
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (letter, digit)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", letter, digit)?;
        }
        write!(f, "}}")
    }
}
