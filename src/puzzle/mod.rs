//! Alphametic puzzle definition
//!
//! A puzzle is an ordered list of addend words and one target word. The
//! derived letter sets drive the digit assigner: `letters` is every distinct
//! letter in first-appearance order, `leading` the letters that may never map
//! to zero.

pub mod mapping;

pub use mapping::{Mapping, MappingError};

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for building or parsing a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("puzzle needs at least one addend word")]
    NoAddends,
    #[error("empty word in puzzle")]
    EmptyWord,
    #[error("invalid character '{ch}' in word '{word}' (only ASCII letters are allowed)")]
    InvalidCharacter { word: String, ch: char },
    #[error("expected exactly one '=' in '{0}'")]
    MissingEquals(String),
}

/// An alphametic puzzle: `words[0] + words[1] + ... = target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    words: Vec<String>,
    target: String,
    letters: Vec<char>,
    leading: BTreeSet<char>,
}

impl Puzzle {
    /// Build a puzzle from addend words and a target word.
    ///
    /// Words are normalized to lowercase.
    pub fn new<S: AsRef<str>>(words: &[S], target: &str) -> Result<Self, PuzzleError> {
        if words.is_empty() {
            return Err(PuzzleError::NoAddends);
        }

        let words = words
            .iter()
            .map(|w| normalize_word(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let target = normalize_word(target)?;

        let mut letters = Vec::new();
        let mut leading = BTreeSet::new();
        for word in words.iter().chain(std::iter::once(&target)) {
            if let Some(first) = word.chars().next() {
                leading.insert(first);
            }
            for ch in word.chars() {
                if !letters.contains(&ch) {
                    letters.push(ch);
                }
            }
        }

        Ok(Self {
            words,
            target,
            letters,
            leading,
        })
    }

    /// Addend words in order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Target word
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Distinct letters in order of first appearance (addends, then target)
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letters that start a word and must not map to zero
    pub fn leading_letters(&self) -> &BTreeSet<char> {
        &self.leading
    }

    pub fn is_leading(&self, letter: char) -> bool {
        self.leading.contains(&letter)
    }

    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }
}

impl Default for Puzzle {
    /// `alas + lass + no + more = cash`
    fn default() -> Self {
        Self {
            words: ["alas", "lass", "no", "more"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            target: "cash".to_string(),
            letters: vec!['a', 'l', 's', 'n', 'o', 'm', 'r', 'e', 'c', 'h'],
            leading: ['a', 'l', 'n', 'm', 'c'].into_iter().collect(),
        }
    }
}

fn normalize_word(word: &str) -> Result<String, PuzzleError> {
    if word.is_empty() {
        return Err(PuzzleError::EmptyWord);
    }
    if let Some(ch) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(PuzzleError::InvalidCharacter {
            word: word.to_string(),
            ch,
        });
    }
    Ok(word.to_ascii_lowercase())
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    /// Parse an equation such as `"SEND + MORE = MONEY"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (lhs, rhs) = compact
            .split_once('=')
            .ok_or_else(|| PuzzleError::MissingEquals(s.to_string()))?;
        if rhs.contains('=') {
            return Err(PuzzleError::MissingEquals(s.to_string()));
        }
        if lhs.is_empty() {
            return Err(PuzzleError::NoAddends);
        }

        let words: Vec<&str> = lhs.split('+').collect();
        Puzzle::new(&words, rhs)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.words.join(" + "), self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_puzzle_matches_parsed() {
        let parsed: Puzzle = "alas + lass + no + more = cash".parse().unwrap();
        assert_eq!(parsed, Puzzle::default());
    }

    #[test]
    fn test_derived_letter_sets() {
        let puzzle = Puzzle::default();
        assert_eq!(puzzle.letter_count(), 10);
        assert_eq!(
            puzzle.leading_letters().iter().collect::<String>(),
            "aclmn"
        );
        assert!(puzzle.is_leading('c'));
        assert!(!puzzle.is_leading('s'));
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let puzzle: Puzzle = " TO+ go =OUT ".parse().unwrap();
        assert_eq!(puzzle.words(), &["to".to_string(), "go".to_string()]);
        assert_eq!(puzzle.target(), "out");
        assert_eq!(puzzle.letters(), &['t', 'o', 'g', 'u']);
        assert_eq!(puzzle.to_string(), "to + go = out");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "a+b".parse::<Puzzle>(),
            Err(PuzzleError::MissingEquals("a+b".to_string()))
        );
        assert!(matches!(
            "a=b=c".parse::<Puzzle>(),
            Err(PuzzleError::MissingEquals(_))
        ));
        assert_eq!("=abc".parse::<Puzzle>(), Err(PuzzleError::NoAddends));
        assert_eq!("a++b=c".parse::<Puzzle>(), Err(PuzzleError::EmptyWord));
        assert_eq!("a+b=".parse::<Puzzle>(), Err(PuzzleError::EmptyWord));
        assert_eq!(
            "a1+b=c".parse::<Puzzle>(),
            Err(PuzzleError::InvalidCharacter {
                word: "a1".to_string(),
                ch: '1'
            })
        );
    }

    #[test]
    fn test_new_requires_addends() {
        let empty: [&str; 0] = [];
        assert_eq!(Puzzle::new(&empty, "cash"), Err(PuzzleError::NoAddends));
    }
}
