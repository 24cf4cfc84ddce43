//! Random digit assignment
//!
//! Each draw pairs a shuffled copy of the puzzle's letters with a random
//! permutation of `0..N`. A leading letter that lands on zero is repaired by
//! swapping with the neighbouring permutation slot. The repair can leave two
//! letters sharing a digit (when it has to swap backwards), so every draw is
//! validated and degenerate ones are thrown away.

use crate::puzzle::{Mapping, Puzzle};
use crate::search::config::SearchConfig;
use rand::Rng;
use rand::seq::SliceRandom;

/// Draws random letter to digit mappings for one puzzle
#[derive(Debug, Clone)]
pub struct DigitAssigner<'a> {
    puzzle: &'a Puzzle,
    digit_range: usize,
}

impl<'a> DigitAssigner<'a> {
    pub fn new(puzzle: &'a Puzzle, config: &SearchConfig) -> Self {
        Self {
            puzzle,
            digit_range: config.digit_range(puzzle.letter_count()),
        }
    }

    /// Number of digit values a draw chooses from
    pub fn digit_range(&self) -> usize {
        self.digit_range
    }

    /// Make a single draw.
    ///
    /// Returns `None` for a degenerate draw: one that is not injective or that
    /// still gives a leading letter zero after repair.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Option<Mapping> {
        let mut digits: Vec<u32> = (0..self.digit_range as u32).collect();
        digits.shuffle(rng);

        let mut letters = self.puzzle.letters().to_vec();
        letters.shuffle(rng);

        let mut pairs = Vec::with_capacity(letters.len());
        for (i, &letter) in letters.iter().enumerate() {
            if self.puzzle.is_leading(letter) && digits[i] == 0 {
                let neighbour = if i + 1 < digits.len() {
                    Some(i + 1)
                } else {
                    i.checked_sub(1)
                };
                if let Some(j) = neighbour {
                    digits.swap(i, j);
                }
            }
            pairs.push((letter, digits[i]));
        }

        let mapping = Mapping::from_pairs(pairs).ok()?;
        mapping.is_valid_for(self.puzzle).then_some(mapping)
    }

    /// Draw until a valid mapping comes out.
    ///
    /// Returns the mapping and the number of degenerate draws discarded on the
    /// way. Loops forever if no valid draw is possible (e.g. a one-digit range
    /// for a leading letter).
    pub fn assign<R: Rng>(&self, rng: &mut R) -> (Mapping, u64) {
        let mut rejected = 0;
        loop {
            match self.draw(rng) {
                Some(mapping) => return (mapping, rejected),
                None => rejected += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeSet;

    #[test]
    fn test_assign_respects_invariants() {
        let puzzle = Puzzle::default();
        let config = SearchConfig::default();
        let assigner = DigitAssigner::new(&puzzle, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        assert_eq!(assigner.digit_range(), 10);

        for _ in 0..2_000 {
            let (mapping, _) = assigner.assign(&mut rng);
            assert!(mapping.is_valid_for(&puzzle));

            let digits: BTreeSet<u32> = mapping.iter().map(|(_, d)| d).collect();
            assert_eq!(digits.len(), puzzle.letter_count());
            assert!(digits.iter().all(|&d| d < 10));
        }
    }

    #[test]
    fn test_small_puzzle_uses_nine_digits() {
        let puzzle: Puzzle = "to + go = out".parse().unwrap();
        let config = SearchConfig::default();
        let assigner = DigitAssigner::new(&puzzle, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let mut seen = BTreeSet::new();
        for _ in 0..2_000 {
            let (mapping, _) = assigner.assign(&mut rng);
            seen.extend(mapping.iter().map(|(_, d)| d));
        }
        assert_eq!(seen, (0..9).collect::<BTreeSet<u32>>());
    }

    #[test]
    fn test_wide_puzzle_widens_digit_range() {
        let puzzle: Puzzle = "abcdef + ghijkl = abc".parse().unwrap();
        let config = SearchConfig::default();
        let assigner = DigitAssigner::new(&puzzle, &config);
        assert_eq!(assigner.digit_range(), 12);

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (mapping, _) = assigner.assign(&mut rng);
        assert_eq!(mapping.len(), 12);
        assert!(mapping.iter().all(|(_, d)| d < 12));
    }

    #[test]
    fn test_unrepairable_draw_is_degenerate() {
        // one digit and one leading letter: the only draw maps it to zero
        let puzzle: Puzzle = "a = a".parse().unwrap();
        let config = SearchConfig::default().with_min_digits(1);
        let assigner = DigitAssigner::new(&puzzle, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..10 {
            assert!(assigner.draw(&mut rng).is_none());
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let puzzle = Puzzle::default();
        let config = SearchConfig::default();
        let assigner = DigitAssigner::new(&puzzle, &config);

        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(assigner.assign(&mut a), assigner.assign(&mut b));
        }
    }
}
