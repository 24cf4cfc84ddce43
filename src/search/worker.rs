//! Guess-and-check search worker
//!
//! A worker owns one `ChaCha8Rng` stream derived from its seed and keeps
//! drawing mappings until one satisfies the puzzle. There is no bound on the
//! number of draws: on an unsatisfiable puzzle [`SearchWorker::search`] never
//! returns. [`SearchWorker::search_until`] adds a stop flag that is checked
//! between draws.

use crate::puzzle::{Mapping, Puzzle};
use crate::search::assign::DigitAssigner;
use crate::search::config::SearchConfig;
use crate::search::evaluate::is_satisfied;
use crate::search::result::{SearchStatistics, Solution};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Randomized search over digit assignments
pub struct SearchWorker {
    seed: u64,
    config: SearchConfig,
    statistics: SearchStatistics,
}

impl SearchWorker {
    pub fn new(seed: u64, config: SearchConfig) -> Self {
        Self {
            seed,
            config,
            statistics: SearchStatistics::default(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Statistics from the most recent search
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Reset the search state for a new search
    pub fn reset(&mut self) {
        self.statistics = SearchStatistics::default();
    }

    /// Search until a satisfying mapping is found.
    ///
    /// Never returns for a puzzle without a solution.
    pub fn search(&mut self, puzzle: &Puzzle) -> Solution {
        self.reset();
        let start_time = Instant::now();
        let assigner = DigitAssigner::new(puzzle, &self.config);
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        loop {
            if let Some(mapping) = self.try_candidate(puzzle, &assigner, &mut rng) {
                self.statistics.elapsed_time = start_time.elapsed();
                return self.solution(mapping);
            }
        }
    }

    /// Search until a satisfying mapping is found or `stop` is raised.
    pub fn search_until(&mut self, puzzle: &Puzzle, stop: &AtomicBool) -> Option<Solution> {
        self.reset();
        let start_time = Instant::now();
        let assigner = DigitAssigner::new(puzzle, &self.config);
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let found = loop {
            if stop.load(Ordering::Relaxed) {
                break None;
            }
            if let Some(mapping) = self.try_candidate(puzzle, &assigner, &mut rng) {
                break Some(mapping);
            }
        };

        self.statistics.elapsed_time = start_time.elapsed();
        found.map(|mapping| self.solution(mapping))
    }

    /// One draw plus evaluation; returns the mapping if it satisfies the puzzle
    fn try_candidate<R: Rng>(
        &mut self,
        puzzle: &Puzzle,
        assigner: &DigitAssigner<'_>,
        rng: &mut R,
    ) -> Option<Mapping> {
        self.statistics.draws += 1;
        let Some(mapping) = assigner.draw(rng) else {
            self.statistics.degenerate_draws += 1;
            return None;
        };

        self.statistics.candidates_evaluated += 1;
        is_satisfied(puzzle, &mapping, self.config.leading_zero).then_some(mapping)
    }

    fn solution(&self, mapping: Mapping) -> Solution {
        Solution {
            mapping,
            seed: self.seed,
            attempts: self.statistics.candidates_evaluated,
        }
    }
}
