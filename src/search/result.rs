//! Search result types and statistics

use crate::puzzle::Mapping;
use std::time::Duration;

/// A satisfying mapping together with the seed of the random stream that found it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub mapping: Mapping,
    pub seed: u64,
    /// Candidates evaluated by the worker before (and including) this one
    pub attempts: u64,
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\tMapping: {}", self.mapping)?;
        writeln!(f, "\tSeed: {}", self.seed)?;
        write!(f, "\tAttempts: {}", self.attempts)
    }
}

/// Statistics from one search worker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Draws taken from the digit assigner, degenerate ones included
    pub draws: u64,
    /// Draws thrown away as degenerate
    pub degenerate_draws: u64,
    /// Mappings checked by the evaluator
    pub candidates_evaluated: u64,
}

impl SearchStatistics {
    /// Fraction of draws discarded as degenerate (0.0 to 1.0)
    pub fn degenerate_rate(&self) -> f64 {
        if self.draws == 0 {
            0.0
        } else {
            self.degenerate_draws as f64 / self.draws as f64
        }
    }

    /// Get candidates evaluated per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.candidates_evaluated as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!(
            "Candidates evaluated: {}\n",
            self.candidates_evaluated
        ));
        s.push_str(&format!(
            "Throughput: {:.0} candidates/sec\n",
            self.throughput()
        ));
        if self.degenerate_draws > 0 {
            s.push_str(&format!(
                "Degenerate draws: {} ({:.2}%)\n",
                self.degenerate_draws,
                self.degenerate_rate() * 100.0
            ));
        }
        s
    }
}
