//! Repeated, timed races

use crate::puzzle::Puzzle;
use crate::search::parallel::{ParallelConfig, RaceError, race};
use crate::search::{SearchConfig, Solution};
use log::debug;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Default number of races in a sampling run
pub const DEFAULT_SAMPLES: usize = 100;

/// Default number of contestants per race in a sampling run
pub const DEFAULT_CONTESTANTS: usize = 2;

/// One race outcome with the wall-clock time the race took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub solution: Solution,
    pub run_time: Duration,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tMapping: {}", self.solution.mapping)?;
        writeln!(f, "\tSeed: {}", self.solution.seed)?;
        write!(f, "\tRun Time: {:?}", self.run_time)
    }
}

/// Error raised when a race inside a sampling run fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("race {index} failed: {source}")]
    Race {
        index: usize,
        #[source]
        source: RaceError,
    },
}

/// Configuration for a sampling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of races to run
    pub samples: usize,
    /// Per-race configuration
    pub parallel: ParallelConfig,
    /// Per-worker configuration
    pub search: SearchConfig,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            parallel: ParallelConfig::default().with_contestants(DEFAULT_CONTESTANTS),
            search: SearchConfig::default(),
        }
    }
}

impl SamplerConfig {
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Race configuration for race `index`.
    ///
    /// A fixed base seed is shifted per race so that races do not replay each other.
    fn race_config(&self, index: usize) -> ParallelConfig {
        let stride = (index * self.parallel.contestants) as u64;
        let seed = self.parallel.base_seed.map(|s| s.wrapping_add(stride));
        self.parallel.clone().with_seed_option(seed)
    }
}

/// Run `config.samples` races one after another, timing each.
///
/// Samples come back in the order the races ran.
pub fn sample(puzzle: &Puzzle, config: &SamplerConfig) -> Result<Vec<Sample>, SampleError> {
    let mut samples = Vec::with_capacity(config.samples);

    for index in 0..config.samples {
        let parallel = config.race_config(index);

        let start = Instant::now();
        let outcome = race(puzzle, &config.search, &parallel)
            .map_err(|source| SampleError::Race { index, source })?;
        let run_time = start.elapsed();

        debug!(
            "Sample {}/{}: contestant {} won in {:?}",
            index + 1,
            config.samples,
            outcome.winner,
            run_time
        );

        samples.push(Sample {
            solution: outcome.solution,
            run_time,
        });
    }

    Ok(samples)
}
