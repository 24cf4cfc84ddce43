//! Configuration for racing contestants in parallel.

use std::time::Duration;

/// Configuration for one race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Number of contestant threads to spawn.
    pub contestants: usize,
    /// Base random seed (contestants get seed + index). None derives seeds from the clock.
    pub base_seed: Option<u64>,
    /// Give up on a race after this long. None waits forever.
    pub timeout: Option<Duration>,
    /// Tell losing contestants to stop once a winner is in.
    pub cancel_losers: bool,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            contestants: num_cpus::get(),
            base_seed: None,
            timeout: None,
            cancel_losers: true,
        }
    }
}

impl ParallelConfig {
    /// Create a new parallel config with the specified number of contestants.
    pub fn with_contestants(mut self, contestants: usize) -> Self {
        self.contestants = contestants.max(1);
        self
    }

    /// Set the base random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    /// Set the base random seed from an Option.
    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.base_seed = seed;
        self
    }

    /// Set the race timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the race timeout from an Option.
    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable stopping the losers of a race.
    pub fn with_cancellation(mut self, cancel_losers: bool) -> Self {
        self.cancel_losers = cancel_losers;
        self
    }

    /// Seed for contestant `index`.
    ///
    /// With a base seed this is `base + index`; otherwise `clock * (index + 1)`
    /// so contestants started at the same instant still diverge.
    pub fn contestant_seed(&self, index: usize, clock: u64) -> u64 {
        match self.base_seed {
            Some(base) => base.wrapping_add(index as u64),
            None => clock.wrapping_mul(index as u64 + 1),
        }
    }
}
