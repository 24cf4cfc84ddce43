//! Randomized alphametic solver.
//!
//! Letters are assigned random distinct digits until the addends sum to the
//! target. Several guessers race in parallel; the sampler repeats the race and
//! reports how long it took.

pub mod puzzle;
pub mod sampling;
pub mod search;
