//! Randomized search for alphametic solutions
//!
//! The search is plain guess-and-check, built bottom up:
//! - `assign`: draw a random letter to digit mapping honouring the leading-zero rule
//! - `evaluate`: check whether a mapping makes the sum come out right
//! - `worker`: repeat the two until a mapping satisfies the puzzle
//! - `parallel`: race several workers and keep the first to finish

pub mod assign;
pub mod config;
pub mod evaluate;
pub mod parallel;
pub mod result;
pub mod worker;

pub use assign::DigitAssigner;
pub use config::{LeadingZeroPolicy, SearchConfig};
pub use evaluate::{Evaluation, evaluate, is_satisfied};
pub use parallel::{ParallelConfig, RaceError, RaceOutcome, race};
pub use result::{SearchStatistics, Solution};
pub use worker::SearchWorker;
