//! Parallel racing of independent search workers.
//!
//! # Architecture
//!
//! A race consists of:
//! - A **coordinator** that spawns one thread per contestant and waits for the first finish
//! - **Contestants**, each a [`SearchWorker`](crate::search::SearchWorker) with its own seed
//! - A **single-slot channel**: the first finish fills it, later ones are refused
//! - A shared **stop flag** raised once the race is decided
//!
//! # Example
//!
//! ```no_run
//! use alphametic_race::puzzle::Puzzle;
//! use alphametic_race::search::SearchConfig;
//! use alphametic_race::search::parallel::{ParallelConfig, race};
//!
//! let puzzle = Puzzle::default();
//! let config = ParallelConfig::default().with_contestants(4);
//! let outcome = race(&puzzle, &SearchConfig::default(), &config).unwrap();
//! println!("{}", outcome.solution.mapping);
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;

pub use config::ParallelConfig;
pub use coordinator::{RaceError, RaceOutcome, race};
