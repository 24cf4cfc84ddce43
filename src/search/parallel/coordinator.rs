//! Race coordinator: spawn contestants, keep the first finish.

use crate::puzzle::Puzzle;
use crate::search::config::SearchConfig;
use crate::search::parallel::channel::{
    ContestantChannels, CoordinatorChannels, Finish, create_channels,
};
use crate::search::parallel::config::ParallelConfig;
use crate::search::result::{SearchStatistics, Solution};
use crate::search::worker::SearchWorker;
use crossbeam_channel::RecvTimeoutError;
use log::{debug, trace, warn};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Result of a race.
#[derive(Debug, Clone)]
pub struct RaceOutcome {
    /// Index of the contestant that finished first.
    pub winner: usize,
    /// The winning solution.
    pub solution: Solution,
    /// Search statistics of the winner.
    pub statistics: SearchStatistics,
    /// Wall-clock time from the start of the race to the first finish.
    pub elapsed: Duration,
}

/// Reasons a race ends without a winner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaceError {
    #[error("no contestant finished within {0:?}")]
    TimedOut(Duration),
    #[error("every contestant exited without a solution")]
    Disconnected,
}

/// Race `parallel_config.contestants` independent searches and return the first to finish.
///
/// Blocks until a contestant delivers a solution. With no timeout configured
/// this never returns for an unsatisfiable puzzle. When `cancel_losers` is
/// off the losing threads are detached and keep searching until they find
/// their own solution, which nobody reads.
pub fn race(
    puzzle: &Puzzle,
    search_config: &SearchConfig,
    parallel_config: &ParallelConfig,
) -> Result<RaceOutcome, RaceError> {
    let start_time = Instant::now();
    let clock = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let (coordinator_channels, contestant_channels) =
        create_channels(parallel_config.contestants);

    let puzzle = Arc::new(puzzle.clone());

    // Every contestant is started before the coordinator waits
    let handles: Vec<JoinHandle<()>> = contestant_channels
        .into_iter()
        .enumerate()
        .map(|(index, channels)| {
            let puzzle = Arc::clone(&puzzle);
            let config = search_config.clone();
            let seed = parallel_config.contestant_seed(index, clock);

            std::thread::spawn(move || run_contestant(index, seed, &puzzle, config, channels))
        })
        .collect();

    let result = await_winner(&coordinator_channels, parallel_config.timeout);
    let elapsed = start_time.elapsed();

    // A disconnected channel means every contestant has already exited
    if parallel_config.cancel_losers || matches!(result, Err(RaceError::Disconnected)) {
        coordinator_channels.signal.signal_stop();
        join_contestants(handles);
    }

    let finish = result?;
    debug!(
        "Race won by contestant {} (seed {}, {} attempts) in {:?}",
        finish.contestant, finish.solution.seed, finish.solution.attempts, elapsed
    );

    Ok(RaceOutcome {
        winner: finish.contestant,
        solution: finish.solution,
        statistics: finish.statistics,
        elapsed,
    })
}

/// Join contestant threads, logging any that panicked. Returns the panic count.
fn join_contestants(handles: Vec<JoinHandle<()>>) -> usize {
    let mut panicked = 0;
    for (index, handle) in handles.into_iter().enumerate() {
        if handle.join().is_err() {
            warn!("Contestant {} panicked", index);
            panicked += 1;
        }
    }
    panicked
}

/// Block until the first finish arrives (or the timeout expires).
fn await_winner(
    channels: &CoordinatorChannels,
    timeout: Option<Duration>,
) -> Result<Finish, RaceError> {
    match timeout {
        Some(limit) => match channels.from_contestants.recv_timeout(limit) {
            Ok(finish) => Ok(finish),
            Err(RecvTimeoutError::Timeout) => Err(RaceError::TimedOut(limit)),
            Err(RecvTimeoutError::Disconnected) => Err(RaceError::Disconnected),
        },
        None => channels
            .from_contestants
            .recv()
            .map_err(|_| RaceError::Disconnected),
    }
}

/// Contestant thread body.
fn run_contestant(
    index: usize,
    seed: u64,
    puzzle: &Puzzle,
    config: SearchConfig,
    channels: ContestantChannels,
) {
    let mut worker = SearchWorker::new(seed, config);

    match worker.search_until(puzzle, channels.signal.flag()) {
        Some(solution) => {
            let finish = Finish {
                contestant: index,
                solution,
                statistics: worker.statistics().clone(),
            };
            if !channels.offer(finish) {
                trace!("Contestant {} finished after the race was decided", index);
            }
        }
        None => trace!(
            "Contestant {} stopped after {} candidates",
            index,
            worker.statistics().candidates_evaluated
        ),
    }
}
