//! Single-slot result channel shared by the contestants of one race.

use crate::search::result::{SearchStatistics, Solution};
use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Message sent by the contestant that found a solution.
#[derive(Debug, Clone)]
pub struct Finish {
    pub contestant: usize,
    pub solution: Solution,
    pub statistics: SearchStatistics,
}

/// Stop flag shared by every contestant of a race.
#[derive(Debug, Default)]
pub struct RaceSignal {
    stop: AtomicBool,
}

impl RaceSignal {
    /// Check if contestants should stop searching.
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    /// Signal all contestants to stop.
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// The raw flag, polled by the search loop between draws.
    pub fn flag(&self) -> &AtomicBool {
        &self.stop
    }
}

/// Channel endpoints for a contestant.
pub struct ContestantChannels {
    pub to_coordinator: Sender<Finish>,
    pub signal: Arc<RaceSignal>,
}

impl ContestantChannels {
    /// Offer a finish to the coordinator.
    ///
    /// Returns false when the slot is already taken or the coordinator has
    /// gone away; the finish is dropped in both cases.
    pub fn offer(&self, finish: Finish) -> bool {
        match self.to_coordinator.try_send(finish) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    pub from_contestants: Receiver<Finish>,
    pub signal: Arc<RaceSignal>,
}

/// Create channels for a race with the given number of contestants.
pub fn create_channels(contestants: usize) -> (CoordinatorChannels, Vec<ContestantChannels>) {
    let signal = Arc::new(RaceSignal::default());

    // One slot: the first finish wins, later ones are refused
    let (tx, rx) = bounded(1);

    let contestant_channels = (0..contestants)
        .map(|_| ContestantChannels {
            to_coordinator: tx.clone(),
            signal: Arc::clone(&signal),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_contestants: rx,
        signal,
    };

    (coordinator, contestant_channels)
}
