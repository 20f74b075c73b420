//! Collaborator interfaces for score reporting and best-score persistence.
//!
//! The engine reaches the outside world through exactly two seams: a
//! [`ScoreSink`] it notifies as the score changes, and a [`BestScoreStore`]
//! that owns the best score across games. Both take `&self` so shared
//! handles (`Arc`) work across engine instances; implementations use
//! interior mutability.

use std::sync::{Arc, Mutex};

/// Receiver for score notifications.
pub trait ScoreSink {
    /// Reports the current score. Called once per line processed during a
    /// move, so a single move produces four reports.
    fn report(&self, score: u32);

    /// Reports a new best score, called only when the store accepted one.
    ///
    /// Defaults to a no-op for embedders with no best-score display.
    fn report_best(&self, best: u32) {
        let _ = best;
    }
}

/// Persistent store for the best score across games.
///
/// `write_if_greater` is an atomic read-modify-write: two engines sharing
/// a store cannot lose an update between the read and the write.
pub trait BestScoreStore {
    /// Returns the stored best score, 0 if never written.
    fn read(&self) -> u32;

    /// Persists `candidate` and returns true iff it exceeds the stored
    /// best; otherwise leaves the store untouched and returns false.
    fn write_if_greater(&self, candidate: u32) -> bool;
}

impl<T: ScoreSink + ?Sized> ScoreSink for Arc<T> {
    fn report(&self, score: u32) {
        (**self).report(score);
    }

    fn report_best(&self, best: u32) {
        (**self).report_best(best);
    }
}

impl<T: BestScoreStore + ?Sized> BestScoreStore for Arc<T> {
    fn read(&self) -> u32 {
        (**self).read()
    }

    fn write_if_greater(&self, candidate: u32) -> bool {
        (**self).write_if_greater(candidate)
    }
}

/// Sink that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScoreSink;

impl ScoreSink for NullScoreSink {
    fn report(&self, _score: u32) {}
}

/// Sink that records every report, for tests and simple embedders.
#[derive(Debug, Default)]
pub struct RecordingScoreSink {
    reports: Mutex<Vec<u32>>,
    best_reports: Mutex<Vec<u32>>,
}

impl RecordingScoreSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every score reported so far, in order.
    pub fn reports(&self) -> Vec<u32> {
        self.reports
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Returns every best-score notification so far, in order.
    pub fn best_reports(&self) -> Vec<u32> {
        self.best_reports
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ScoreSink for RecordingScoreSink {
    fn report(&self, score: u32) {
        self.reports
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(score);
    }

    fn report_best(&self, best: u32) {
        self.best_reports
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(best);
    }
}

/// In-memory best-score store backed by a mutex.
///
/// The mutex makes `write_if_greater` atomic when the store is shared
/// between engines through an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryBestScore {
    best: Mutex<u32>,
}

impl InMemoryBestScore {
    /// Creates a store with no recorded best (reads as 0).
    pub fn new() -> Self {
        Self::default()
    }
}

impl BestScoreStore for InMemoryBestScore {
    fn read(&self) -> u32 {
        *self.best.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn write_if_greater(&self, candidate: u32) -> bool {
        let mut best = self.best.lock().unwrap_or_else(|e| e.into_inner());
        if candidate > *best {
            *best = candidate;
            true
        } else {
            false
        }
    }
}
