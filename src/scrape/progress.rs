//! Shared scrape progress state.

use serde::Serialize;
use std::sync::RwLock;

/// Point-in-time view of a running scrape. Serializes to a flat key-value
/// structure for status queries.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    /// Media-bearing posts processed so far. Never exceeds the run's limit.
    pub posts_processed: u64,

    /// Files downloaded so far.
    pub files_found: u64,

    /// Human-readable description of what the run is doing.
    pub current_action: String,
}

impl Default for ProgressSnapshot {
    fn default() -> Self {
        Self {
            posts_processed: 0,
            files_found: 0,
            current_action: "Initializing...".to_string(),
        }
    }
}

/// Progress cell shared between the run task and any number of readers.
///
/// Readers clone the whole snapshot and never mutate; the run task is the
/// only writer. Both counters are monotonically non-decreasing within a run.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    inner: RwLock<ProgressSnapshot>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset counters at the start of a run.
    pub fn reset(&self) {
        let mut inner = self.inner.write().unwrap();
        *inner = ProgressSnapshot {
            posts_processed: 0,
            files_found: 0,
            current_action: "Starting scrape...".to_string(),
        };
    }

    /// Read the latest snapshot.
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.inner.read().unwrap().clone()
    }

    /// Describe the run's current action.
    pub fn set_action(&self, action: impl Into<String>) {
        self.inner.write().unwrap().current_action = action.into();
    }

    /// Count one processed media-bearing post; returns the new total.
    pub fn record_post(&self) -> u64 {
        let mut inner = self.inner.write().unwrap();
        inner.posts_processed += 1;
        inner.posts_processed
    }

    /// Count one downloaded file.
    pub fn record_file(&self) {
        self.inner.write().unwrap().files_found += 1;
    }
}
