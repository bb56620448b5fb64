//! Live progress display fed from the shared progress tracker.

use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::task::JoinHandle;

use crate::scrape::ProgressTracker;

/// How often the display re-reads the tracker.
const REFRESH_INTERVAL: Duration = Duration::from_millis(200);

/// Spinner mirroring a scrape's progress until finished.
pub struct ProgressDisplay {
    spinner: ProgressBar,
    reader: JoinHandle<()>,
}

impl ProgressDisplay {
    /// Spawn a reader task that keeps the spinner in sync with the tracker.
    ///
    /// The reader only ever takes snapshots; it never blocks or mutates the
    /// run's state.
    pub fn spawn(tracker: Arc<ProgressTracker>) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));

        let bar = spinner.clone();
        let reader = tokio::spawn(async move {
            loop {
                let snapshot = tracker.snapshot();
                bar.set_message(format!(
                    "{} ({} posts, {} files)",
                    snapshot.current_action, snapshot.posts_processed, snapshot.files_found
                ));
                tokio::time::sleep(REFRESH_INTERVAL).await;
            }
        });

        Self { spinner, reader }
    }

    /// Stop the reader and clear the spinner line.
    pub fn finish(self) {
        self.reader.abort();
        self.spinner.finish_and_clear();
    }
}
