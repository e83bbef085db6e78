use std::fmt;
use std::time::Duration;

use tracing::info;

/// One progress observation from the scheduler
///
/// Advisory only: progress lines are not part of the correctness contract,
/// but lines emitted before a failure should still reach the caller to aid
/// diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Records finalized so far
    pub processed: usize,
    /// Total records in the run
    pub total: usize,
    /// Current per-record sample size
    pub sample_size: usize,
    /// Estimated remaining wall-clock time, extrapolated from the last
    /// reporting window
    pub estimated_remaining: Duration,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}, sampling {}, estimated remaining time: {:.1} sec",
            self.processed,
            self.total,
            self.sample_size,
            self.estimated_remaining.as_secs_f64()
        )
    }
}

/// Sink for progress observations, injected by the caller
pub trait ProgressSink {
    fn report(&mut self, progress: &Progress);
}

/// Forwards progress observations to the `tracing` log stream
#[derive(Debug, Default)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn report(&mut self, progress: &Progress) {
        info!("{}", progress);
    }
}

/// Collects progress lines in memory so a caller can hand them back to a
/// human-facing channel after the run
#[derive(Debug, Default)]
pub struct VecSink {
    pub messages: Vec<String>,
}

impl VecSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for VecSink {
    fn report(&mut self, progress: &Progress) {
        self.messages.push(progress.to_string());
    }
}
