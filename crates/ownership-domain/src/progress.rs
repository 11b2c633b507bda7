//! Progress and timing side channel for domain filtering.
//!
//! Observers only see events; they cannot change which records are kept.

use ownership_types::ClassId;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// `processed * 100 / total`, floored.
    pub percent: usize,
    pub processed: usize,
    pub total: usize,
}

/// Receives filtering telemetry. Every method defaults to a no-op.
pub trait FilterObserver {
    /// A candidate took longer to filter than any candidate before it.
    fn on_longest_so_far(&mut self, _subject: &ClassId, _elapsed: Duration) {}

    /// The integer completion percentage changed.
    fn on_progress(&mut self, _progress: Progress) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl FilterObserver for NoopObserver {}

/// Logs filtering telemetry at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl FilterObserver for TracingObserver {
    fn on_longest_so_far(&mut self, subject: &ClassId, elapsed: Duration) {
        tracing::info!(
            "filtering of {} took longest so far: {}ms",
            subject,
            elapsed.as_millis()
        );
    }

    fn on_progress(&mut self, progress: Progress) {
        tracing::info!(
            "filtered {}% ({}/{} classes)",
            progress.percent,
            progress.processed,
            progress.total
        );
    }
}

/// Counters behind the observer events.
///
/// The longest latency only moves on a strictly greater value, and a percentage is
/// emitted only when it differs from the previously emitted one.
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    total: usize,
    processed: usize,
    last_percent: usize,
    longest: Duration,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            processed: 0,
            last_percent: 0,
            longest: Duration::ZERO,
        }
    }

    /// Account for one evaluated candidate.
    pub fn record(
        &mut self,
        subject: &ClassId,
        elapsed: Duration,
        observer: &mut dyn FilterObserver,
    ) {
        if elapsed > self.longest {
            self.longest = elapsed;
            observer.on_longest_so_far(subject, elapsed);
        }

        if self.total == 0 {
            return;
        }
        self.processed = (self.processed + 1).min(self.total);

        let percent = self.processed * 100 / self.total;
        if percent != self.last_percent {
            self.last_percent = percent;
            observer.on_progress(Progress {
                percent,
                processed: self.processed,
                total: self.total,
            });
        }
    }

    pub fn longest(&self) -> Duration {
        self.longest
    }

    pub fn processed(&self) -> usize {
        self.processed
    }
}
