//! Named wall-clock timer
//!
//! `Timer` accumulates how long named loop events take. Measurements are
//! started with [`Timer::time`], which hands back a guard that records the
//! elapsed time when dropped, so early returns and panics still produce a
//! measurement.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::trace;

/// Collects named duration measurements
///
/// The store sits behind a mutex so guards can record from whatever thread
/// drops them. A poisoned lock is recovered rather than propagated:
/// measurements are diagnostics and must not mask the panic that poisoned
/// the lock.
#[derive(Debug)]
pub struct Timer {
    recorded: Mutex<IndexMap<String, VecDeque<Duration>>>,
    max_samples: Option<usize>,
}

impl Timer {
    /// Create a timer with unbounded per-event history
    pub fn new() -> Self {
        Self {
            recorded: Mutex::new(IndexMap::new()),
            max_samples: None,
        }
    }

    /// Create a timer keeping at most `max_samples` measurements per event
    ///
    /// Once an event is full, its oldest measurement is discarded to make
    /// room. Long runs time the same events millions of times; a bounded
    /// timer keeps the store from growing with run length.
    pub fn bounded(max_samples: usize) -> Self {
        Self {
            recorded: Mutex::new(IndexMap::new()),
            max_samples: Some(max_samples),
        }
    }

    /// Start a scoped measurement
    ///
    /// The elapsed time is recorded under `event_name` when the returned
    /// guard drops.
    pub fn time(&self, event_name: &str) -> TimerGuard<'_> {
        TimerGuard {
            timer: self,
            event_name: event_name.to_string(),
            start: Instant::now(),
        }
    }

    /// Record a single measurement under `event_name`
    pub fn record(&self, event_name: &str, elapsed: Duration) {
        if self.max_samples == Some(0) {
            return;
        }

        let mut recorded = self.recorded.lock().unwrap_or_else(|e| e.into_inner());
        let samples = recorded.entry(event_name.to_string()).or_default();
        if let Some(cap) = self.max_samples {
            if samples.len() == cap {
                samples.pop_front();
            }
        }
        samples.push_back(elapsed);

        trace!(
            target: "cadencia::timer",
            event = event_name,
            elapsed_us = elapsed.as_micros() as u64,
            "recorded measurement"
        );
    }

    /// Snapshot of every recorded measurement, keyed by event name
    ///
    /// Events appear in first-recorded order; samples within an event are
    /// oldest first.
    pub fn recorded_durations(&self) -> IndexMap<String, Vec<Duration>> {
        self.recorded
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(name, samples)| (name.clone(), samples.iter().copied().collect()))
            .collect()
    }

    /// Aggregate statistics per event
    pub fn summary(&self) -> TimerSummary {
        let recorded = self.recorded.lock().unwrap_or_else(|e| e.into_inner());
        let mut events = IndexMap::with_capacity(recorded.len());

        for (name, samples) in recorded.iter() {
            let total: Duration = samples.iter().sum();
            let mean = if samples.is_empty() {
                Duration::ZERO
            } else {
                total / samples.len() as u32
            };
            events.insert(
                name.clone(),
                EventStats {
                    count: samples.len() as u64,
                    total,
                    mean,
                    min: samples.iter().copied().min().unwrap_or_default(),
                    max: samples.iter().copied().max().unwrap_or_default(),
                },
            );
        }

        TimerSummary { events }
    }

    /// Clear every recorded measurement
    pub fn reset(&self) {
        self.recorded
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped measurement started by [`Timer::time`]
///
/// Records the elapsed time on drop.
#[derive(Debug)]
pub struct TimerGuard<'a> {
    timer: &'a Timer,
    event_name: String,
    start: Instant,
}

impl TimerGuard<'_> {
    /// Event name this guard records under
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Elapsed time so far, without finishing the measurement
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        self.timer.record(&self.event_name, self.start.elapsed());
    }
}

/// Aggregate statistics for one timed event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventStats {
    /// Number of measurements
    pub count: u64,
    /// Sum of all measurements
    pub total: Duration,
    /// Mean measurement
    pub mean: Duration,
    /// Shortest measurement
    pub min: Duration,
    /// Longest measurement
    pub max: Duration,
}

/// Per-event aggregate view over a [`Timer`]
#[derive(Debug, Clone, Default)]
pub struct TimerSummary {
    /// Statistics per event, in first-recorded order
    pub events: IndexMap<String, EventStats>,
}

impl fmt::Display for TimerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timer Summary")?;
        writeln!(f, "=============")?;

        if self.events.is_empty() {
            writeln!(f, "  (no measurements recorded)")?;
            return Ok(());
        }

        for (name, stats) in &self.events {
            writeln!(
                f,
                "  {}: count={}, total={:.2}ms, mean={:.2}ms, min={:.2}ms, max={:.2}ms",
                name,
                stats.count,
                stats.total.as_secs_f64() * 1000.0,
                stats.mean.as_secs_f64() * 1000.0,
                stats.min.as_secs_f64() * 1000.0,
                stats.max.as_secs_f64() * 1000.0
            )?;
        }

        Ok(())
    }
}
