//! Per-phase progress counters
//!
//! Each step-tracked phase of a unit owns one `Progress` value. Counters only
//! move forward; an epoch boundary resets the in-epoch step count while the
//! totals keep growing.

use serde::{Deserialize, Serialize};

/// Monotonic progress counters for one phase of a unit
///
/// Fields are private so the counters can only advance through
/// [`increment_step`](Progress::increment_step) and
/// [`increment_epoch`](Progress::increment_epoch).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    num_epochs_completed: u64,
    num_steps_completed: u64,
    num_steps_completed_in_epoch: u64,
}

impl Progress {
    /// Create counters starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of epochs completed so far
    pub fn num_epochs_completed(&self) -> u64 {
        self.num_epochs_completed
    }

    /// Total number of steps completed so far
    pub fn num_steps_completed(&self) -> u64 {
        self.num_steps_completed
    }

    /// Steps completed within the current epoch
    pub fn num_steps_completed_in_epoch(&self) -> u64 {
        self.num_steps_completed_in_epoch
    }

    /// Record one completed step
    pub fn increment_step(&mut self) {
        self.num_steps_completed += 1;
        self.num_steps_completed_in_epoch += 1;
    }

    /// Record one completed epoch and reset the in-epoch step count
    pub fn increment_epoch(&mut self) {
        self.num_epochs_completed += 1;
        self.num_steps_completed_in_epoch = 0;
    }
}
