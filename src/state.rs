//! Run state
//!
//! Loop-owned bookkeeping handed to framework hooks: how the run was
//! launched, what is executing right now, an optional timer for named
//! measurements, and a cooperative stop flag.

use tracing::debug;

use crate::error::Error;
use crate::phase::Phase;
use crate::timer::Timer;

/// State owned by a training-loop run
#[derive(Debug)]
pub struct RunState {
    entry_point: Phase,
    active_phase: Phase,
    timer: Option<Timer>,
    should_stop: bool,
}

impl RunState {
    /// Create run state for a loop launched as `entry_point`
    ///
    /// The active phase starts at the first phase the entry point executes:
    /// `Train` for `Fit`, otherwise the entry point itself.
    pub fn new(entry_point: Phase) -> Self {
        let active_phase = match entry_point {
            Phase::Fit => Phase::Train,
            other => other,
        };
        Self {
            entry_point,
            active_phase,
            timer: None,
            should_stop: false,
        }
    }

    /// Attach a timer; subsequent timing scopes record into it
    pub fn with_timer(mut self, timer: Timer) -> Self {
        self.timer = Some(timer);
        self
    }

    /// How the run was launched
    pub fn entry_point(&self) -> Phase {
        self.entry_point
    }

    /// Phase currently executing
    pub fn active_phase(&self) -> Phase {
        self.active_phase
    }

    /// Switch the executing phase
    ///
    /// `Fit` names a launch mode, not an executing activity, and is
    /// rejected.
    pub fn set_active_phase(&mut self, phase: Phase) -> Result<(), Error> {
        if !phase.tracks_steps() {
            return Err(Error::InvalidPhase(phase));
        }
        debug!(
            target: "cadencia::state",
            from = %self.active_phase,
            to = %phase,
            "switching active phase"
        );
        self.active_phase = phase;
        Ok(())
    }

    /// Timer attached to this run, if any
    pub fn timer(&self) -> Option<&Timer> {
        self.timer.as_ref()
    }

    /// Request the loop to stop at its next boundary
    pub fn stop(&mut self) {
        debug!(target: "cadencia::state", "stop requested");
        self.should_stop = true;
    }

    /// Whether a stop has been requested
    pub fn should_stop(&self) -> bool {
        self.should_stop
    }
}
