//! Unit progress lookup
//!
//! A unit is the user-supplied object a training loop drives. The loop only
//! needs one thing from it here: how many steps each phase has completed.

use crate::error::Error;
use crate::phase::Phase;

/// Per-phase step counters exposed by a training unit
///
/// The framework reads these counters; it never writes them.
/// Implementations typically delegate to one
/// [`Progress`](crate::Progress) per phase.
pub trait UnitProgress {
    /// Steps completed in the train phase
    fn train_steps_completed(&self) -> u64;

    /// Steps completed in the evaluate phase
    fn eval_steps_completed(&self) -> u64;

    /// Steps completed in the predict phase
    fn predict_steps_completed(&self) -> u64;
}

/// Current step count of `unit` for `phase`
///
/// Fails when `phase` does not identify a single step counter, which means
/// it only fails for `Fit`. The usual way to hit that is passing a run's
/// entry point where its active phase belongs.
pub fn current_step(unit: &impl UnitProgress, phase: Phase) -> Result<u64, Error> {
    match phase {
        Phase::Train => Ok(unit.train_steps_completed()),
        Phase::Evaluate => Ok(unit.eval_steps_completed()),
        Phase::Predict => Ok(unit.predict_steps_completed()),
        other => Err(Error::InvalidPhase(other)),
    }
}
