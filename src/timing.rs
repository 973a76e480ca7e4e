//! Combined timing scope
//!
//! `timing_scope` is what loop internals wrap each operation in: one call
//! that starts a named timer measurement (when the run carries a timer) and
//! opens a profiler span (always). Both sides close when the scope drops,
//! on every exit path.

use crate::profiler::{record_scope, RecordScope};
use crate::state::RunState;
use crate::timer::TimerGuard;

/// Scope opened by [`timing_scope`]
///
/// Fields drop in declaration order: the profiler scope exits before the
/// timer guard records, reversing acquisition order.
#[derive(Debug)]
pub struct TimingScope<'a> {
    profile: RecordScope,
    timer: Option<TimerGuard<'a>>,
}

impl<'a> TimingScope<'a> {
    /// The timer measurement, when the run state carries a timer
    pub fn timer_guard(&self) -> Option<&TimerGuard<'a>> {
        self.timer.as_ref()
    }

    /// The profiler scope, always present
    pub fn profile_scope(&self) -> &RecordScope {
        &self.profile
    }
}

/// Measure and annotate one loop operation until the returned scope drops
///
/// The timer side is skipped when `state` has no timer attached; the
/// profiler span is opened unconditionally. The timer is started before the
/// profiler span opens, so its measurement covers the whole annotated
/// region. A panic inside the scope closes both sides before propagating.
pub fn timing_scope<'a>(state: &'a RunState, event_name: &str) -> TimingScope<'a> {
    let timer = state.timer().map(|timer| timer.time(event_name));
    let profile = record_scope(event_name);
    TimingScope { profile, timer }
}
