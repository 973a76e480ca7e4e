//! Training-loop cadence utilities
//!
//! Building blocks for instrumenting a train/evaluate/predict loop: the
//! [`Phase`] flag, per-phase [`Progress`] counters, a named wall-clock
//! [`Timer`], profiler span scopes, and the combined [`timing_scope`] that
//! loop internals wrap each operation in.
//!
//! ```
//! use cadencia::{timing_scope, Phase, RunState, Timer};
//!
//! let state = RunState::new(Phase::Train).with_timer(Timer::new());
//! {
//!     let _scope = timing_scope(&state, "train_step");
//!     // one training step runs here
//! }
//!
//! let recorded = state.timer().unwrap().recorded_durations();
//! assert_eq!(recorded["train_step"].len(), 1);
//! ```

pub mod error;
pub mod phase;
pub mod profiler;
pub mod progress;
pub mod state;
pub mod timer;
pub mod timing;
pub mod unit;

// Re-export key types for convenience
pub use error::Error;
pub use phase::Phase;
pub use profiler::{record_scope, RecordScope, PROFILER_TARGET};
pub use progress::Progress;
pub use state::RunState;
pub use timer::{EventStats, Timer, TimerGuard, TimerSummary};
pub use timing::{timing_scope, TimingScope};
pub use unit::{current_step, UnitProgress};
