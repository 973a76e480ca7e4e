//! Integration tests driving cadencia the way a training loop would
//!
//! These tests exercise the public API end to end:
//! - Phase switching across a fit run
//! - Combined timing scopes around every step
//! - Step-count lookup against a unit's progress counters
//! - Profiler span observation through a tracing subscriber

use std::fmt;
use std::sync::{Arc, Mutex};

use cadencia::{
    current_step, timing_scope, Phase, Progress, RunState, Timer, UnitProgress, PROFILER_TARGET,
};
use tracing::field::{Field, Visit};
use tracing::span;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

// ============================================================================
// Support Types

/// Minimal unit tracking one `Progress` per phase
#[derive(Default)]
struct LoopUnit {
    train: Progress,
    eval: Progress,
    predict: Progress,
}

impl UnitProgress for LoopUnit {
    fn train_steps_completed(&self) -> u64 {
        self.train.num_steps_completed()
    }

    fn eval_steps_completed(&self) -> u64 {
        self.eval.num_steps_completed()
    }

    fn predict_steps_completed(&self) -> u64 {
        self.predict.num_steps_completed()
    }
}

/// Collects the `event` field of every profiler span the subscriber sees
#[derive(Clone, Default)]
struct EventRecorder {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventRecorder {
    fn count(&self, event: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.as_str() == event)
            .count()
    }
}

struct EventVisitor {
    event: Option<String>,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.event = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "event" {
            self.event = Some(format!("{value:?}"));
        }
    }
}

impl<S: tracing::Subscriber> Layer<S> for EventRecorder {
    fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        if attrs.metadata().target() != PROFILER_TARGET {
            return;
        }
        let mut visitor = EventVisitor { event: None };
        attrs.record(&mut visitor);
        if let Some(event) = visitor.event {
            self.events.lock().unwrap().push(event);
        }
    }
}

// ============================================================================
// Fit Run Scenario Tests

#[test]
fn test_fit_run_records_phases_steps_and_timings() {
    let recorder = EventRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());

    let mut state = RunState::new(Phase::Fit).with_timer(Timer::new());
    let mut unit = LoopUnit::default();

    tracing::subscriber::with_default(subscriber, || {
        for _ in 0..2 {
            state.set_active_phase(Phase::Train).unwrap();
            for _ in 0..3 {
                let _scope = timing_scope(&state, "train_step");
                unit.train.increment_step();
            }
            unit.train.increment_epoch();

            state.set_active_phase(Phase::Evaluate).unwrap();
            for _ in 0..2 {
                let _scope = timing_scope(&state, "eval_step");
                unit.eval.increment_step();
            }
            unit.eval.increment_epoch();
        }
    });

    // Step counters match what the loop drove
    assert_eq!(current_step(&unit, Phase::Train).unwrap(), 6);
    assert_eq!(current_step(&unit, Phase::Evaluate).unwrap(), 4);
    assert_eq!(current_step(&unit, Phase::Predict).unwrap(), 0);
    assert_eq!(unit.train.num_epochs_completed(), 2);

    // The entry point itself has no step counter
    let err = current_step(&unit, state.entry_point()).unwrap_err();
    assert!(err.to_string().contains("fit"));

    // Timer saw every scope
    let summary = state.timer().unwrap().summary();
    assert_eq!(summary.events["train_step"].count, 6);
    assert_eq!(summary.events["eval_step"].count, 4);

    // Profiler saw every scope under the dedicated target
    assert_eq!(recorder.count("train_step"), 6);
    assert_eq!(recorder.count("eval_step"), 4);
}

#[test]
fn test_timerless_run_still_profiles() {
    let recorder = EventRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());

    let state = RunState::new(Phase::Predict);
    let mut unit = LoopUnit::default();

    tracing::subscriber::with_default(subscriber, || {
        for _ in 0..4 {
            let _scope = timing_scope(&state, "predict_step");
            unit.predict.increment_step();
        }
    });

    assert!(state.timer().is_none());
    assert_eq!(current_step(&unit, Phase::Predict).unwrap(), 4);
    assert_eq!(recorder.count("predict_step"), 4);
}

#[test]
fn test_cooperative_stop_breaks_the_loop() {
    let mut state = RunState::new(Phase::Train).with_timer(Timer::new());
    let mut unit = LoopUnit::default();

    for _ in 0..100 {
        if state.should_stop() {
            break;
        }
        {
            let _scope = timing_scope(&state, "train_step");
            unit.train.increment_step();
        }
        if unit.train.num_steps_completed() == 5 {
            state.stop();
        }
    }

    assert_eq!(current_step(&unit, Phase::Train).unwrap(), 5);
    let summary = state.timer().unwrap().summary();
    assert_eq!(summary.events["train_step"].count, 5);
}

// ============================================================================
// Timer Behavior Tests

#[test]
fn test_bounded_timer_caps_long_runs() {
    let state = RunState::new(Phase::Train).with_timer(Timer::bounded(10));

    for _ in 0..100 {
        let _scope = timing_scope(&state, "train_step");
    }

    let recorded = state.timer().unwrap().recorded_durations();
    assert_eq!(recorded["train_step"].len(), 10);
}

#[test]
fn test_summary_display_renders_per_event_lines() {
    let state = RunState::new(Phase::Fit).with_timer(Timer::new());

    {
        let _scope = timing_scope(&state, "train_step");
    }
    {
        let _scope = timing_scope(&state, "eval_step");
    }

    let display = state.timer().unwrap().summary().to_string();
    assert!(display.contains("Timer Summary"));
    assert!(display.contains("train_step: count=1"));
    assert!(display.contains("eval_step: count=1"));
}
