//! Profiler trace annotations
//!
//! Loop operations are annotated with [`tracing`] spans under a dedicated
//! target so profiler subscribers can reconstruct where time went. With no
//! subscriber installed the spans cost nothing, which is why callers open
//! them unconditionally.

use tracing::span::EnteredSpan;
use tracing::{trace_span, Span};

/// Target profiler spans are emitted under
///
/// Subscribers can filter on this target to see only profiler regions.
pub const PROFILER_TARGET: &str = "cadencia::profiler";

/// Open a profiler scope for `event_name`
///
/// The span is entered immediately and exits when the returned guard drops.
pub fn record_scope(event_name: &str) -> RecordScope {
    let span = trace_span!(target: PROFILER_TARGET, "profile", event = %event_name);
    RecordScope {
        span: span.entered(),
    }
}

/// Profiler scope opened by [`record_scope`]
///
/// Exits its span on drop. The guard is thread-bound: spans must exit on the
/// thread that entered them.
#[derive(Debug)]
pub struct RecordScope {
    span: EnteredSpan,
}

impl RecordScope {
    /// The underlying span, for recording extra fields
    pub fn span(&self) -> &Span {
        &self.span
    }
}
