//! Cadence errors
//!
//! Error types for phase and timing operations.

use thiserror::Error;

use crate::phase::Phase;

/// Errors that can occur during cadence operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid phase: {0} has no step counter")]
    InvalidPhase(Phase),

    #[error("Unknown phase name: {0}")]
    UnknownPhaseName(String),
}
