//! Training-loop phases
//!
//! The `Phase` flag names what a loop is executing (train, evaluate, predict)
//! or how a run was launched (`Fit`, the interleaved train + evaluate entry
//! point). Phases serialize as lowercase strings and parse back from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Activity a training loop is executing, or the mode a run was launched in
///
/// `Train`, `Evaluate`, and `Predict` each track their own step counter.
/// `Fit` is a launch mode only: it alternates the train and evaluate loops,
/// so no single counter belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Interleaved train + evaluate run
    Fit,
    /// Training loop
    Train,
    /// Evaluation loop
    Evaluate,
    /// Prediction loop
    Predict,
}

impl Phase {
    /// The step-tracked phases, in execution order
    pub fn step_phases() -> [Phase; 3] {
        [Phase::Train, Phase::Evaluate, Phase::Predict]
    }

    /// Whether a dedicated step counter exists for this phase
    pub fn tracks_steps(&self) -> bool {
        !matches!(self, Phase::Fit)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Fit => "fit",
            Phase::Train => "train",
            Phase::Evaluate => "evaluate",
            Phase::Predict => "predict",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Phase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "fit" => Ok(Phase::Fit),
            "train" => Ok(Phase::Train),
            "evaluate" | "eval" => Ok(Phase::Evaluate),
            "predict" => Ok(Phase::Predict),
            _ => Err(Error::UnknownPhaseName(s.to_string())),
        }
    }
}
