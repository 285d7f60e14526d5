//! Run results and the human-readable status stream.

use std::fmt;

use bd_boarding::BoardingMethod;

/// How a call to [`Sim::run`](crate::Sim::run) ended.  `ticks` is the
/// number of iterations executed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum RunOutcome {
    /// Every passenger is seated.
    Completed { ticks: u64 },
    /// The iteration ceiling was reached first.
    Incomplete { ticks: u64 },
    /// The cancel token was set.
    Cancelled { ticks: u64 },
}

impl RunOutcome {
    pub fn ticks(self) -> u64 {
        match self {
            RunOutcome::Completed { ticks }
            | RunOutcome::Incomplete { ticks }
            | RunOutcome::Cancelled { ticks } => ticks,
        }
    }

    pub fn is_completed(self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }
}

/// One message of the status stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimStatus {
    Starting,
    Boarding { passengers: usize, method: BoardingMethod },
    Completed { passengers: usize, ticks: u64 },
    Aborted { ticks: u64 },
    Incomplete { ticks: u64 },
}

impl SimStatus {
    /// The final status for `outcome`.
    pub fn finished(outcome: RunOutcome, passengers: usize) -> SimStatus {
        match outcome {
            RunOutcome::Completed { ticks }  => SimStatus::Completed { passengers, ticks },
            RunOutcome::Incomplete { ticks } => SimStatus::Incomplete { ticks },
            RunOutcome::Cancelled { ticks }  => SimStatus::Aborted { ticks },
        }
    }
}

impl fmt::Display for SimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimStatus::Starting => f.write_str("Starting simulation"),
            SimStatus::Boarding { passengers, method } => {
                write!(f, "Boarding {passengers} passengers ({method} method)...")
            }
            SimStatus::Completed { passengers, ticks } => {
                write!(f, "All {passengers} passengers seated after {ticks} iterations")
            }
            SimStatus::Aborted { ticks } => write!(f, "Simulation aborted after {ticks} iterations"),
            SimStatus::Incomplete { ticks } => {
                write!(f, "Boarding incomplete after {ticks} iterations")
            }
        }
    }
}
