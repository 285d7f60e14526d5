//! Passenger states and per-tick step results.

use std::fmt;

use bd_core::{CellId, Direction, PassengerId};

/// Where a passenger is in the boarding process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassengerState {
    /// Not yet admitted through the gate; occupies no cell.
    #[default]
    Pending,
    /// Walking the aisle toward the target row.
    Searching,
    /// Stowing luggage / stepping toward a seat on the `LateralA` side.
    LoadingLateralA,
    /// Stowing luggage / stepping toward a seat on the `LateralB` side.
    LoadingLateralB,
    /// In the target seat.  Terminal.
    Seated,
}

impl PassengerState {
    /// The lateral direction a loading state moves in.
    pub fn loading_direction(self) -> Option<Direction> {
        match self {
            PassengerState::LoadingLateralA => Some(Direction::LateralA),
            PassengerState::LoadingLateralB => Some(Direction::LateralB),
            _ => None,
        }
    }

    /// `true` once the passenger is on the grid.
    pub fn is_active(self) -> bool {
        !matches!(self, PassengerState::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PassengerState::Pending         => "pending",
            PassengerState::Searching       => "searching",
            PassengerState::LoadingLateralA => "loading_a",
            PassengerState::LoadingLateralB => "loading_b",
            PassengerState::Seated          => "seated",
        }
    }
}

impl fmt::Display for PassengerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one call to [`Passenger::advance`](crate::Passenger::advance) did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Pending or seated; nothing to do.
    Idle,
    /// Moved one cell (aisle step or a lateral step short of the seat).
    Moved { from: CellId, to: CellId },
    /// Next aisle cell is occupied.
    Blocked,
    /// Turned toward the seat and sampled a stow delay of `stow_ms`.
    StartedLoading { side: Direction, stow_ms: u32 },
    /// Still counting down the stow delay.
    Stowing,
    /// Stepped into the target seat this tick.
    Seated,
    /// First tick on which the target was found to be unreachable.
    Unreachable,
    /// Still stuck after an earlier `Unreachable`.
    Stalled,
}

/// Per-tick view of one passenger for renderers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerSnapshot {
    pub id:    PassengerId,
    pub cell:  Option<CellId>,
    pub state: PassengerState,
}
