use bd_core::{CellId, CoreError, PassengerId};
use bd_passenger::PassengerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match passenger count {expected}")]
    PassengerCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    /// A supplied passenger's target is not a seat of the aircraft.
    #[error("passenger {passenger} targets {cell}, which is not a seat of this aircraft")]
    InvalidTarget { passenger: PassengerId, cell: CellId },

    /// Boarding was attempted while someone still stands on the gate.
    #[error("gate {gate} is occupied; cannot board passenger {passenger}")]
    GateOccupied { gate: CellId, passenger: PassengerId },

    #[error("passenger error: {0}")]
    Passenger(#[from] PassengerError),
}

pub type SimResult<T> = Result<T, SimError>;
