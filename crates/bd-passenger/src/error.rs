use bd_core::{CellId, PassengerId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassengerError {
    #[error("passenger {0} has already boarded")]
    AlreadyBoarded(PassengerId),

    #[error("cell {cell} is occupied; cannot place passenger {passenger}")]
    CellOccupied { cell: CellId, passenger: PassengerId },
}

pub type PassengerResult<T> = Result<T, PassengerError>;
