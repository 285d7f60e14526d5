//! `bd-passenger` — passenger agents and the cells they occupy.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`state`]     | `PassengerState`, `StepOutcome`, `PassengerSnapshot`         |
//! | [`passenger`] | `Passenger` and its per-tick state machine                   |
//! | [`occupancy`] | `Occupancy` — cell → occupant ids, the only shared mutable map |
//! | [`store`]     | `PassengerStore`, `PassengerRngs`, `PassengerStoreBuilder`   |
//! | [`error`]     | `PassengerError`, `PassengerResult<T>`                       |
//!
//! # State machine
//!
//! ```text
//! Pending ──board──▶ Searching ──lateral match──▶ LoadingLateralA/B ──reach seat──▶ Seated
//!                     │    ▲                        │     ▲
//!                     └────┘ walk / wait            └─────┘ one lateral step
//! ```
//!
//! Passengers never hold references to cells.  They carry a `CellId`, and
//! every move goes through [`Occupancy::move_passenger`] so the occupant map
//! and the passenger's own position can never disagree.

pub mod error;
pub mod occupancy;
pub mod passenger;
pub mod state;
pub mod store;


pub use error::{PassengerError, PassengerResult};
pub use occupancy::Occupancy;
pub use passenger::{Passenger, PassengerDisplay, StepContext};
pub use state::{PassengerSnapshot, PassengerState, StepOutcome};
pub use store::{PassengerRngs, PassengerStore, PassengerStoreBuilder};
