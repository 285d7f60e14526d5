//! `bd-boarding` — the order in which pending passengers reach the gate.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`method`]     | `BoardingMethod` — closed set of strategies + parsing     |
//! | [`strategies`] | The four reordering functions                             |
//! | [`error`]      | `BoardingError`, `BoardingResult<T>`                      |
//!
//! # Queue convention
//!
//! A strategy receives the pending passengers in seat-enumeration order and
//! returns them reordered.  The scheduler admits passengers by popping from
//! the **tail** of the returned queue, so the last element boards first.
//! Since seats are enumerated front row first, the unmodified order boards
//! the back of the cabin first.

pub mod error;
pub mod method;
pub mod strategies;


pub use error::{BoardingError, BoardingResult};
pub use method::BoardingMethod;
