//! `bd-cabin` — the cabin grid, seat index, and layout builder.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`cell`]     | `Cell`, `CellKind`, `Column`, `SeatLabel`                   |
//! | [`aircraft`] | `Aircraft` (cells + adjacency table + seat index)           |
//! | [`layout`]   | `RowGroup`, `LayoutSpec`, `build_aircraft`                  |
//! | [`loader`]   | `load_layout_csv`, `load_layout_reader`                     |
//! | [`error`]    | `CabinError`, `CabinResult<T>`                              |
//!
//! # Graph representation
//!
//! Cells never point at each other.  The `Aircraft` owns a flat `Vec<Cell>`
//! and an adjacency table `CellId → [Option<CellId>; 4]` indexed by
//! [`Direction`](bd_core::Direction).  Links are always written in matching
//! pairs, so every relation can be walked in both directions.

pub mod aircraft;
pub mod cell;
pub mod error;
pub mod layout;
pub mod loader;

#[cfg(test)]
mod tests;

pub use aircraft::Aircraft;
pub use cell::{Cell, CellKind, Column, SeatLabel};
pub use error::{CabinError, CabinResult};
pub use layout::{LayoutSpec, RowGroup, build_aircraft};
pub use loader::{load_layout_csv, load_layout_reader};
