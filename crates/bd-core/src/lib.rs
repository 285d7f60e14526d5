//! `bd-core` — foundational types for the boarding simulator.
//!
//! This crate is a dependency of every other `bd-*` crate.  It has no `bd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CellId`, `PassengerId`                               |
//! | [`grid`]        | `GridPos`, `Direction`                                |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`, `Pacing`             |
//! | [`rng`]         | `AgentRng` (per-passenger), `SimRng` (global)         |
//! | [`stow`]        | `StowDistribution`, `LateralPacing`                   |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod stow;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use grid::{Direction, GridPos};
pub use ids::{CellId, PassengerId};
pub use rng::{AgentRng, SimRng};
pub use stow::{LateralPacing, StowDistribution};
pub use time::{Pacing, SimClock, SimConfig, Tick};
