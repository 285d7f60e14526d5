//! `bd-sim` — the boarding scheduler.
//!
//! # Tick loop
//!
//! ```text
//! loop:
//!   ① Finish    — completed / cancelled / iteration ceiling → return RunOutcome
//!   ② Admit     — gate empty? pop the tail of the pending queue onto the gate
//!   ③ Advance   — every active passenger steps once, in admission order
//!   ④ Yield     — observer hooks, snapshot every N ticks, Pacing wait
//! ```
//!
//! Simulated time advances by exactly `config.tick_length_ms` per iteration.
//! The wall-clock wait in ④ only throttles how fast iterations are produced
//! and never changes a result.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs independent trials on Rayon's thread pool.        |
//! | `serde`    | Serialize/Deserialize on outcomes and summaries.       |
//!
//! # Quick-start
//!
//! ```rust
//! use bd_cabin::{LayoutSpec, build_aircraft};
//! use bd_core::SimConfig;
//! use bd_sim::{NoopObserver, RunOutcome, SimBuilder};
//!
//! let aircraft = build_aircraft(&LayoutSpec::single_aisle(1, 1)).unwrap();
//! let mut sim = SimBuilder::new(SimConfig::default(), aircraft).build().unwrap();
//! assert!(matches!(sim.run(&mut NoopObserver).unwrap(), RunOutcome::Completed { .. }));
//! ```

pub mod builder;
pub mod cancel;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod sim;
pub mod trials;


pub use builder::SimBuilder;
pub use cancel::CancelToken;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use outcome::{RunOutcome, SimStatus};
pub use sim::Sim;
pub use trials::{TrialSummary, run_seeds, run_trials};
