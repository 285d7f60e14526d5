//! Simulation observer trait for status reporting and rendering.

use bd_core::{PassengerId, Tick};
use bd_passenger::PassengerSnapshot;

use crate::{RunOutcome, SimStatus};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — status printer
///
/// ```rust
/// use bd_sim::{SimObserver, SimStatus};
///
/// struct StatusPrinter;
///
/// impl SimObserver for StatusPrinter {
///     fn on_status(&mut self, status: &SimStatus) {
///         println!("{status}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// A status-stream message: start, method chosen, and the final result.
    fn on_status(&mut self, _status: &SimStatus) {}

    /// Called at the very start of each tick, before admission.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.  `active` is the number of passengers
    /// on the grid.
    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {}

    /// Called every `config.snapshot_interval_ticks` ticks with the state of
    /// every passenger on the grid, in admission order.
    fn on_snapshot(&mut self, _tick: Tick, _passengers: &[PassengerSnapshot]) {}

    /// A passenger found its seat unreachable this tick.  Reported once per
    /// passenger.
    fn on_unreachable(&mut self, _tick: Tick, _passenger: PassengerId) {}

    /// Called once after the loop exits.
    fn on_sim_end(&mut self, _outcome: RunOutcome) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
