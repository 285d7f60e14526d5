//! The `Sim` struct and its tick loop.

use std::time::Instant;

use bd_boarding::BoardingMethod;
use bd_cabin::Aircraft;
use bd_core::{PassengerId, SimClock, SimConfig};
use bd_passenger::{Occupancy, PassengerRngs, PassengerSnapshot, PassengerStore, StepContext, StepOutcome};

use crate::{CancelToken, RunOutcome, SimError, SimObserver, SimResult, SimStatus};

/// The boarding scheduler.
///
/// One iteration of the loop:
///
/// 1. **Finish checks**: stop if nobody is pending and every active passenger
///    is seated, if the cancel token is set, or if the iteration ceiling is
///    reached (in that order).
/// 2. **Admission**: if the gate is empty, pop the tail of the pending queue
///    and board that passenger.
/// 3. **Advance**: step every active passenger once, in admission order.
/// 4. **Yield**: observer hooks, optional snapshot, optional wall-clock wait.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Tick length, ceiling, seed, stow distribution, pacing, …
    pub config: SimConfig,

    /// Logical clock; `clock.current_tick` is the number of iterations run.
    pub clock: SimClock,

    pub aircraft: Aircraft,

    pub method: BoardingMethod,

    /// Passenger state, indexed by `PassengerId`.
    pub passengers: PassengerStore,

    /// Per-passenger RNGs, separated for the split-borrow pattern.
    pub rngs: PassengerRngs,

    /// Cell → occupants.  Only mutated through passenger moves and `board`.
    pub occupancy: Occupancy,

    /// Boarding queue; the tail boards next.
    pub(crate) pending: Vec<PassengerId>,

    /// Passengers on the grid, in admission order.
    pub(crate) active: Vec<PassengerId>,

    pub(crate) cancel: CancelToken,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every passenger is seated, the run is cancelled, or the
    /// iteration ceiling is reached.
    ///
    /// # Errors
    ///
    /// Only on a broken boarding precondition; reaching the ceiling or
    /// being cancelled are ordinary outcomes.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunOutcome> {
        let total = self.passengers.len();
        self.status(observer, SimStatus::Starting);
        self.status(observer, SimStatus::Boarding { passengers: total, method: self.method });

        let outcome = loop {
            if let Some(outcome) = self.finished() {
                break outcome;
            }
            let started = Instant::now();
            self.step(observer)?;
            if let Some(wait) = self.config.pacing.delay_after(started.elapsed()) {
                std::thread::sleep(wait);
            }
        };

        self.status(observer, SimStatus::finished(outcome, total));
        observer.on_sim_end(outcome);
        Ok(outcome)
    }

    /// Run exactly one iteration regardless of the finish checks.
    ///
    /// Useful for tests and for hosts that drive the loop themselves.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Admission ─────────────────────────────────────────────────────
        if self.occupancy.is_empty(self.aircraft.gate()) {
            if let Some(next) = self.pending.pop() {
                self.board(next)?;
            }
        }

        // ── Advance ───────────────────────────────────────────────────────
        let ctx = StepContext {
            aircraft:       &self.aircraft,
            tick_length_ms: self.config.tick_length_ms,
            lateral_pacing: self.config.lateral_pacing,
        };
        for &id in &self.active {
            let outcome = self.passengers.get_mut(id).advance(
                &ctx,
                &mut self.occupancy,
                self.rngs.get_mut(id),
            );
            match outcome {
                StepOutcome::Unreachable => observer.on_unreachable(now, id),
                StepOutcome::Seated => tracing::trace!(passenger = id.0, tick = now.0, "seated"),
                _ => {}
            }
        }

        self.clock.advance();
        observer.on_tick_end(now, self.active.len());

        let interval = self.config.snapshot_interval_ticks;
        let done = self.clock.current_tick;
        if interval > 0 && done.0.is_multiple_of(interval) {
            observer.on_snapshot(done, &self.snapshot());
        }
        Ok(())
    }

    /// Place `passenger` on the gate and make it active.  The passenger is
    /// taken out of the pending queue wherever it sits.
    ///
    /// # Errors
    ///
    /// [`SimError::GateOccupied`] if the gate is not empty, or a passenger
    /// error if `passenger` is already on the grid.
    pub fn board(&mut self, passenger: PassengerId) -> SimResult<()> {
        let gate = self.aircraft.gate();
        if !self.occupancy.is_empty(gate) {
            return Err(SimError::GateOccupied { gate, passenger });
        }
        self.passengers.get_mut(passenger).board(gate, &mut self.occupancy)?;
        self.pending.retain(|&p| p != passenger);
        self.active.push(passenger);
        tracing::trace!(passenger = passenger.0, tick = self.clock.current_tick.0, "boarded");
        Ok(())
    }

    /// Cell and state of every passenger on the grid, in admission order.
    pub fn snapshot(&self) -> Vec<PassengerSnapshot> {
        self.passengers.snapshot(&self.active)
    }

    /// Iterations run so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.clock.current_tick.0
    }

    /// Passengers still waiting, tail first to board.
    pub fn pending(&self) -> &[PassengerId] {
        &self.pending
    }

    /// Passengers on the grid, in admission order.
    pub fn active(&self) -> &[PassengerId] {
        &self.active
    }

    /// A clone of this run's cancel token.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn finished(&self) -> Option<RunOutcome> {
        let ticks = self.ticks();
        if self.pending.is_empty() && self.passengers.all_seated(&self.active) {
            Some(RunOutcome::Completed { ticks })
        } else if self.cancel.is_cancelled() {
            Some(RunOutcome::Cancelled { ticks })
        } else if self.clock.current_tick >= self.config.iteration_ceiling() {
            Some(RunOutcome::Incomplete { ticks })
        } else {
            None
        }
    }

    fn status<O: SimObserver>(&self, observer: &mut O, status: SimStatus) {
        match status {
            SimStatus::Incomplete { .. } => tracing::warn!(tick = self.ticks(), "{status}"),
            _ => tracing::info!(tick = self.ticks(), "{status}"),
        }
        observer.on_status(&status);
    }
}
