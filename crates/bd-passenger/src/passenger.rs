//! The passenger agent and its per-tick state machine.

use std::fmt;

use bd_cabin::{Aircraft, SeatLabel};
use bd_core::{AgentRng, CellId, Direction, LateralPacing, PassengerId, StowDistribution};

use crate::{Occupancy, PassengerError, PassengerResult, PassengerState, StepOutcome};

/// Read-only inputs shared by every passenger during one tick.
#[derive(Copy, Clone)]
pub struct StepContext<'a> {
    pub aircraft:       &'a Aircraft,
    pub tick_length_ms: u32,
    pub lateral_pacing: LateralPacing,
}

/// One passenger for one run.
#[derive(Clone, Debug)]
pub struct Passenger {
    pub id:     PassengerId,
    /// Assigned seat.  Fixed for the run.
    pub target: CellId,
    /// Current cell; `None` until boarded.
    pub cell:   Option<CellId>,
    pub state:  PassengerState,
    /// Remaining stow delay in simulated milliseconds.  Only meaningful in
    /// the loading states; may go negative.
    pub countdown_ms: i64,
    /// Set once the target has been found unreachable.
    pub stalled: bool,
    stow: StowDistribution,
}

impl Passenger {
    pub fn new(id: PassengerId, target: CellId, stow: StowDistribution) -> Self {
        Self {
            id,
            target,
            cell: None,
            state: PassengerState::Pending,
            countdown_ms: 0,
            stalled: false,
            stow,
        }
    }

    /// Place the passenger on `gate` and start searching.
    ///
    /// # Errors
    ///
    /// `AlreadyBoarded` if the passenger is on the grid already, or
    /// `CellOccupied` if `gate` is not empty.
    pub fn board(&mut self, gate: CellId, occupancy: &mut Occupancy) -> PassengerResult<()> {
        if self.state.is_active() {
            return Err(PassengerError::AlreadyBoarded(self.id));
        }
        occupancy.place(self.id, gate)?;
        self.cell = Some(gate);
        self.state = PassengerState::Searching;
        Ok(())
    }

    #[inline]
    pub fn is_seated(&self) -> bool {
        self.state == PassengerState::Seated
    }

    /// Advance this passenger by one tick.
    pub fn advance(
        &mut self,
        ctx:       &StepContext<'_>,
        occupancy: &mut Occupancy,
        rng:       &mut AgentRng,
    ) -> StepOutcome {
        let Some(cell) = self.cell else {
            return StepOutcome::Idle;
        };
        match self.state {
            PassengerState::Pending | PassengerState::Seated => StepOutcome::Idle,
            PassengerState::Searching => self.search(cell, ctx, occupancy, rng),
            PassengerState::LoadingLateralA | PassengerState::LoadingLateralB => {
                self.load(cell, ctx, occupancy, rng)
            }
        }
    }

    // ── States ────────────────────────────────────────────────────────────

    fn search(
        &mut self,
        cell:      CellId,
        ctx:       &StepContext<'_>,
        occupancy: &mut Occupancy,
        rng:       &mut AgentRng,
    ) -> StepOutcome {
        let aircraft = ctx.aircraft;
        let Some(target) = aircraft.seat_label(self.target) else {
            return self.stall(aircraft);
        };

        // The target lies on side A if the A-neighbor is a seat in the target
        // row at or past the target column (columns fall toward A).
        let toward = |dir: Direction, ok: fn(&SeatLabel, &SeatLabel) -> bool| {
            aircraft
                .neighbor(cell, dir)
                .and_then(|n| aircraft.seat_label(n))
                .is_some_and(|l| l.row == target.row && ok(&l, &target))
        };
        let side = if toward(Direction::LateralA, |l, t| l.column >= t.column) {
            Some((Direction::LateralA, PassengerState::LoadingLateralA))
        } else if toward(Direction::LateralB, |l, t| l.column <= t.column) {
            Some((Direction::LateralB, PassengerState::LoadingLateralB))
        } else {
            None
        };

        if let Some((side, state)) = side {
            let stow_ms = self.stow.sample(rng);
            self.state = state;
            self.countdown_ms = stow_ms as i64;
            return StepOutcome::StartedLoading { side, stow_ms };
        }

        match aircraft.neighbor(cell, Direction::Forward) {
            Some(next) if occupancy.is_empty(next) => {
                self.step(cell, next, occupancy);
                StepOutcome::Moved { from: cell, to: next }
            }
            Some(_) => StepOutcome::Blocked,
            None => self.stall(aircraft),
        }
    }

    fn load(
        &mut self,
        cell:      CellId,
        ctx:       &StepContext<'_>,
        occupancy: &mut Occupancy,
        rng:       &mut AgentRng,
    ) -> StepOutcome {
        self.countdown_ms -= ctx.tick_length_ms as i64;
        if self.countdown_ms > 0 {
            return StepOutcome::Stowing;
        }

        let dir = match self.state.loading_direction() {
            Some(d) => d,
            None => return StepOutcome::Idle,
        };
        let Some(next) = ctx.aircraft.neighbor(cell, dir) else {
            return self.stall(ctx.aircraft);
        };

        self.step(cell, next, occupancy);
        if next == self.target {
            self.state = PassengerState::Seated;
            return StepOutcome::Seated;
        }
        if ctx.lateral_pacing == LateralPacing::StowEachStep {
            self.countdown_ms = self.stow.sample(rng) as i64;
        }
        StepOutcome::Moved { from: cell, to: next }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn step(&mut self, from: CellId, to: CellId, occupancy: &mut Occupancy) {
        occupancy.move_passenger(self.id, from, to);
        self.cell = Some(to);
    }

    /// Mark the target unreachable.  Logs only the first time.
    fn stall(&mut self, aircraft: &Aircraft) -> StepOutcome {
        if self.stalled {
            return StepOutcome::Stalled;
        }
        self.stalled = true;
        match aircraft.seat_label(self.target) {
            Some(seat) => tracing::warn!(passenger = self.id.0, %seat, "passenger failed to find seat"),
            None => tracing::warn!(passenger = self.id.0, target = %self.target, "passenger target is not a seat"),
        }
        StepOutcome::Unreachable
    }

    /// `<seat> [<state>]`, e.g. `12C [searching]`.
    pub fn describe<'a>(&'a self, aircraft: &'a Aircraft) -> PassengerDisplay<'a> {
        PassengerDisplay { passenger: self, aircraft }
    }
}

/// Display adapter returned by [`Passenger::describe`].
pub struct PassengerDisplay<'a> {
    passenger: &'a Passenger,
    aircraft:  &'a Aircraft,
}

impl fmt::Display for PassengerDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.aircraft.seat_label(self.passenger.target) {
            Some(seat) => write!(f, "{seat} [{}]", self.passenger.state),
            None => write!(f, "? [{}]", self.passenger.state),
        }
    }
}
