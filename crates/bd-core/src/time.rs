//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Each tick stands for
//! a fixed logical duration, `tick_length_ms`, held in `SimClock`:
//!
//!   simulated_ms = tick * tick_length_ms
//!
//! The logical clock is deliberately independent of how fast ticks are
//! produced.  Throttling iterations against the wall clock (so a viewer can
//! watch) is a separate concern described by [`Pacing`]; changing the pacing
//! never changes a run's outcome.

use std::fmt;
use std::time::Duration;

use crate::{CoreError, CoreResult, LateralPacing, StowDistribution};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Logical clock: the current tick plus the simulated length of one tick.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated milliseconds per tick.
    pub tick_length_ms: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_length_ms: u32) -> Self {
        Self { tick_length_ms, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Simulated milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_length_ms as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed_ms() / 1_000;
        write!(f, "{} ({}m{:02}s)", self.current_tick, secs / 60, secs % 60)
    }
}

// ── Pacing ────────────────────────────────────────────────────────────────────

/// Wall-clock throttle applied between ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Pacing {
    /// Produce ticks as fast as possible (batch runs, tests).
    #[default]
    Unpaced,
    /// Aim for one tick every `step_ms` of wall-clock time.  Time already
    /// spent computing the tick is subtracted from the wait.
    Fixed { step_ms: u64 },
}

impl Pacing {
    /// How long to wait after a tick that took `elapsed` to compute.
    pub fn delay_after(self, elapsed: Duration) -> Option<Duration> {
        match self {
            Pacing::Unpaced => None,
            Pacing::Fixed { step_ms } => {
                let rest = Duration::from_millis(step_ms).saturating_sub(elapsed);
                (!rest.is_zero()).then_some(rest)
            }
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the simulation builder.  Every field has a default, so partial files work.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Simulated milliseconds per tick.  Default: 500.
    pub tick_length_ms: u32,

    /// Iteration ceiling.  A run that has not seated everybody after this many
    /// ticks is reported as incomplete.  Default: 10 000.
    pub max_iterations: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Distribution of the luggage-stowing delay.  Default: constant 10 s.
    pub stow: StowDistribution,

    /// Whether each lateral step toward a seat pays a fresh stow delay.
    pub lateral_pacing: LateralPacing,

    /// Emit a passenger snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,

    /// Wall-clock throttle between ticks.
    pub pacing: Pacing,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_length_ms:          500,
            max_iterations:          10_000,
            seed:                    0,
            stow:                    StowDistribution::default(),
            lateral_pacing:          LateralPacing::default(),
            snapshot_interval_ticks: 0,
            pacing:                  Pacing::Unpaced,
        }
    }
}

impl SimConfig {
    /// The tick at which a run is cut off (exclusive upper bound).
    #[inline]
    pub fn iteration_ceiling(&self) -> Tick {
        Tick(self.max_iterations)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_length_ms)
    }

    /// Reject configurations the scheduler cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_length_ms == 0 {
            return Err(CoreError::Config("tick_length_ms must be positive".into()));
        }
        if self.max_iterations == 0 {
            return Err(CoreError::Config("max_iterations must be positive".into()));
        }
        self.stow.validate()
    }
}
