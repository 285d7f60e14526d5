//! Luggage-stowing delay distributions.
//!
//! A passenger samples a stow delay when it turns off the aisle toward its
//! seat.  All delays are simulated milliseconds.

use std::fmt;
use std::sync::Arc;

use crate::{AgentRng, CoreError, CoreResult};

/// Caller-supplied sampler for [`StowDistribution::Custom`].
pub type StowFn = Arc<dyn Fn(&mut AgentRng) -> u32 + Send + Sync>;

/// Distribution of the time a passenger spends stowing luggage.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum StowDistribution {
    /// Every passenger takes exactly `ms`.
    Constant { ms: u32 },
    /// Uniform over `[min_ms, max_ms]`.
    Uniform { min_ms: u32, max_ms: u32 },
    /// Triangular with lower bound, mode, and upper bound.
    Triangular { min_ms: u32, mode_ms: u32, max_ms: u32 },
    /// Arbitrary sampler.  Not representable in config files.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(StowFn),
}

impl Default for StowDistribution {
    fn default() -> Self {
        StowDistribution::Constant { ms: 10_000 }
    }
}

impl StowDistribution {
    /// Wrap a closure as a distribution.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&mut AgentRng) -> u32 + Send + Sync + 'static,
    {
        StowDistribution::Custom(Arc::new(f))
    }

    /// Draw one delay in milliseconds.
    pub fn sample(&self, rng: &mut AgentRng) -> u32 {
        match self {
            StowDistribution::Constant { ms } => *ms,
            StowDistribution::Uniform { min_ms, max_ms } => rng.gen_range(*min_ms..=*max_ms),
            StowDistribution::Triangular { min_ms, mode_ms, max_ms } => {
                let (a, c, b) = (*min_ms as f64, *mode_ms as f64, *max_ms as f64);
                if b <= a {
                    return *min_ms;
                }
                // Inverse CDF.
                let u: f64 = rng.random();
                let split = (c - a) / (b - a);
                let x = if u < split {
                    a + (u * (b - a) * (c - a)).sqrt()
                } else {
                    b - ((1.0 - u) * (b - a) * (b - c)).sqrt()
                };
                x.round() as u32
            }
            StowDistribution::Custom(f) => f(rng),
        }
    }

    /// Check that bounds are ordered.
    pub fn validate(&self) -> CoreResult<()> {
        match *self {
            StowDistribution::Uniform { min_ms, max_ms } if min_ms > max_ms => {
                Err(CoreError::InvalidStow(format!("uniform min {min_ms} > max {max_ms}")))
            }
            StowDistribution::Triangular { min_ms, mode_ms, max_ms }
                if !(min_ms <= mode_ms && mode_ms <= max_ms) =>
            {
                Err(CoreError::InvalidStow(format!(
                    "triangular bounds must satisfy min <= mode <= max, got {min_ms}/{mode_ms}/{max_ms}"
                )))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for StowDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StowDistribution::Constant { ms } => write!(f, "Constant({ms} ms)"),
            StowDistribution::Uniform { min_ms, max_ms } => {
                write!(f, "Uniform({min_ms}..={max_ms} ms)")
            }
            StowDistribution::Triangular { min_ms, mode_ms, max_ms } => {
                write!(f, "Triangular({min_ms}/{mode_ms}/{max_ms} ms)")
            }
            StowDistribution::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

// ── LateralPacing ─────────────────────────────────────────────────────────────

/// How the stow delay applies when a seat is several columns from the aisle.
///
/// With `StowOnce` the delay is paid before the first lateral step only; the
/// remaining steps toward the seat happen one per tick.  With `StowEachStep`
/// a fresh delay is sampled before every lateral step, modelling the shuffle
/// past already-seated neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LateralPacing {
    #[default]
    StowOnce,
    StowEachStep,
}
