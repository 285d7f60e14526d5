//! Repeated runs of one method over several seeds.
//!
//! Each trial builds its own [`Sim`](crate::Sim) from a clone of the aircraft,
//! so trials share nothing mutable.  With the `parallel` feature they run on
//! Rayon's thread pool; results are returned in seed order either way.

use bd_boarding::BoardingMethod;
use bd_cabin::Aircraft;
use bd_core::{Pacing, SimConfig};

use crate::{NoopObserver, RunOutcome, SimBuilder, SimResult};

/// Aggregate of a batch of trials for one method.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialSummary {
    pub method:     BoardingMethod,
    pub trials:     usize,
    /// Trials that seated everybody.
    pub completed:  usize,
    /// Mean ticks over completed trials; `None` if none completed.
    pub mean_ticks: Option<f64>,
    pub min_ticks:  Option<u64>,
    pub max_ticks:  Option<u64>,
}

impl TrialSummary {
    pub fn from_outcomes(method: BoardingMethod, outcomes: &[RunOutcome]) -> Self {
        let done: Vec<u64> = outcomes
            .iter()
            .filter(|o| o.is_completed())
            .map(|o| o.ticks())
            .collect();
        let mean_ticks = (!done.is_empty())
            .then(|| done.iter().sum::<u64>() as f64 / done.len() as f64);
        Self {
            method,
            trials:    outcomes.len(),
            completed: done.len(),
            mean_ticks,
            min_ticks: done.iter().copied().min(),
            max_ticks: done.iter().copied().max(),
        }
    }
}

/// Run `method` once per seed and return every outcome, in seed order.
///
/// Pacing and snapshots are switched off; everything else comes from
/// `config` with `seed` replaced.
pub fn run_seeds(
    config:   &SimConfig,
    aircraft: &Aircraft,
    method:   BoardingMethod,
    seeds:    &[u64],
) -> SimResult<Vec<RunOutcome>> {
    let run_one = |&seed: &u64| -> SimResult<RunOutcome> {
        let cfg = SimConfig {
            seed,
            pacing: Pacing::Unpaced,
            snapshot_interval_ticks: 0,
            ..config.clone()
        };
        SimBuilder::new(cfg, aircraft.clone())
            .method(method)
            .build()?
            .run(&mut NoopObserver)
    };

    #[cfg(not(feature = "parallel"))]
    let outcomes = seeds.iter().map(run_one).collect();

    #[cfg(feature = "parallel")]
    let outcomes = {
        use rayon::prelude::*;
        seeds.par_iter().map(run_one).collect()
    };

    outcomes
}

/// [`run_seeds`] followed by [`TrialSummary::from_outcomes`].
pub fn run_trials(
    config:   &SimConfig,
    aircraft: &Aircraft,
    method:   BoardingMethod,
    seeds:    &[u64],
) -> SimResult<TrialSummary> {
    let outcomes = run_seeds(config, aircraft, method, seeds)?;
    let summary = TrialSummary::from_outcomes(method, &outcomes);
    tracing::debug!(
        method    = method.as_str(),
        trials    = summary.trials,
        completed = summary.completed,
        "trials finished"
    );
    Ok(summary)
}
