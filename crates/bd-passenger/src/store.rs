//! Passenger storage: `PassengerStore` (state) and `PassengerRngs` (per-passenger RNG).
//!
//! The two live in separate structs so the scheduler can hold
//! `&mut PassengerStore` and `&mut PassengerRngs` at the same time while
//! stepping a passenger with its own RNG.

use bd_cabin::Aircraft;
use bd_core::{AgentRng, PassengerId, StowDistribution};

use crate::{Passenger, PassengerSnapshot};

// ── PassengerRngs ─────────────────────────────────────────────────────────────

/// Per-passenger deterministic RNG state, indexed by `PassengerId`.
pub struct PassengerRngs {
    pub inner: Vec<AgentRng>,
}

impl PassengerRngs {
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, PassengerId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, passenger: PassengerId) -> &mut AgentRng {
        &mut self.inner[passenger.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── PassengerStore ────────────────────────────────────────────────────────────

/// Every passenger of a run, indexed by `PassengerId`.
pub struct PassengerStore {
    pub passengers: Vec<Passenger>,
}

impl PassengerStore {
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn get(&self, id: PassengerId) -> &Passenger {
        &self.passengers[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: PassengerId) -> &mut Passenger {
        &mut self.passengers[id.index()]
    }

    /// All ids in ascending order (which is seat-enumeration order).
    pub fn ids(&self) -> impl Iterator<Item = PassengerId> + '_ {
        (0..self.passengers.len() as u32).map(PassengerId)
    }

    /// `true` if every passenger in `ids` is seated.
    pub fn all_seated(&self, ids: &[PassengerId]) -> bool {
        ids.iter().all(|&id| self.get(id).is_seated())
    }

    pub fn snapshot(&self, ids: &[PassengerId]) -> Vec<PassengerSnapshot> {
        ids.iter()
            .map(|&id| {
                let p = self.get(id);
                PassengerSnapshot { id, cell: p.cell, state: p.state }
            })
            .collect()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Creates one pending passenger per seat of an aircraft.
///
/// Passenger `i` is assigned `aircraft.seats()[i]`.
///
/// ```rust
/// use bd_cabin::{LayoutSpec, build_aircraft};
/// use bd_passenger::PassengerStoreBuilder;
///
/// let aircraft = build_aircraft(&LayoutSpec::single_aisle(10, 3)).unwrap();
/// let (store, rngs) = PassengerStoreBuilder::new(42).build(&aircraft);
/// assert_eq!(store.len(), 60);
/// assert_eq!(rngs.len(), 60);
/// ```
pub struct PassengerStoreBuilder {
    seed: u64,
    stow: StowDistribution,
}

impl PassengerStoreBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed, stow: StowDistribution::default() }
    }

    /// Stow-delay distribution handed to every passenger.
    pub fn stow(mut self, stow: StowDistribution) -> Self {
        self.stow = stow;
        self
    }

    pub fn build(self, aircraft: &Aircraft) -> (PassengerStore, PassengerRngs) {
        let passengers: Vec<Passenger> = aircraft
            .seats()
            .iter()
            .enumerate()
            .map(|(i, &seat)| Passenger::new(PassengerId(i as u32), seat, self.stow.clone()))
            .collect();
        let rngs = PassengerRngs::new(passengers.len(), self.seed);
        (PassengerStore { passengers }, rngs)
    }
}
