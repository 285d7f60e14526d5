//! Fluent builder for constructing a [`Sim`].

use bd_boarding::BoardingMethod;
use bd_cabin::Aircraft;
use bd_core::{SimConfig, SimRng};
use bd_passenger::{Occupancy, PassengerRngs, PassengerStore, PassengerStoreBuilder};

use crate::{CancelToken, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick length, iteration ceiling, seed, stow distribution, …
/// - [`Aircraft`] — from [`bd_cabin::build_aircraft`]
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                          |
/// |------------------------|--------------------------------------------------|
/// | `.method(m)`           | `BoardingMethod::BackToFront`                    |
/// | `.cancel_token(t)`     | A fresh token nobody else holds                  |
/// | `.passengers(s, r)`    | One passenger per seat, `config.stow` delays     |
///
/// # Example
///
/// ```rust
/// use bd_boarding::BoardingMethod;
/// use bd_cabin::{LayoutSpec, build_aircraft};
/// use bd_core::SimConfig;
/// use bd_sim::{NoopObserver, SimBuilder};
///
/// let aircraft = build_aircraft(&LayoutSpec::single_aisle(5, 2)).unwrap();
/// let mut sim = SimBuilder::new(SimConfig::default(), aircraft)
///     .method(BoardingMethod::Steffen)
///     .build()
///     .unwrap();
/// let outcome = sim.run(&mut NoopObserver).unwrap();
/// assert!(outcome.is_completed());
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    aircraft:   Aircraft,
    method:     BoardingMethod,
    cancel:     CancelToken,
    passengers: Option<(PassengerStore, PassengerRngs)>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, aircraft: Aircraft) -> Self {
        Self {
            config,
            aircraft,
            method:     BoardingMethod::default(),
            cancel:     CancelToken::new(),
            passengers: None,
        }
    }

    pub fn method(mut self, method: BoardingMethod) -> Self {
        self.method = method;
        self
    }

    /// Share a cancel token with the host.  Keep a clone to stop the run.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Supply a pre-built passenger set instead of one-per-seat defaults.
    ///
    /// `store` and `rngs` must have the same length, and every target must
    /// be a seat of the aircraft.
    pub fn passengers(mut self, store: PassengerStore, rngs: PassengerRngs) -> Self {
        self.passengers = Some((store, rngs));
        self
    }

    /// Validate inputs, order the boarding queue, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let (passengers, rngs) = match self.passengers {
            Some((store, rngs)) => {
                if rngs.len() != store.len() {
                    return Err(SimError::PassengerCountMismatch {
                        expected: store.len(),
                        got:      rngs.len(),
                        what:     "passenger rngs",
                    });
                }
                for id in store.ids() {
                    let cell = store.get(id).target;
                    if cell.index() >= self.aircraft.cell_count()
                        || self.aircraft.seat_label(cell).is_none()
                    {
                        return Err(SimError::InvalidTarget { passenger: id, cell });
                    }
                }
                (store, rngs)
            }
            None => PassengerStoreBuilder::new(self.config.seed)
                .stow(self.config.stow.clone())
                .build(&self.aircraft),
        };

        let unreachable = self.aircraft.unreachable_seats();
        if !unreachable.is_empty() {
            tracing::warn!(seats = unreachable.len(), "layout has seats unreachable from the gate");
        }

        let mut sim_rng = SimRng::new(self.config.seed);
        let pending = self.method.arrange(
            passengers.ids().collect(),
            &self.aircraft,
            &passengers,
            &mut sim_rng,
        );

        Ok(Sim {
            clock:     self.config.make_clock(),
            occupancy: Occupancy::new(self.aircraft.cell_count()),
            config:    self.config,
            aircraft:  self.aircraft,
            method:    self.method,
            passengers,
            rngs,
            pending,
            active:    Vec::new(),
            cancel:    self.cancel,
        })
    }
}
