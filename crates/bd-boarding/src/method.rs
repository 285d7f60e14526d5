//! `BoardingMethod` — the closed set of boarding strategies.

use std::fmt;
use std::str::FromStr;

use bd_cabin::Aircraft;
use bd_core::{PassengerId, SimRng};
use bd_passenger::PassengerStore;

use crate::strategies;
use crate::{BoardingError, BoardingResult};

/// A boarding-order strategy.
///
/// Names describe who reaches the gate first: `BackToFront` admits the
/// rearmost rows first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoardingMethod {
    #[default]
    BackToFront,
    FrontToBack,
    Random,
    /// Window seats first, alternating rows and sides.
    Steffen,
}

impl BoardingMethod {
    pub const ALL: [BoardingMethod; 4] = [
        BoardingMethod::BackToFront,
        BoardingMethod::FrontToBack,
        BoardingMethod::Random,
        BoardingMethod::Steffen,
    ];

    /// Short identifier used in status messages and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            BoardingMethod::BackToFront => "btf",
            BoardingMethod::FrontToBack => "ftb",
            BoardingMethod::Random      => "random",
            BoardingMethod::Steffen     => "steffen",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            BoardingMethod::BackToFront => "back-to-front",
            BoardingMethod::FrontToBack => "front-to-back",
            BoardingMethod::Random      => "random",
            BoardingMethod::Steffen     => "steffen",
        }
    }

    /// Lenient parse: unknown identifiers fall back to the default method
    /// with a warning instead of failing the run.
    pub fn parse_or_default(id: &str) -> BoardingMethod {
        id.parse().unwrap_or_else(|err: BoardingError| {
            let fallback = BoardingMethod::default();
            tracing::warn!(%err, fallback = fallback.as_str(), "using default boarding method");
            fallback
        })
    }

    /// Reorder `pending` (seat-enumeration order) into an admission queue.
    ///
    /// The returned queue is consumed from the tail.  Only `Random` draws
    /// from `rng`.
    pub fn arrange(
        self,
        pending:  Vec<PassengerId>,
        aircraft: &Aircraft,
        store:    &PassengerStore,
        rng:      &mut SimRng,
    ) -> Vec<PassengerId> {
        match self {
            BoardingMethod::BackToFront => strategies::back_to_front(pending),
            BoardingMethod::FrontToBack => strategies::front_to_back(pending),
            BoardingMethod::Random      => strategies::random(pending, rng),
            BoardingMethod::Steffen     => strategies::steffen(pending, aircraft, store),
        }
    }
}

impl fmt::Display for BoardingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BoardingMethod {
    type Err = BoardingError;

    /// Accepts the short id or the long name, case-insensitively.
    fn from_str(s: &str) -> BoardingResult<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        BoardingMethod::ALL
            .into_iter()
            .find(|m| key == m.as_str() || key == m.long_name())
            .ok_or_else(|| BoardingError::UnknownMethod(s.to_string()))
    }
}
