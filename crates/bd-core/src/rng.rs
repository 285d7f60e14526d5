//! Deterministic per-passenger and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each passenger gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (passenger_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ids uniformly across the seed space.  Stow
//! delays drawn by one passenger therefore never depend on how many draws
//! another passenger made, so reordering the boarding queue does not reshuffle
//! anybody's luggage time.
//!
//! `SimRng` is the single global stream, used for queue shuffling.  Its seed
//! is XORed with a second constant so the queue stream never coincides with
//! passenger 0's stream under the same global seed.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::PassengerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Separates the simulation stream from the per-passenger streams.
const SIM_STREAM: u64 = 0xd1b5_4a32_d192_ed03;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-passenger deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and a passenger id.
    pub fn new(global_seed: u64, passenger: PassengerId) -> Self {
        let seed = global_seed ^ (passenger.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (queue shuffling).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed ^ SIM_STREAM))
    }

    /// Uniform in-place permutation (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}
