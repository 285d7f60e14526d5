//! Unit tests for bd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CellId, PassengerId};

    #[test]
    fn index_roundtrip() {
        let id = PassengerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PassengerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(CellId::default(), CellId::INVALID);
        assert_eq!(CellId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(CellId(7).to_string(), "CellId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::Direction;

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn slots_are_distinct() {
        let mut slots: Vec<usize> = Direction::ALL.iter().map(|d| d.index()).collect();
        slots.sort_unstable();
        assert_eq!(slots, vec![0, 1, 2, 3]);
    }

    #[test]
    fn lateral_classification() {
        assert!(Direction::LateralA.is_lateral());
        assert!(!Direction::Forward.is_lateral());
        assert_eq!(Direction::Backward.to_string(), "backward");
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{Pacing, SimClock, SimConfig, StowDistribution, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(500);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_ms(), 1_000);
    }

    #[test]
    fn fixed_pacing_subtracts_compute_time() {
        let pacing = Pacing::Fixed { step_ms: 100 };
        assert_eq!(pacing.delay_after(Duration::from_millis(30)), Some(Duration::from_millis(70)));
        assert_eq!(pacing.delay_after(Duration::from_millis(150)), None);
        assert_eq!(Pacing::Unpaced.delay_after(Duration::ZERO), None);
    }

    #[test]
    fn default_config_values() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.tick_length_ms, 500);
        assert_eq!(cfg.iteration_ceiling(), Tick(10_000));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_tick() {
        let cfg = SimConfig { tick_length_ms: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_stow_bounds() {
        let cfg = SimConfig {
            stow: StowDistribution::Uniform { min_ms: 9, max_ms: 3 },
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;

    use crate::{AgentRng, PassengerId, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, PassengerId(0));
        let mut r2 = AgentRng::new(12345, PassengerId(0));
        for _ in 0..100 {
            let a: u32 = r1.random();
            let b: u32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_passengers_differ() {
        let mut r0 = AgentRng::new(1, PassengerId(0));
        let mut r1 = AgentRng::new(1, PassengerId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(7);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn queue_stream_is_not_passenger_zero_stream() {
        // AgentRng for passenger 0 is seeded with the bare global seed.
        for seed in 0..8 {
            let mut queue: Vec<u32> = (0..64).collect();
            let mut agent = queue.clone();
            SimRng::new(seed).shuffle(&mut queue);
            agent.shuffle(&mut SmallRng::seed_from_u64(seed));
            assert_ne!(queue, agent, "seed {seed}");
        }
    }
}

#[cfg(test)]
mod stow {
    use crate::{AgentRng, PassengerId, StowDistribution};

    #[test]
    fn constant_is_constant() {
        let mut rng = AgentRng::new(0, PassengerId(0));
        let d = StowDistribution::default();
        assert_eq!(d.sample(&mut rng), 10_000);
        assert_eq!(d.sample(&mut rng), 10_000);
    }

    #[test]
    fn uniform_in_bounds() {
        let mut rng = AgentRng::new(3, PassengerId(9));
        let d = StowDistribution::Uniform { min_ms: 1_000, max_ms: 2_000 };
        for _ in 0..500 {
            let v = d.sample(&mut rng);
            assert!((1_000..=2_000).contains(&v), "got {v}");
        }
    }

    #[test]
    fn triangular_in_bounds() {
        let mut rng = AgentRng::new(3, PassengerId(9));
        let d = StowDistribution::Triangular { min_ms: 500, mode_ms: 800, max_ms: 3_000 };
        for _ in 0..500 {
            let v = d.sample(&mut rng);
            assert!((500..=3_000).contains(&v), "got {v}");
        }
    }

    #[test]
    fn custom_closure_is_called() {
        let mut rng = AgentRng::new(0, PassengerId(0));
        let d = StowDistribution::custom(|_| 1_234);
        assert_eq!(d.sample(&mut rng), 1_234);
        assert_eq!(format!("{d:?}"), "Custom(..)");
    }
}
