//! compare — run every boarding method on one cabin and print a table.
//!
//! ```text
//! compare --rows 30 --seats-per-side 3 --trials 20
//! compare --layout demos/compare/layouts/a320.csv --config demos/compare/compare.toml
//! compare --methods steffen,btf --watch
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` for per-run detail
//! or `RUST_LOG=bd_sim=trace` for every admission and seating.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bd_boarding::BoardingMethod;
use bd_cabin::{Aircraft, LayoutSpec, build_aircraft, load_layout_csv};
use bd_core::{Pacing, PassengerId, SimConfig, StowDistribution, Tick};
use bd_passenger::{PassengerSnapshot, PassengerState};
use bd_sim::{SimBuilder, SimObserver, TrialSummary, run_trials};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seat rows of the generated single-aisle cabin.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    rows: u32,

    /// Seats on each side of the aisle.
    #[arg(long, default_value_t = 3)]
    seats_per_side: usize,

    /// CSV layout (`repeat,pattern`) instead of the generated cabin.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["rows", "seats_per_side"])]
    layout: Option<PathBuf>,

    /// TOML file with `SimConfig` fields.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Comma-separated methods (btf, ftb, random, steffen).  Unknown names
    /// fall back to btf.  Default: all four.
    #[arg(long, value_delimiter = ',')]
    methods: Vec<String>,

    /// Master seed; trial `i` uses `seed + i`.
    #[arg(long)]
    seed: Option<u64>,

    /// Runs per method.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,

    /// Simulated milliseconds per tick.
    #[arg(long)]
    tick_ms: Option<u32>,

    /// Constant stow delay in milliseconds (overrides the config file).
    #[arg(long)]
    stow_ms: Option<u32>,

    /// Iteration ceiling.
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Run each method once, paced, logging cabin progress.
    #[arg(long)]
    watch: bool,

    /// Wall-clock milliseconds per tick when watching.
    #[arg(long, default_value_t = 20)]
    step_ms: u64,
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str::<SimConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(ms) = cli.tick_ms {
        config.tick_length_ms = ms;
    }
    if let Some(ms) = cli.stow_ms {
        config.stow = StowDistribution::Constant { ms };
    }
    if let Some(n) = cli.max_iterations {
        config.max_iterations = n;
    }
    config.validate()?;
    Ok(config)
}

fn load_aircraft(cli: &Cli) -> Result<Aircraft> {
    let spec = match &cli.layout {
        Some(path) => load_layout_csv(path)
            .with_context(|| format!("loading layout {}", path.display()))?,
        None => LayoutSpec::single_aisle(cli.rows, cli.seats_per_side),
    };
    let aircraft = build_aircraft(&spec)?;
    let unreachable = aircraft.unreachable_seats();
    if !unreachable.is_empty() {
        tracing::warn!(count = unreachable.len(), "layout has unreachable seats; runs will hit the ceiling");
    }
    Ok(aircraft)
}

fn selected_methods(cli: &Cli) -> Vec<BoardingMethod> {
    if cli.methods.is_empty() {
        return BoardingMethod::ALL.to_vec();
    }
    cli.methods.iter().map(|m| BoardingMethod::parse_or_default(m)).collect()
}

// ── Watch observer ────────────────────────────────────────────────────────────

/// Logs how many passengers are in each state at every snapshot.
struct ProgressLog {
    total:    usize,
    boarded:  usize,
    stalled:  usize,
}

impl SimObserver for ProgressLog {
    fn on_snapshot(&mut self, tick: Tick, passengers: &[PassengerSnapshot]) {
        self.boarded = passengers.len();
        let seated = passengers.iter().filter(|p| p.state == PassengerState::Seated).count();
        tracing::info!(
            %tick,
            boarded = self.boarded,
            seated,
            waiting = self.total - self.boarded,
            "progress"
        );
    }

    fn on_unreachable(&mut self, tick: Tick, passenger: PassengerId) {
        self.stalled += 1;
        tracing::warn!(%tick, passenger = passenger.0, "passenger stalled");
    }
}

fn watch(config: &SimConfig, aircraft: &Aircraft, methods: &[BoardingMethod], step_ms: u64) -> Result<()> {
    for &method in methods {
        let cfg = SimConfig {
            pacing: Pacing::Fixed { step_ms },
            snapshot_interval_ticks: config.snapshot_interval_ticks.max(10),
            ..config.clone()
        };
        let mut sim = SimBuilder::new(cfg, aircraft.clone()).method(method).build()?;
        let mut log = ProgressLog { total: sim.passengers.len(), boarded: 0, stalled: 0 };
        let outcome = sim.run(&mut log)?;
        println!(
            "{:<8} {:>8} ticks  {}  stalled={}",
            method,
            outcome.ticks(),
            sim.clock,
            log.stalled
        );
    }
    Ok(())
}

// ── Table ─────────────────────────────────────────────────────────────────────

fn print_table(rows: &[TrialSummary], tick_length_ms: u32) {
    let fmt_opt = |v: Option<u64>| v.map_or_else(|| "-".to_string(), |t| t.to_string());
    println!(
        "{:<8} {:>6} {:>6} {:>10} {:>8} {:>8} {:>10}",
        "method", "trials", "done", "mean", "min", "max", "mean time"
    );
    println!("{}", "-".repeat(62));
    for s in rows {
        let mean = s.mean_ticks.map_or_else(|| "-".to_string(), |m| format!("{m:.1}"));
        let secs = s
            .mean_ticks
            .map_or_else(|| "-".to_string(), |m| format!("{:.0} s", m * tick_length_ms as f64 / 1_000.0));
        println!(
            "{:<8} {:>6} {:>6} {:>10} {:>8} {:>8} {:>10}",
            s.method.as_str(),
            s.trials,
            s.completed,
            mean,
            fmt_opt(s.min_ticks),
            fmt_opt(s.max_ticks),
            secs,
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let aircraft = load_aircraft(&cli)?;
    let methods = selected_methods(&cli);

    println!("=== compare — boarding methods ===");
    println!(
        "Cabin: {} rows × {} columns, {} seats  |  tick {} ms  |  stow {:?}",
        aircraft.row_count(),
        aircraft.column_count(),
        aircraft.seat_count(),
        config.tick_length_ms,
        config.stow,
    );
    println!();

    if cli.watch {
        return watch(&config, &aircraft, &methods, cli.step_ms);
    }

    let seeds: Vec<u64> = (0..cli.trials).map(|i| config.seed.wrapping_add(i)).collect();

    let t0 = Instant::now();
    let summaries = methods
        .iter()
        .map(|&m| run_trials(&config, &aircraft, m, &seeds))
        .collect::<Result<Vec<_>, _>>()?;
    let elapsed = t0.elapsed();

    print_table(&summaries, config.tick_length_ms);
    println!();
    println!("{} runs in {:.3} s", summaries.len() as u64 * cli.trials, elapsed.as_secs_f64());
    Ok(())
}

#[cfg(test)]
mod tests {
    use bd_cabin::load_layout_reader;
    use bd_core::{LateralPacing, Pacing, SimConfig, StowDistribution};

    #[test]
    fn bundled_config_parses() {
        let config: SimConfig = toml::from_str(include_str!("../compare.toml")).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.lateral_pacing, LateralPacing::StowOnce);
        assert_eq!(config.pacing, Pacing::Unpaced);
        assert!(matches!(
            config.stow,
            StowDistribution::Triangular { min_ms: 3000, mode_ms: 8000, max_ms: 20000 }
        ));
        config.validate().unwrap();
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: SimConfig = toml::from_str("seed = 3").unwrap();
        assert_eq!(config.seed, 3);
        assert_eq!(config.tick_length_ms, SimConfig::default().tick_length_ms);
    }

    #[test]
    fn bundled_layouts_build() {
        for (csv, seats) in [
            (include_str!("../layouts/a320.csv"), 3 * 4 + 8 * 6 + 2 * 5 + 16 * 6),
            (include_str!("../layouts/regional.csv"), 18 * 4),
        ] {
            let spec = load_layout_reader(csv.as_bytes()).unwrap();
            let aircraft = bd_cabin::build_aircraft(&spec).unwrap();
            assert_eq!(aircraft.seat_count(), seats);
            assert!(aircraft.unreachable_seats().is_empty());
        }
    }
}
