//! phase_sweep — end-to-end demo of the 2D Ising sweep workspace.
//!
//! Runs a single low-temperature simulation from a vertical domain wall,
//! then a full phase-transition sweep across the critical temperature and
//! prints the per-temperature table.
//!
//! ```text
//! phase_sweep [CONFIG.json] [-v|-vv|-vvv] [-h]
//! ```
//!
//! Without a config file the sweep uses a small grid that finishes in a few
//! seconds and writes its output under `output/phase_sweep`.

mod cli;
mod logging;


use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use ising_core::{Lattice, Orientation, SweepConfig, T_CRITICAL, domain_wall};
use ising_output::SUMMARY_CSV_FILE;
use ising_sim::{EngineBuilder, Observables, StepObserver};
use ising_sweep::analyze_phase_transition;
use tracing::info;

use cli::Cli;
use logging::setup_logging;

// ── Constants ─────────────────────────────────────────────────────────────────

const WALL_SIZE:        usize = 50;
const WALL_TEMPERATURE: f64   = 1.5;   // well below Tc: the wall persists
const WALL_STEPS:       usize = 1_000;
const WALL_BURN_IN:     usize = 100;
const WALL_SEED:        u64   = 7;
const PROGRESS_EVERY:   usize = 250;

const OUTPUT_DIR:       &str  = "output/phase_sweep";

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SweepConfig> {
    let Some(path) = path else {
        return Ok(SweepConfig {
            num_points: 16,
            size:       24,
            steps:      600,
            burn_in:    100,
            batch_dir:  Some(PathBuf::from(OUTPUT_DIR)),
            ..SweepConfig::default()
        });
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct Progress {
    interval: usize,
    spins:    f64,
}

impl StepObserver for Progress {
    fn on_burn_in_end(&mut self, energy: f64, magnetization: i64) {
        println!(
            "  burn-in done     e = {:>8.4}  m = {:>7.4}",
            energy / self.spins,
            magnetization as f64 / self.spins
        );
    }

    fn on_step_end(&mut self, step: usize, energy: f64, magnetization: i64) {
        if (step + 1) % self.interval == 0 {
            println!(
                "  sweep {:>6}     e = {:>8.4}  m = {:>7.4}",
                step + 1,
                energy / self.spins,
                magnetization as f64 / self.spins
            );
        }
    }

    fn on_run_end(&mut self, lattice: &Lattice) {
        let up = lattice.spins().iter().filter(|&&s| s > 0).count();
        println!("  final lattice    {up} of {} spins up", lattice.len());
    }
}

fn run_domain_wall() -> Result<()> {
    println!("Domain wall: N = {WALL_SIZE}, T = {WALL_TEMPERATURE}");
    let initial = domain_wall(WALL_SIZE, Orientation::Vertical)?;
    let mut engine = EngineBuilder::new(WALL_SIZE, WALL_TEMPERATURE)
        .initial(initial)
        .seed(WALL_SEED)
        .build()?;

    let mut progress = Progress {
        interval: PROGRESS_EVERY,
        spins:    (WALL_SIZE * WALL_SIZE) as f64,
    };
    let run = engine.simulate_observed(WALL_STEPS, WALL_BURN_IN, &mut progress);
    let obs = Observables::from_trajectory(&run, WALL_TEMPERATURE, 0)?
        .per_spin(WALL_SIZE);

    println!(
        "  <e> = {:.4}  <|m|> = {:.4}  C = {:.4}  chi = {:.4}",
        obs.mean_energy,
        obs.mean_magnetization,
        obs.specific_heat,
        obs.susceptibility,
    );
    println!();
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    println!("=== phase_sweep — 2D Ising model ===");
    println!("Tc = {T_CRITICAL:.6}");
    println!();

    run_domain_wall()?;

    let config = load_config(cli.config.as_deref())?;
    info!(?config, "sweep configuration");
    println!(
        "Sweep: T in [{}, {}], {} points, N = {}, {} sweeps (+{} burn-in), seed {}",
        config.t_min,
        config.t_max,
        config.num_points,
        config.size,
        config.steps,
        config.burn_in,
        config.seed,
    );

    let t0 = Instant::now();
    let sweep = analyze_phase_transition(&config)?;
    println!("Sweep complete in {:.3} s", t0.elapsed().as_secs_f64());
    println!();

    let s = &sweep.summary;
    let spins = (config.size * config.size) as f64;
    println!("{:>8} {:>10} {:>10} {:>10} {:>10}", "T", "<e>", "<|m|>", "C/N²", "chi/N²");
    println!("{}", "-".repeat(52));
    for i in 0..s.len() {
        println!(
            "{:>8.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            s.temperatures[i],
            s.energies[i] / spins,
            s.magnetizations[i] / spins,
            s.specific_heats[i] / spins,
            s.susceptibilities[i] / spins,
        );
    }

    if let Some((i, _)) = s
        .specific_heats
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
    {
        println!();
        println!("Specific-heat peak at T = {:.4}", s.temperatures[i]);
    }

    if let Some(dir) = &config.batch_dir {
        println!("Summary written to {}", dir.join(SUMMARY_CSV_FILE).display());
    }
    Ok(())
}
