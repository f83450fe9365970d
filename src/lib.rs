#![allow(clippy::collapsible_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod app;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::{App, ChartSource, Presentation};

use anyhow::{Result, bail};
// CLI argument parsing
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Time-scale multiplier for the whole presentation (2.0 plays twice as fast)
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Seed for the synthetic price series, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Plot the generated series instead of the fixed portfolio history
    #[arg(long, default_value_t = false)]
    pub synthetic_chart: bool,

    /// Start with every section already revealed
    #[arg(long, default_value_t = false)]
    pub skip_intro: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            speed: 1.0,
            seed: None,
            synthetic_chart: false,
            skip_intro: false,
        }
    }
}

impl Cli {
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            bail!("--speed must be a positive number, got {}", self.speed);
        }
        Ok(())
    }

    pub fn chart_source(&self) -> ChartSource {
        if self.synthetic_chart {
            ChartSource::Synthetic
        } else {
            ChartSource::Portfolio
        }
    }

    /// Seeded when `--seed` is given, otherwise drawn from the OS.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
