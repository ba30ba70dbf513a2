#![deny(clippy::all, clippy::pedantic)]
//! # Tiny2D Runtime
//!
//! Headless frame driver for the `tiny2d` engine. Loads a JSON scene (or a
//! built-in drop test), steps it at a fixed `dt` and logs body state. Run
//! with `--realtime` to pace frames to wall-clock time.

mod app;

use anyhow::{ensure, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command line configuration for the frame driver
#[derive(Debug, Parser)]
#[command(name = "tiny2d", about = "Step a tiny2d scene headlessly")]
pub struct Args {
    /// JSON scene file; a single dropped ball is used when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Seconds per step
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Number of steps to run
    #[arg(long, default_value_t = 600)]
    pub steps: usize,

    /// Log body state every N steps (0 disables)
    #[arg(long, default_value_t = 60)]
    pub log_every: usize,

    /// Sleep between steps so the simulation runs at wall-clock speed
    #[arg(long)]
    pub realtime: bool,

    /// Log and skip a failed step instead of stopping
    #[arg(long)]
    pub skip_errors: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    ensure!(args.dt.is_finite() && args.dt > 0.0, "--dt must be a positive number of seconds");
    app::run(&args)
}
