//! Orbit Pool entry point
//!
//! Headless runner: builds a world from settings, drives it with a frame
//! stepper and logs conserved quantities. Rendering is left to a host.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use orbit_pool::sim::diagnostics::{
    all_finite, center_of_mass, kinetic_energy, potential_energy, total_momentum,
};
use orbit_pool::{Settings, StepMode, Stepper, World};

#[derive(Parser, Debug)]
#[command(version, about = "Headless 2D N-body gravity + collision runner")]
struct Args {
    /// JSON settings file (defaults used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override body count
    #[arg(short, long)]
    bodies: Option<usize>,
    /// Override RNG seed
    #[arg(short, long)]
    seed: Option<u64>,
    /// Frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u32,
    /// Frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Stepping mode override: "variable" or "fixed"
    #[arg(long)]
    mode: Option<String>,
    /// Log diagnostics every N frames
    #[arg(long, default_value_t = 60)]
    report_every: u32,
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if let Some(count) = args.bodies {
        settings.initial.body_count = count;
    }
    if let Some(seed) = args.seed {
        settings.initial.seed = seed;
    }
    if let Some(mode) = &args.mode {
        settings.stepping.mode = StepMode::from_str(mode)
            .with_context(|| format!("unknown stepping mode '{mode}'"))?;
    }

    settings.validate()?;
    Ok(settings)
}

fn report(world: &World, frame: u32) {
    let bodies = world.bodies();
    let ke = kinetic_energy(bodies);
    let pe = potential_energy(bodies, world.constants());
    log::info!(
        "frame {frame} t={:.3}s ticks={} E={:.5} (K={ke:.5}, U={pe:.5}) p={} com={:?}",
        world.time(),
        world.tick_count(),
        ke + pe,
        total_momentum(bodies),
        center_of_mass(bodies),
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Orbit Pool (headless) starting...");

    let settings = load_settings(&args)?;
    let mut world = World::new(&settings)?;
    let mut stepper = Stepper::new(settings.stepping.mode);
    log::info!("Stepping mode: {}", stepper.mode().as_str());

    report(&world, 0);
    for frame in 1..=args.frames {
        stepper.advance(&mut world, args.dt);

        if !all_finite(world.bodies()) {
            anyhow::bail!("simulation state became non-finite at frame {frame}");
        }
        if args.report_every > 0 && frame % args.report_every == 0 {
            report(&world, frame);
        }
    }

    if stepper.dropped_time() > 0.0 {
        log::warn!("Dropped {:.3}s of frame time", stepper.dropped_time());
    }
    log::info!("Done: {} ticks, {:.3}s simulated", world.tick_count(), world.time());
    Ok(())
}
