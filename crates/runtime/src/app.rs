//! Main stepping loop for the runtime binary.

use anyhow::{Context, Result};
use std::time::{Duration, Instant};
use tiny2d::{Engine, Motion, ShapeKind, Vec2};
use tiny2d_scene::Scene;

use crate::Args;

/// World `(0, 0, 600, 600)` with a single ball dropped from `y = 100`.
fn default_engine() -> Result<Engine> {
    let mut engine = Engine::new(Vec2::ZERO, 600.0, 600.0, Vec2::new(0.0, 1000.0))?;
    engine.add_circle(Vec2::new(300.0, 100.0), 30.0, Motion::Dynamic, Vec2::ZERO, 1.0)?;
    Ok(engine)
}

fn load_engine(args: &Args) -> Result<Engine> {
    match &args.scene {
        Some(path) => {
            tracing::info!("Loading scene from {}", path.display());
            Ok(Scene::load(path)?.into_engine()?.engine)
        }
        None => {
            tracing::info!("No scene given, using the default drop test");
            default_engine()
        }
    }
}

fn log_bodies(engine: &Engine, step: usize) {
    let info = engine.debug_info();
    tracing::info!(
        "Step {} complete. contacts={} kinetic_energy={:.2}",
        step,
        info.last_step_contacts,
        info.kinetic_energy
    );
    for (id, body) in engine.bodies().filter(|(_, b)| b.kind() == ShapeKind::Circle && b.is_dynamic()) {
        let p = body.position();
        let v = body.velocity().unwrap_or(Vec2::ZERO);
        tracing::debug!(
            "  body {} at ({:.2}, {:.2}) v=({:.2}, {:.2})",
            id.raw(),
            p.x,
            p.y,
            v.x,
            v.y
        );
    }
}

/// Step the configured scene `args.steps` times.
///
/// # Errors
///
/// Returns scene loading errors, and the first step error unless
/// `--skip-errors` is set.
pub fn run(args: &Args) -> Result<()> {
    let mut engine = load_engine(args)?;
    let info = engine.debug_info();
    tracing::info!(
        "Starting simulation loop for {} steps with dt = {} ({} bodies, {} dynamic)...",
        args.steps,
        args.dt,
        info.num_bodies,
        info.num_dynamic
    );

    let frame_duration = Duration::from_secs_f32(args.dt);
    let mut failed = 0_usize;
    for i in 0..args.steps {
        let frame_start = Instant::now();

        if let Err(e) = engine.step(args.dt) {
            if args.skip_errors {
                tracing::warn!("Skipping failed step {}: {}", i, e);
                failed += 1;
            } else {
                tracing::error!("Error during simulation step {}: {}", i, e);
                return Err(e).with_context(|| format!("simulation step {i} failed"));
            }
        }

        if args.log_every > 0 && (i + 1) % args.log_every == 0 {
            log_bodies(&engine, i + 1);
        }

        if args.realtime {
            let frame_time = frame_start.elapsed();
            if frame_time < frame_duration {
                std::thread::sleep(frame_duration - frame_time);
            }
        }
    }

    tracing::info!("Simulation loop finished after {} steps ({} failed).", args.steps, failed);
    for (id, body) in engine.bodies().filter(|(_, b)| b.is_dynamic()) {
        tracing::info!("Final position of body {}: {:?}", id.raw(), body.position());
    }
    Ok(())
}
