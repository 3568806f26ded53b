//! Simulation state and core types
//!
//! The world owns the body sequence exclusively. Slot order is stable for the
//! whole run so a renderer can map slot to visual element.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::CollisionStats;
use super::tick::tick;
use crate::error::{SimError, SimResult};
use crate::radius_for_mass;
use crate::settings::{InitialDistribution, PhysicsConstants, Settings};
use crate::snapshot::BodySnapshot;

/// A point mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Always positive, constant for the run
    pub mass: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, mass: f32) -> Self {
        Self { pos, vel, mass }
    }

    /// Collision radius (derived, never stored)
    #[inline]
    pub fn radius(&self, radius_scale: f32) -> f32 {
        radius_for_mass(self.mass, radius_scale)
    }

    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }

    fn validate(&self, index: usize) -> SimResult<()> {
        let invalid = |reason: String| SimError::InvalidBodyState { index, reason };
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(invalid(format!("mass must be positive, got {}", self.mass)));
        }
        if !self.pos.is_finite() {
            return Err(invalid(format!("non-finite position {}", self.pos)));
        }
        if !self.vel.is_finite() {
            return Err(invalid(format!("non-finite velocity {}", self.vel)));
        }
        Ok(())
    }
}

/// Draw from `[min, max]`, returning `min` for a degenerate range
fn sample(rng: &mut Pcg32, (min, max): (f32, f32)) -> f32 {
    if min >= max {
        min
    } else {
        rng.random_range(min..=max)
    }
}

/// Generate the initial body set from a distribution
pub fn generate_bodies(dist: &InitialDistribution) -> Vec<Body> {
    let mut rng = Pcg32::seed_from_u64(dist.seed);
    (0..dist.body_count)
        .map(|_| {
            let x = sample(&mut rng, dist.position_range_x);
            let y = sample(&mut rng, dist.position_range_y);
            let mass = sample(&mut rng, dist.mass_range);
            Body::new(Vec2::new(x, y), dist.initial_velocity, mass)
        })
        .collect()
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    constants: PhysicsConstants,
    /// Simulated seconds elapsed
    time: f64,
    /// Ticks executed
    tick_count: u64,
}

impl World {
    /// Build a world from validated settings
    pub fn new(settings: &Settings) -> SimResult<Self> {
        settings.validate()?;
        let bodies = generate_bodies(&settings.initial);
        let world = Self::from_bodies(bodies, settings.physics)?;
        log::info!(
            "World created: {} bodies, seed {}, total mass {:.3}",
            world.bodies.len(),
            settings.initial.seed,
            world.bodies.iter().map(|b| b.mass).sum::<f32>()
        );
        Ok(world)
    }

    /// Build a world from an explicit body set
    pub fn from_bodies(bodies: Vec<Body>, constants: PhysicsConstants) -> SimResult<Self> {
        constants.validate()?;
        for (index, body) in bodies.iter().enumerate() {
            body.validate(index)?;
        }
        Ok(Self {
            bodies,
            constants,
            time: 0.0,
            tick_count: 0,
        })
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> CollisionStats {
        let stats = tick(&mut self.bodies, &self.constants, dt);
        self.time += f64::from(dt);
        self.tick_count += 1;
        if stats.resolved > 0 || stats.skipped_degenerate > 0 {
            log::debug!(
                "tick {}: {} collisions resolved, {} coincident pairs skipped",
                self.tick_count,
                stats.resolved,
                stats.skipped_degenerate
            );
        }
        stats
    }

    /// Read-only view of the bodies in slot order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn constants(&self) -> &PhysicsConstants {
        &self.constants
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Refill a caller-owned buffer with this tick's render data
    pub fn snapshot_into(&self, out: &mut Vec<BodySnapshot>) {
        out.clear();
        out.extend(self.bodies.iter().map(BodySnapshot::from));
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        let mut out = Vec::with_capacity(self.bodies.len());
        self.snapshot_into(&mut out);
        out
    }
}
