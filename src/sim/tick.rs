//! One simulation tick
//!
//! Semi-implicit Euler with a collision pass between the velocity and
//! position updates:
//! 1. gravity accelerations from current positions
//! 2. `vel += acc * dt`
//! 3. single collision pass
//! 4. `pos += vel * dt`
//!
//! `dt` is used as given. Large steps can tunnel or blow up; see `Stepper`
//! for fixed-step accumulation.

use super::collision::{CollisionStats, resolve_collisions};
use super::gravity::compute_accelerations;
use super::state::Body;
use crate::settings::PhysicsConstants;

/// Advance the bodies by `dt` seconds
pub fn tick(bodies: &mut [Body], constants: &PhysicsConstants, dt: f32) -> CollisionStats {
    let acc = compute_accelerations(bodies, constants);

    for (body, a) in bodies.iter_mut().zip(&acc) {
        body.vel += *a * dt;
    }

    let stats = resolve_collisions(bodies, constants);

    for body in bodies.iter_mut() {
        body.pos += body.vel * dt;
    }

    stats
}
