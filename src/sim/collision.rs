//! Pairwise collision detection and response
//!
//! Bodies are discs with radius proportional to mass. Overlapping pairs get a
//! 1D elastic exchange along the contact normal, then are pushed apart by half
//! the penetration each.
//!
//! Pairs are visited once per pass in `i < j` order and each resolution sees
//! the positions left by the previous one. A later pair may start (or stop)
//! overlapping because of an earlier correction; nothing is re-examined.

use glam::Vec2;

use super::state::Body;
use crate::settings::PhysicsConstants;

/// Geometry of an overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal from the first body toward the second
    pub normal: Vec2,
    /// Center separation
    pub dist: f32,
    /// Overlap depth (radius sum minus separation)
    pub penetration: f32,
}

/// Overlap state of a single pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlap {
    /// Not overlapping
    Clear,
    /// Overlapping but too close to define a normal; left untouched
    Degenerate,
    /// Overlapping with a usable normal
    Contact(Contact),
}

/// Per-pass counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub pairs_checked: usize,
    pub resolved: usize,
    pub skipped_degenerate: usize,
}

/// Overlap test between two bodies
pub fn detect_contact(a: &Body, b: &Body, constants: &PhysicsConstants) -> Overlap {
    let diff = b.pos - a.pos;
    let dist_sq = diff.length_squared();
    let r_sum = a.radius(constants.radius_scale) + b.radius(constants.radius_scale);

    if dist_sq >= r_sum * r_sum {
        return Overlap::Clear;
    }

    let dist = dist_sq.sqrt();
    if dist < constants.collision_epsilon {
        return Overlap::Degenerate;
    }

    Overlap::Contact(Contact {
        normal: diff / dist,
        dist,
        penetration: r_sum - dist,
    })
}

/// Post-collision normal speeds for a 1D elastic collision
#[inline]
pub fn elastic_normal_velocities(v1: f32, v2: f32, m1: f32, m2: f32) -> (f32, f32) {
    let total = m1 + m2;
    let v1_new = (v1 * (m1 - m2) + 2.0 * m2 * v2) / total;
    let v2_new = (v2 * (m2 - m1) + 2.0 * m1 * v1) / total;
    (v1_new, v2_new)
}

/// Resolve a single pair in place
///
/// Returns the overlap found; only `Overlap::Contact` mutates the bodies.
pub fn resolve_pair(a: &mut Body, b: &mut Body, constants: &PhysicsConstants) -> Overlap {
    let contact = match detect_contact(a, b, constants) {
        Overlap::Contact(contact) => contact,
        other => return other,
    };
    let n = contact.normal;

    // Only the normal component changes; tangential velocity is kept
    let v1 = a.vel.dot(n);
    let v2 = b.vel.dot(n);
    let (v1_new, v2_new) = elastic_normal_velocities(v1, v2, a.mass, b.mass);
    a.vel += (v1_new - v1) * n;
    b.vel += (v2_new - v2) * n;

    // Applied whenever the pair overlaps, even if already separating
    let correction = n * (contact.penetration / 2.0);
    a.pos -= correction;
    b.pos += correction;

    Overlap::Contact(contact)
}

/// Single sequential pass over every unordered pair
pub fn resolve_collisions(bodies: &mut [Body], constants: &PhysicsConstants) -> CollisionStats {
    let mut stats = CollisionStats::default();

    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for (offset, b) in tail.iter_mut().enumerate() {
            stats.pairs_checked += 1;
            match resolve_pair(a, b, constants) {
                Overlap::Clear => {}
                Overlap::Degenerate => {
                    stats.skipped_degenerate += 1;
                    log::trace!("Skipping coincident pair ({}, {})", i, i + 1 + offset);
                }
                Overlap::Contact(_) => stats.resolved += 1,
            }
        }
    }

    stats
}
