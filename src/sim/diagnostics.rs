//! Conserved-quantity helpers for logging and tests

use glam::Vec2;

use super::state::Body;
use crate::settings::PhysicsConstants;

pub fn total_mass(bodies: &[Body]) -> f32 {
    bodies.iter().map(|b| b.mass).sum()
}

pub fn total_momentum(bodies: &[Body]) -> Vec2 {
    bodies.iter().map(Body::momentum).sum()
}

pub fn kinetic_energy(bodies: &[Body]) -> f32 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Mass-weighted mean position, `None` for an empty set
pub fn center_of_mass(bodies: &[Body]) -> Option<Vec2> {
    let mass = total_mass(bodies);
    if bodies.is_empty() || mass <= 0.0 {
        return None;
    }
    let weighted: Vec2 = bodies.iter().map(|b| b.pos * b.mass).sum();
    Some(weighted / mass)
}

/// Pairwise potential of the softened law, -G m_i m_j / sqrt(r² + softening)
pub fn potential_energy(bodies: &[Body], constants: &PhysicsConstants) -> f32 {
    let mut energy = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let dist_sq = a.pos.distance_squared(b.pos) + constants.softening;
            energy -= constants.g * a.mass * b.mass / dist_sq.sqrt();
        }
    }
    energy
}

/// True when no position or velocity holds NaN/Inf
pub fn all_finite(bodies: &[Body]) -> bool {
    bodies.iter().all(|b| b.pos.is_finite() && b.vel.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_of_mass() {
        let bodies = [
            Body::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 3.0),
            Body::new(Vec2::new(4.0, 0.0), Vec2::ZERO, 1.0),
        ];
        assert_eq!(center_of_mass(&bodies), Some(Vec2::new(1.0, 0.0)));
        assert_eq!(center_of_mass(&[]), None);
        assert_eq!(total_mass(&bodies), 4.0);
    }

    #[test]
    fn test_energy_and_momentum() {
        let bodies = [
            Body::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 2.0),
            Body::new(Vec2::X, Vec2::new(0.0, -2.0), 0.5),
        ];
        assert_eq!(total_momentum(&bodies), Vec2::new(2.0, -1.0));
        assert!((kinetic_energy(&bodies) - 2.0).abs() < 1e-6);

        let pe = potential_energy(&bodies, &PhysicsConstants::default());
        assert!((pe + 1.0 / 1.01f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_all_finite() {
        let mut bodies = [Body::new(Vec2::ZERO, Vec2::ZERO, 1.0)];
        assert!(all_finite(&bodies));
        bodies[0].vel.x = f32::NAN;
        assert!(!all_finite(&bodies));
    }
}
