//! Softened Newtonian gravity over all body pairs
//!
//! F = G * m_i * m_j / (r² + softening), directed along the softened
//! separation. Brute force O(N²); each body's acceleration is accumulated by
//! exactly one outer iteration, so slots never share a write target.

use glam::Vec2;

use super::state::Body;
use crate::settings::PhysicsConstants;

/// Net acceleration on body `i` from every other body
pub fn acceleration_on(i: usize, bodies: &[Body], constants: &PhysicsConstants) -> Vec2 {
    let target = &bodies[i];
    let mut acc = Vec2::ZERO;

    for (j, other) in bodies.iter().enumerate() {
        if i == j {
            continue;
        }

        let diff = other.pos - target.pos;
        // Always >= softening, so the division below is safe at exact overlap
        let dist_sq = diff.length_squared() + constants.softening;
        let dist = dist_sq.sqrt();
        let force = constants.g * target.mass * other.mass / dist_sq;
        let dir = diff / dist;
        acc += dir * (force / target.mass);
    }

    acc
}

/// Accelerations for every body, in slot order. Does not mutate `bodies`.
pub fn compute_accelerations(bodies: &[Body], constants: &PhysicsConstants) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(bodies.len());
    compute_accelerations_into(bodies, constants, &mut out);
    out
}

/// Same as [`compute_accelerations`], reusing a caller buffer
pub fn compute_accelerations_into(
    bodies: &[Body],
    constants: &PhysicsConstants,
    out: &mut Vec<Vec2>,
) {
    out.clear();
    out.extend((0..bodies.len()).map(|i| acceleration_on(i, bodies, constants)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f32, y: f32, mass: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::ZERO, mass)
    }

    #[test]
    fn test_single_body_no_self_force() {
        let bodies = [body(0.3, -0.2, 5.0)];
        let acc = compute_accelerations(&bodies, &PhysicsConstants::default());
        assert_eq!(acc, vec![Vec2::ZERO]);
    }

    #[test]
    fn test_empty_system() {
        assert!(compute_accelerations(&[], &PhysicsConstants::default()).is_empty());
    }

    #[test]
    fn test_newton_third_law() {
        let bodies = [body(-0.4, 0.1, 2.0), body(0.3, -0.5, 3.0)];
        let acc = compute_accelerations(&bodies, &PhysicsConstants::default());

        let net = acc[0] * bodies[0].mass + acc[1] * bodies[1].mass;
        assert!(net.length() < 1e-5, "net force {net}");
        // Attraction: body 0 pulled toward body 1
        assert!(acc[0].dot(bodies[1].pos - bodies[0].pos) > 0.0);
    }

    #[test]
    fn test_magnitude_matches_softened_law() {
        let constants = PhysicsConstants::default();
        let bodies = [body(0.0, 0.0, 1.0), body(1.0, 0.0, 2.0)];
        let acc = compute_accelerations(&bodies, &constants);

        let dist_sq: f32 = 1.0 + constants.softening;
        // Direction is divided by the softened distance, so it is slightly short of unit
        let expected = constants.g * 2.0 / dist_sq / dist_sq.sqrt();
        assert!((acc[0].length() - expected).abs() < 1e-5);
        assert!(acc[0].y.abs() < 1e-7);
        // Lighter body accelerates twice as much
        assert!((acc[0].length() - 2.0 * acc[1].length()).abs() < 1e-5);
    }

    #[test]
    fn test_exact_overlap_is_finite() {
        let bodies = [body(0.2, 0.2, 1.0), body(0.2, 0.2, 1.0)];
        let acc = compute_accelerations(&bodies, &PhysicsConstants::default());
        assert!(acc.iter().all(|a| a.is_finite()));
        assert_eq!(acc[0], Vec2::ZERO);
    }

    #[test]
    fn test_inputs_untouched() {
        let bodies = vec![body(0.0, 0.0, 1.0), body(0.5, 0.5, 1.0), body(-0.5, 0.2, 0.3)];
        let before = bodies.clone();
        let _ = compute_accelerations(&bodies, &PhysicsConstants::default());
        assert_eq!(bodies, before);
    }

    #[test]
    fn test_into_reuses_buffer() {
        let bodies = [body(0.0, 0.0, 1.0), body(0.5, 0.0, 1.0)];
        let constants = PhysicsConstants::default();
        let mut buf = vec![Vec2::ONE; 7];
        compute_accelerations_into(&bodies, &constants, &mut buf);
        assert_eq!(buf, compute_accelerations(&bodies, &constants));
    }

    #[test]
    fn test_superposition() {
        // Symmetric pair around the origin cancels on the middle body
        let bodies = [body(-1.0, 0.0, 1.0), body(0.0, 0.0, 1.0), body(1.0, 0.0, 1.0)];
        let acc = compute_accelerations(&bodies, &PhysicsConstants::default());
        assert!(acc[1].length() < 1e-6);
        assert!((acc[0].x + acc[2].x).abs() < 1e-6);
    }
}
