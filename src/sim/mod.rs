//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Seeded RNG only, and only at world creation
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod diagnostics;
pub mod gravity;
pub mod state;
pub mod stepper;
pub mod tick;

pub use collision::{
    CollisionStats, Contact, Overlap, detect_contact, elastic_normal_velocities,
    resolve_collisions, resolve_pair,
};
pub use gravity::{acceleration_on, compute_accelerations, compute_accelerations_into};
pub use state::{Body, World, generate_bodies};
pub use stepper::Stepper;
pub use tick::tick;
