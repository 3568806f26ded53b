//! Orbit Pool - a real-time 2D N-body gravity kernel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, collisions, integration)
//! - `settings`: Physical constants, initial distribution, time stepping
//! - `snapshot`: Read-only per-tick export for a rendering layer
//! - `error`: Construction and configuration errors

pub mod error;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use error::{SimError, SimResult};
pub use settings::{InitialDistribution, PhysicsConstants, Settings, StepMode, TimeStepping};
pub use sim::{Body, Stepper, World};
pub use snapshot::BodySnapshot;

/// Simulation configuration constants
pub mod consts {
    /// Gravitational constant (simulation units)
    pub const G: f32 = 1.0;
    /// Added to squared distance in the gravity pass to bound force magnitude
    pub const SOFTENING: f32 = 0.01;
    /// Collision radius per unit mass
    pub const RADIUS_SCALE: f32 = 0.02;
    /// Pairs closer than this are left unresolved (no usable contact normal)
    pub const COLLISION_EPSILON: f32 = 1.0e-4;

    /// Default body count
    pub const BODY_COUNT: usize = 2;
    /// Initial placement bounds (both axes)
    pub const POSITION_RANGE: (f32, f32) = (-0.8, 0.8);
    /// Initial mass bounds
    pub const MASS_RANGE: (f32, f32) = (0.2, 2.0);
    /// Default RNG seed for the initial distribution
    pub const DEFAULT_SEED: u64 = 1;

    /// Fixed simulation timestep when fixed stepping is enabled (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Collision radius derived from mass
#[inline]
pub fn radius_for_mass(mass: f32, radius_scale: f32) -> f32 {
    mass * radius_scale
}
