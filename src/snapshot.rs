//! Per-tick export for a rendering layer
//!
//! The renderer copies these into its own vertex buffer each frame; nothing
//! here is retained by the simulation.

use bytemuck::{Pod, Zeroable};

use crate::sim::Body;

/// Position and mass of one body, laid out for direct GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct BodySnapshot {
    pub position: [f32; 2],
    pub mass: f32,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            position: body.pos.to_array(),
            mass: body.mass,
        }
    }
}

impl BodySnapshot {
    /// Light bodies
    pub const BASE_COLOR: [f32; 3] = [0.1, 0.6, 1.0];
    /// Heavy bodies
    pub const HEAVY_COLOR: [f32; 3] = [1.0, 0.9, 0.2];

    /// Point sprite size in pixels
    pub fn point_size(&self) -> f32 {
        self.mass * 10.0
    }

    /// Blend from base to heavy color, saturating at mass 2
    pub fn color(&self) -> [f32; 3] {
        let t = (self.mass / 2.0).clamp(0.0, 1.0);
        let mut out = [0.0; 3];
        for (i, c) in out.iter_mut().enumerate() {
            *c = Self::BASE_COLOR[i] * (1.0 - t) + Self::HEAVY_COLOR[i] * t;
        }
        out
    }
}

/// Raw bytes of a snapshot slice
pub fn as_bytes(snapshots: &[BodySnapshot]) -> &[u8] {
    bytemuck::cast_slice(snapshots)
}
