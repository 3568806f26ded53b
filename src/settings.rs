//! Simulation settings
//!
//! Physical constants, the initial body distribution and the frame stepping
//! policy. Loaded from JSON; every section falls back to its defaults so a
//! partial file is enough.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};

/// Tunable physical constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConstants {
    /// Gravitational constant
    pub g: f32,
    /// Added to squared separation in the gravity pass
    pub softening: f32,
    /// Collision radius per unit mass
    pub radius_scale: f32,
    /// Minimum contact separation for collision response
    pub collision_epsilon: f32,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self {
            g: G,
            softening: SOFTENING,
            radius_scale: RADIUS_SCALE,
            collision_epsilon: COLLISION_EPSILON,
        }
    }
}

impl PhysicsConstants {
    pub fn validate(&self) -> SimResult<()> {
        let fields = [
            ("g", self.g),
            ("softening", self.softening),
            ("radius_scale", self.radius_scale),
            ("collision_epsilon", self.collision_epsilon),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// How the initial body set is generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialDistribution {
    pub body_count: usize,
    /// Uniform placement bounds on x (min, max)
    pub position_range_x: (f32, f32),
    /// Uniform placement bounds on y (min, max)
    pub position_range_y: (f32, f32),
    /// Uniform mass bounds (min, max), both positive
    pub mass_range: (f32, f32),
    /// Velocity given to every body at creation
    pub initial_velocity: Vec2,
    /// RNG seed for reproducible placement
    pub seed: u64,
}

impl Default for InitialDistribution {
    fn default() -> Self {
        Self {
            body_count: BODY_COUNT,
            position_range_x: POSITION_RANGE,
            position_range_y: POSITION_RANGE,
            mass_range: MASS_RANGE,
            initial_velocity: Vec2::ZERO,
            seed: DEFAULT_SEED,
        }
    }
}

impl InitialDistribution {
    pub fn validate(&self) -> SimResult<()> {
        check_range("position_range_x", self.position_range_x)?;
        check_range("position_range_y", self.position_range_y)?;
        check_range("mass_range", self.mass_range)?;
        if self.mass_range.0 <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "mass_range must be positive, got {:?}",
                self.mass_range
            )));
        }
        if !self.initial_velocity.is_finite() {
            return Err(SimError::InvalidConfig(
                "initial_velocity must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_range(name: &str, (min, max): (f32, f32)) -> SimResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(SimError::InvalidConfig(format!("{name} must be finite")));
    }
    if min > max {
        return Err(SimError::InvalidConfig(format!(
            "{name} is inverted: {min} > {max}"
        )));
    }
    // The sampler needs a representable width
    if !(max - min).is_finite() {
        return Err(SimError::InvalidConfig(format!(
            "{name} is too wide: ({min}, {max})"
        )));
    }
    Ok(())
}

/// Frame stepping policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepMode {
    /// One tick per frame using the raw frame time
    #[default]
    Variable,
    /// Accumulate frame time and tick in fixed increments
    Fixed { step: f32, max_substeps: u32 },
}

impl StepMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepMode::Variable => "variable",
            StepMode::Fixed { .. } => "fixed",
        }
    }

    /// Parse a mode name; `fixed` uses the default 120 Hz step
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "variable" | "var" => Some(StepMode::Variable),
            "fixed" => Some(StepMode::Fixed {
                step: SIM_DT,
                max_substeps: MAX_SUBSTEPS,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimeStepping {
    pub mode: StepMode,
}

impl TimeStepping {
    pub fn validate(&self) -> SimResult<()> {
        if let StepMode::Fixed { step, max_substeps } = self.mode {
            if !step.is_finite() || step <= 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "fixed step must be positive, got {step}"
                )));
            }
            if max_substeps == 0 {
                return Err(SimError::InvalidConfig(
                    "max_substeps must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Complete simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsConstants,
    pub initial: InitialDistribution,
    pub stepping: TimeStepping,
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> SimResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> SimResult<()> {
        self.physics.validate()?;
        self.initial.validate()?;
        self.stepping.validate()
    }
}
